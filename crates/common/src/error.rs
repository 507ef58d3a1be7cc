use starbase_utils::fs::FsError;
use starbase_utils::json::JsonError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("No project named {0} exists in the workspace.")]
    UnknownProject(String),

    #[error("Invalid generator options: {0}")]
    InvalidOptions(String),

    #[error("Unsupported linter {0}, expected eslint or tslint.")]
    UnsupportedLinter(String),

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    Json(#[from] JsonError),
}
