use crate::options::{Linter, LintProjectOptions};
use nx_generator_common::project_json::TargetConfig;
use std::path::Path;

pub const ESLINT_EXECUTOR: &str = "@nrwl/linter:eslint";
pub const TSLINT_EXECUTOR: &str = "@angular-devkit/build-angular:tslint";

/// Build the `lint` target entry, shaped for the selected linter's executor.
pub fn create_lint_target(options: &LintProjectOptions, project_root: &Path) -> TargetConfig {
    match options.linter {
        Linter::EsLint => TargetConfig {
            executor: ESLINT_EXECUTOR.into(),
            options: Some(serde_json::json!({
                "lintFilePatterns": options.eslint_file_patterns,
            })),
            outputs: Some(vec!["{options.outputFile}".into()]),
        },
        Linter::TsLint => TargetConfig {
            executor: TSLINT_EXECUTOR.into(),
            options: Some(serde_json::json!({
                "exclude": [
                    "**/node_modules/**",
                    format!("!{}/**/*", project_root.display()),
                ],
                "tsConfig": options.ts_config_paths,
            })),
            outputs: None,
        },
    }
}
