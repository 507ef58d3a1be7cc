use crate::error::GeneratorError;
use crate::tree::FileTree;
use starbase_utils::json::{self, JsonValue};
use tracing::debug;

/// Re-encode staged JSON files with pretty formatting, in path order.
/// Stands in for the host's formatter; other file kinds pass through
/// untouched.
pub fn format_staged_files(tree: &mut dyn FileTree) -> Result<(), GeneratorError> {
    for path in tree.changed_paths() {
        if !path.extension().is_some_and(|ext| ext == "json") {
            continue;
        }

        let Some(content) = tree.read(&path) else {
            continue;
        };

        debug!("Formatting staged file {}", path.display());

        let value: JsonValue = json::parse(content)?;

        tree.write(&path, json::format(&value, true)?);
    }

    Ok(())
}
