use crate::error::GeneratorError;
use starbase_utils::fs;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A staged view of the workspace file system. Generators only read and
/// write through this interface, never real storage.
pub trait FileTree {
    fn read(&self, path: &Path) -> Option<String>;

    fn write(&mut self, path: &Path, content: String);

    fn exists(&self, path: &Path) -> bool {
        self.read(path).is_some()
    }

    /// Paths with pending writes, in ascending path order.
    fn changed_paths(&self) -> Vec<PathBuf>;
}

#[derive(Default)]
pub struct MemoryTree {
    files: BTreeMap<PathBuf, String>,
    staged: BTreeMap<PathBuf, String>,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert base state without recording a change. Host and test setup
    /// only.
    pub fn seed(&mut self, path: impl AsRef<Path>, content: impl AsRef<str>) {
        self.files
            .insert(path.as_ref().to_path_buf(), content.as_ref().to_owned());
    }

    /// Write all staged files under the provided root, then fold them into
    /// the base state. Called by the host once every generator has run.
    pub fn commit(&mut self, root: &Path) -> Result<(), GeneratorError> {
        for (path, content) in &self.staged {
            let target = root.join(path);

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }

            fs::write_file(target, content)?;
        }

        self.files.append(&mut self.staged);

        Ok(())
    }
}

impl FileTree for MemoryTree {
    fn read(&self, path: &Path) -> Option<String> {
        self.staged
            .get(path)
            .or_else(|| self.files.get(path))
            .cloned()
    }

    fn write(&mut self, path: &Path, content: String) {
        self.staged.insert(path.to_path_buf(), content);
    }

    fn changed_paths(&self) -> Vec<PathBuf> {
        self.staged.keys().cloned().collect()
    }
}
