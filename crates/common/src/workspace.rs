use crate::error::GeneratorError;
use crate::project_json::ProjectConfig;
use crate::tree::FileTree;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use starbase_utils::json;
use std::collections::BTreeMap;
use std::path::Path;

pub const WORKSPACE_CONFIG_FILE: &str = "workspace.json";

#[derive(Deserialize, Serialize)]
struct WorkspaceJson {
    version: u32,
    projects: BTreeMap<String, ProjectConfig>,
}

/// The host's registry of buildable projects. Generators look projects up
/// here and patch their targets; the host persists the result.
#[derive(Default)]
pub struct Workspace {
    pub projects: FxHashMap<String, ProjectConfig>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the registry from a `workspace.json` in the tree, or start
    /// empty when there is none.
    pub fn from_tree(tree: &dyn FileTree) -> Result<Self, GeneratorError> {
        let Some(content) = tree.read(Path::new(WORKSPACE_CONFIG_FILE)) else {
            return Ok(Self::default());
        };

        let config: WorkspaceJson = json::parse(content)?;

        Ok(Self {
            projects: config.projects.into_iter().collect(),
        })
    }

    pub fn add_project(&mut self, name: impl AsRef<str>, config: ProjectConfig) {
        self.projects.insert(name.as_ref().to_owned(), config);
    }

    pub fn get_project(&self, name: &str) -> Result<&ProjectConfig, GeneratorError> {
        self.projects
            .get(name)
            .ok_or_else(|| GeneratorError::UnknownProject(name.to_owned()))
    }

    pub fn get_project_mut(&mut self, name: &str) -> Result<&mut ProjectConfig, GeneratorError> {
        self.projects
            .get_mut(name)
            .ok_or_else(|| GeneratorError::UnknownProject(name.to_owned()))
    }

    /// Stage the registry back as `workspace.json`, projects in name order.
    pub fn save(&self, tree: &mut dyn FileTree) -> Result<(), GeneratorError> {
        let config = WorkspaceJson {
            version: 1,
            projects: self
                .projects
                .iter()
                .map(|(name, project)| (name.to_owned(), project.to_owned()))
                .collect(),
        };

        tree.write(
            Path::new(WORKSPACE_CONFIG_FILE),
            json::format(&config, true)?,
        );

        Ok(())
    }
}
