// https://nx.dev/reference/project-configuration

use serde::{Deserialize, Serialize};
use starbase_utils::json::JsonValue;
use std::collections::BTreeMap;
use std::path::PathBuf;

// Only type fields this workspace actually reads or writes!

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetConfig {
    pub executor: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<JsonValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,

    pub root: PathBuf,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_root: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub targets: BTreeMap<String, TargetConfig>,
}
