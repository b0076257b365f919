//! Workspace configuration types, the aggregate built from a devfile

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The stored, runnable description of an environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Recipe type tag, equals the originating tool type verbatim
    #[serde(rename = "type")]
    pub recipe_type: String,
    /// Content format marker, e.g. `application/x-yaml`
    pub content_type: String,
    /// Serialized (filtered) object list
    pub content: String,
}

/// A named runtime environment in the workspace config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub recipe: Recipe,
}

impl Environment {
    pub fn new(recipe: Recipe) -> Self {
        Self { recipe }
    }
}

/// A runnable action carried over from the devfile
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    pub name: String,
    /// Command type, e.g. `exec`
    #[serde(rename = "type", default)]
    pub command_type: String,
    #[serde(default)]
    pub command_line: String,
    /// Free-form attributes, including the tool-name and machine-name tags
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,
}

/// The workspace configuration aggregate under construction
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceConfig {
    #[serde(default)]
    pub name: String,
    /// Environment name -> environment; keyed by the originating tool name
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub environments: HashMap<String, Environment>,
    /// Name of the environment started by default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_env: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<Command>,
}

impl WorkspaceConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
