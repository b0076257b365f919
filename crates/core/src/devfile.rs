//! Devfile types representing a portable workspace definition

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::DevfileError;

/// One declared development tool in a devfile.
///
/// For recipe-type tools (`kubernetes`/`openshift`) the content of the
/// backing object list comes either from `local_content` or is fetched
/// through a content provider using `local` as the reference.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Tool name, unique within the devfile
    pub name: String,
    /// Tool type, e.g. `kubernetes` or `openshift`
    #[serde(rename = "type")]
    pub tool_type: String,
    /// Reference path of the backing object list, relative to the devfile
    #[serde(default)]
    pub local: String,
    /// Inline object list content; when set, fetching is skipped entirely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_content: Option<String>,
    /// Label selector narrowing the object list; empty means "keep all"
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub selector: BTreeMap<String, String>,
}

/// A single action of a devfile command
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DevfileAction {
    /// Action type, e.g. `exec`
    #[serde(rename = "type", default)]
    pub action_type: String,
    /// Name of the tool this action runs in
    #[serde(default)]
    pub tool: String,
    /// The command line to execute
    #[serde(default)]
    pub command: String,
    /// Working directory for the command
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workdir: Option<String>,
}

/// A user-defined runnable action declared in a devfile
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DevfileCommand {
    pub name: String,
    #[serde(default)]
    pub actions: Vec<DevfileAction>,
}

/// A devfile: the portable definition a workspace config is built from
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Devfile {
    #[serde(default)]
    pub spec_version: String,
    pub name: String,
    #[serde(default)]
    pub tools: Vec<Tool>,
    #[serde(default)]
    pub commands: Vec<DevfileCommand>,
}

impl Devfile {
    /// Parse a devfile from YAML text
    pub fn from_yaml(text: &str) -> Result<Self, DevfileError> {
        serde_yaml::from_str(text).map_err(|e| DevfileError::InvalidDevfile(e.to_string()))
    }

    /// Read and parse a devfile from disk
    pub fn from_file(path: &Path) -> Result<Self, DevfileError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_devfile_from_yaml() {
        let devfile = Devfile::from_yaml(
            r#"
            specVersion: 0.0.1
            name: petclinic-dev-environment
            tools:
              - name: mysql
                type: kubernetes
                local: mysql.yaml
                selector:
                  app.kubernetes.io/component: database
            commands:
              - name: build
                actions:
                  - type: exec
                    tool: mysql
                    command: mvn package
            "#,
        )
        .unwrap();

        assert_eq!(devfile.name, "petclinic-dev-environment");
        assert_eq!(devfile.tools.len(), 1);
        assert_eq!(devfile.tools[0].tool_type, "kubernetes");
        assert_eq!(
            devfile.tools[0].selector.get("app.kubernetes.io/component"),
            Some(&"database".to_string())
        );
        assert_eq!(devfile.commands[0].actions[0].tool, "mysql");
    }

    #[test]
    fn test_devfile_selector_defaults_empty() {
        let devfile = Devfile::from_yaml(
            r#"
            name: minimal
            tools:
              - name: app
                type: openshift
                local: app.yaml
            "#,
        )
        .unwrap();

        assert!(devfile.tools[0].selector.is_empty());
        assert!(devfile.tools[0].local_content.is_none());
    }

    #[test]
    fn test_devfile_rejects_garbage() {
        assert!(Devfile::from_yaml("just a scalar").is_err());
    }
}
