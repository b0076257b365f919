//! Whole-devfile conversion into a workspace config

use tracing::debug;

use crate::Result;
use crate::applier::{
    KUBERNETES_TOOL_TYPE, OPENSHIFT_TOOL_TYPE, TOOL_NAME_COMMAND_ATTRIBUTE, apply_tool,
};
use crate::devfile::Devfile;
use crate::provider::ContentSource;
use crate::workspace::{Command, WorkspaceConfig};

/// Convert a devfile into a workspace config.
///
/// Commands are converted first so tool application can annotate them, then
/// every recipe-type tool is applied in declaration order. The first failing
/// tool aborts the conversion with its typed error.
pub fn convert_devfile(devfile: &Devfile, source: ContentSource<'_>) -> Result<WorkspaceConfig> {
    let mut config = WorkspaceConfig::new(devfile.name.clone());

    for devfile_command in &devfile.commands {
        for action in &devfile_command.actions {
            let mut command = Command {
                name: devfile_command.name.clone(),
                command_type: action.action_type.clone(),
                command_line: action.command.clone(),
                attributes: Default::default(),
            };
            if !action.tool.is_empty() {
                command
                    .attributes
                    .insert(TOOL_NAME_COMMAND_ATTRIBUTE.to_string(), action.tool.clone());
            }
            config.commands.push(command);
        }
    }

    for tool in &devfile.tools {
        match tool.tool_type.as_str() {
            KUBERNETES_TOOL_TYPE | OPENSHIFT_TOOL_TYPE => {
                apply_tool(&mut config, tool, source)?;
            }
            other => {
                // non-recipe tool types are outside this converter's concern
                debug!("Skipping tool '{}' of unsupported type '{}'", tool.name, other);
            }
        }
    }

    Ok(config)
}
