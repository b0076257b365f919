//! Tool-to-recipe conversion, the step that turns a recipe-type devfile tool
//! into a workspace environment

use tracing::{debug, info};

use crate::Result;
use crate::devfile::Tool;
use crate::error::DevfileError;
use crate::machine::resolve_machine_name;
use crate::manifest::ManifestList;
use crate::provider::ContentSource;
use crate::selector::filter_by_selector;
use crate::workspace::{Environment, Recipe, WorkspaceConfig};

/// Tool type of Kubernetes-list-backed tools
pub const KUBERNETES_TOOL_TYPE: &str = "kubernetes";
/// Tool type of OpenShift-list-backed tools
pub const OPENSHIFT_TOOL_TYPE: &str = "openshift";
/// Content-type marker of recipes stored as YAML object lists
pub const YAML_CONTENT_TYPE: &str = "application/x-yaml";
/// Command attribute naming the tool a command belongs to
pub const TOOL_NAME_COMMAND_ATTRIBUTE: &str = "toolName";
/// Command attribute naming the machine a command runs in
pub const MACHINE_NAME_ATTRIBUTE: &str = "machineName";

/// Apply one recipe-type tool to the workspace config under construction.
///
/// Resolves the tool's object-list content, narrows it by the tool's label
/// selector, registers a new environment named after the tool, and tags the
/// commands belonging to the tool with an unambiguous machine name when one
/// exists. Applying the same tool name twice overwrites the earlier
/// environment (last write wins).
pub fn apply_tool(
    config: &mut WorkspaceConfig,
    tool: &Tool,
    source: ContentSource<'_>,
) -> Result<()> {
    let content = resolve_content(tool, source)?;

    let list = ManifestList::from_yaml(&content).map_err(|e| DevfileError::ContentParse {
        location: tool.local.clone(),
        tool: tool.name.clone(),
        message: e.to_string(),
    })?;

    let filtered = if tool.selector.is_empty() {
        list.clone()
    } else {
        let kept = filter_by_selector(list.items.clone(), &tool.selector);
        debug!(
            "Selector of tool '{}' kept {} of {} objects",
            tool.name,
            kept.len(),
            list.items.len()
        );
        list.with_items(kept)
    };

    let recipe = Recipe {
        recipe_type: tool.tool_type.clone(),
        content_type: YAML_CONTENT_TYPE.to_string(),
        content: filtered
            .to_yaml()
            .map_err(|e| DevfileError::RecipeSerialize {
                tool: tool.name.clone(),
                message: e.to_string(),
            })?,
    };

    config
        .environments
        .insert(tool.name.clone(), Environment::new(recipe));
    if config.default_env.is_none() {
        config.default_env = Some(tool.name.clone());
    }

    // Bind commands of this tool to the single container, when there is one.
    // Ambiguity is a silent skip: a previously set machine name is kept.
    let machine_name = resolve_machine_name(&filtered.items);
    for command in config.commands.iter_mut().filter(|command| {
        command.attributes.get(TOOL_NAME_COMMAND_ATTRIBUTE) == Some(&tool.name)
    }) {
        if let Some(machine) = &machine_name {
            command
                .attributes
                .insert(MACHINE_NAME_ATTRIBUTE.to_string(), machine.clone());
        }
    }

    info!(
        "Provisioned environment '{}' from {} tool",
        tool.name, tool.tool_type
    );

    Ok(())
}

fn resolve_content(tool: &Tool, source: ContentSource<'_>) -> Result<String> {
    // Inline content always wins; the provider is never consulted then.
    if let Some(content) = &tool.local_content {
        return Ok(content.clone());
    }

    match source {
        ContentSource::Unavailable => Err(DevfileError::MissingContentProvider {
            tool: tool.name.clone(),
            tool_type: tool.tool_type.clone(),
        }),
        ContentSource::Provider(provider) => {
            provider
                .fetch(&tool.local)
                .map_err(|e| DevfileError::ContentFetch {
                    tool: tool.name.clone(),
                    message: e.to_string(),
                })
        }
    }
}
