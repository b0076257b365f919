//! devws-core: Core logic for devws
//!
//! This crate converts devfile tool descriptors into runnable workspace
//! environment recipes backed by Kubernetes/OpenShift object lists.

mod applier;
mod convert;
mod devfile;
mod error;
mod machine;
mod manifest;
mod provider;
mod selector;
mod workspace;

pub use applier::{
    KUBERNETES_TOOL_TYPE, MACHINE_NAME_ATTRIBUTE, OPENSHIFT_TOOL_TYPE,
    TOOL_NAME_COMMAND_ATTRIBUTE, YAML_CONTENT_TYPE, apply_tool,
};
pub use convert::convert_devfile;
pub use devfile::{Devfile, DevfileAction, DevfileCommand, Tool};
pub use error::DevfileError;
pub use machine::resolve_machine_name;
pub use manifest::{Container, ManifestList, ManifestObject, ObjectMeta, WorkloadSpec};
pub use provider::{ContentProvider, ContentSource, FetchError, FileContentProvider, UrlContentProvider};
pub use selector::filter_by_selector;
pub use workspace::{Command, Environment, Recipe, WorkspaceConfig};

/// Result type for core operations
pub type Result<T> = std::result::Result<T, DevfileError>;
