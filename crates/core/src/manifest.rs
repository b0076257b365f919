//! Kubernetes object-list model and YAML codec
//!
//! A deliberately small subset of the Kubernetes API types: only the fields
//! the conversion looks at (kind, metadata, workload containers) are typed,
//! everything else is carried through untouched in flattened mappings so a
//! filtered list reserializes without losing any of the retained objects'
//! content.

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;
use std::collections::BTreeMap;

/// One container definition of a workload object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub name: String,
    #[serde(flatten)]
    pub extra: Mapping,
}

/// Workload spec; non-workload kinds simply have no `containers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WorkloadSpec {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub containers: Vec<Container>,
    #[serde(flatten)]
    pub extra: Mapping,
}

/// Object metadata: name and labels, everything else pass-through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ObjectMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(flatten)]
    pub extra: Mapping,
}

/// One entry in a parsed object list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<WorkloadSpec>,
    #[serde(flatten)]
    pub extra: Mapping,
}

impl ManifestObject {
    /// Object name from metadata, if declared
    pub fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref()
    }

    /// Containers of the object; empty for non-workload kinds
    pub fn containers(&self) -> &[Container] {
        self.spec.as_ref().map(|s| s.containers.as_slice()).unwrap_or(&[])
    }
}

/// An ordered list of manifest objects, the `kind: List` wire format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    pub kind: String,
    pub items: Vec<ManifestObject>,
    #[serde(flatten)]
    pub extra: Mapping,
}

impl ManifestList {
    /// Parse an object list from YAML text
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Serialize the list back to YAML text
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// A copy of this list holding only the given items, source order kept
    pub fn with_items(&self, items: Vec<ManifestObject>) -> Self {
        Self {
            api_version: self.api_version.clone(),
            kind: self.kind.clone(),
            items,
            extra: self.extra.clone(),
        }
    }
}
