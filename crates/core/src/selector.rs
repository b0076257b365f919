//! Label-selector filtering of manifest object lists

use std::collections::BTreeMap;

use crate::manifest::ManifestObject;

/// Keep only the objects whose labels satisfy every selector entry.
///
/// Conjunctive, order-preserving, and infallible: an object with extra
/// labels still matches, an object missing any selector key is dropped,
/// and an empty result is a normal outcome.
pub fn filter_by_selector(
    items: Vec<ManifestObject>,
    selector: &BTreeMap<String, String>,
) -> Vec<ManifestObject> {
    items
        .into_iter()
        .filter(|item| matches_selector(&item.metadata.labels, selector))
        .collect()
}

fn matches_selector(labels: &BTreeMap<String, String>, selector: &BTreeMap<String, String>) -> bool {
    selector
        .iter()
        .all(|(key, value)| labels.get(key) == Some(value))
}
