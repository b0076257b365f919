//! Machine-name disambiguation for workspace commands

use crate::manifest::ManifestObject;

/// Compute the `"<objectName>/<containerName>"` identifier a command should
/// target, if the object list pins it down unambiguously.
///
/// Returns `Some` only when exactly one container exists across all objects
/// and its owning object carries a name. Zero containers, several containers,
/// or a nameless owner yield `None` silently; there is no first-container
/// fallback.
pub fn resolve_machine_name(items: &[ManifestObject]) -> Option<String> {
    let mut found: Option<String> = None;

    for item in items {
        for container in item.containers() {
            if found.is_some() {
                // more than one container total: ambiguous
                return None;
            }
            found = Some(format!("{}/{}", item.name()?, container.name));
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ManifestList;

    fn items(yaml: &str) -> Vec<ManifestObject> {
        ManifestList::from_yaml(yaml).unwrap().items
    }

    #[test]
    fn test_single_container_yields_identifier() {
        let items = items(
            r#"
kind: List
items:
  - kind: Pod
    metadata:
      name: petclinic
    spec:
      containers:
        - name: server
  - kind: Service
    metadata:
      name: petclinic-svc
"#,
        );
        assert_eq!(resolve_machine_name(&items).as_deref(), Some("petclinic/server"));
    }

    #[test]
    fn test_no_containers_yields_nothing() {
        let items = items(
            r#"
kind: List
items:
  - kind: Service
    metadata:
      name: svc
"#,
        );
        assert_eq!(resolve_machine_name(&items), None);
    }

    #[test]
    fn test_two_containers_in_one_pod_are_ambiguous() {
        let items = items(
            r#"
kind: List
items:
  - kind: Pod
    metadata:
      name: app
    spec:
      containers:
        - name: server
        - name: sidecar
"#,
        );
        assert_eq!(resolve_machine_name(&items), None);
    }

    #[test]
    fn test_containers_spread_over_two_pods_are_ambiguous() {
        let items = items(
            r#"
kind: List
items:
  - kind: Pod
    metadata:
      name: app
    spec:
      containers:
        - name: server
  - kind: Pod
    metadata:
      name: db
    spec:
      containers:
        - name: mysql
"#,
        );
        assert_eq!(resolve_machine_name(&items), None);
    }

    #[test]
    fn test_nameless_owner_yields_nothing() {
        let items = items(
            r#"
kind: List
items:
  - kind: Pod
    metadata:
      labels:
        app: web
    spec:
      containers:
        - name: server
"#,
        );
        assert_eq!(resolve_machine_name(&items), None);
    }
}
