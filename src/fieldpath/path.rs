//! Path construction helpers.

/// Returns the path of a mapping value's child.
///
/// The root mapping's children are bare keys; nested children are joined
/// with `.`, e.g. `spec.replicas`.
pub fn map_child(path: &str, key: &str) -> String {
    if path.is_empty() {
        return key.to_string();
    }
    format!("{}.{}", path, key)
}

/// Returns the path of a sequence element addressed by index, e.g.
/// `spec.ports[0]`.
pub fn list_child(path: &str, index: usize) -> String {
    format!("{}[{}]", path, index)
}

/// Returns the path of a sequence element addressed by its `name` field,
/// e.g. `spec.containers[name=web]`.
pub fn named_child(path: &str, key: &str, value: &str) -> String {
    format!("{}[{}={}]", path, key, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_child() {
        assert_eq!(map_child("", "spec"), "spec");
        assert_eq!(map_child("spec", "replicas"), "spec.replicas");
    }

    #[test]
    fn test_list_child() {
        assert_eq!(list_child("", 0), "[0]");
        assert_eq!(list_child("spec.ports", 2), "spec.ports[2]");
    }

    #[test]
    fn test_named_child() {
        assert_eq!(named_child("", "name", "web"), "[name=web]");
        assert_eq!(
            named_child("spec.containers", "name", "web"),
            "spec.containers[name=web]"
        );
    }
}
