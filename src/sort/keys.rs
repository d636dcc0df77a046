//! Priority-aware key ordering.

use crate::sort::natural_cmp;
use crate::value::{Map, Value};
use std::cmp::Ordering;

/// Priority score for keys absent from the priority list. Larger than any
/// real list index.
const NO_PRIORITY: usize = usize::MAX;

/// KeyOrder decides the emission order of mapping keys.
///
/// Keys named in the priority list sort first, in list order; all remaining
/// keys follow in natural order. The ordering is a strict weak ordering, so
/// it is safe to feed to a general-purpose sort.
#[derive(Debug, Clone)]
pub struct KeyOrder {
    prior_keys: Vec<String>,
}

impl KeyOrder {
    /// Creates a key order with the given priority keys.
    pub fn new(prior_keys: Vec<String>) -> Self {
        KeyOrder { prior_keys }
    }

    fn prior_index(&self, key: &str) -> usize {
        self.prior_keys
            .iter()
            .position(|k| k == key)
            .unwrap_or(NO_PRIORITY)
    }

    /// Compares two mapping keys.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let score_a = self.prior_index(a);
        let score_b = self.prior_index(b);
        if score_a != score_b {
            return score_a.cmp(&score_b);
        }
        natural_cmp(a, b)
    }

    /// Returns the map's entries sorted into emission order.
    pub fn sorted_entries<'a>(&self, map: &'a Map) -> Vec<(&'a String, &'a Value)> {
        let mut entries: Vec<(&String, &Value)> = map.iter().collect();
        entries.sort_by(|(a, _), (b, _)| self.compare(a, b));
        entries
    }
}

impl Default for KeyOrder {
    /// The default priority list is the single entry `name`.
    fn default() -> Self {
        KeyOrder::new(vec!["name".to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sort(order: &KeyOrder, mut keys: Vec<&str>) -> Vec<String> {
        keys.sort_by(|a, b| order.compare(a, b));
        keys.into_iter().map(String::from).collect()
    }

    #[test]
    fn test_priority_key_sorts_first() {
        let order = KeyOrder::default();
        assert_eq!(
            sort(&order, vec!["zzz", "name", "abc"]),
            vec!["name", "abc", "zzz"]
        );
    }

    #[test]
    fn test_multiple_priority_keys_keep_list_order() {
        let order = KeyOrder::new(vec!["kind".into(), "name".into()]);
        assert_eq!(
            sort(&order, vec!["name", "apiVersion", "kind"]),
            vec!["kind", "name", "apiVersion"]
        );
    }

    #[test]
    fn test_natural_order_for_ordinary_keys() {
        let order = KeyOrder::default();
        assert_eq!(
            sort(&order, vec!["item10", "item9", "item2"]),
            vec!["item2", "item9", "item10"]
        );
    }

    #[test]
    fn test_ordering_is_stable_across_permutations() {
        let order = KeyOrder::default();
        let sorted = sort(&order, vec!["b", "a10", "name", "a2", "a"]);
        for perm in [
            vec!["a", "a2", "a10", "b", "name"],
            vec!["name", "b", "a", "a10", "a2"],
        ] {
            assert_eq!(sort(&order, perm), sorted);
        }
        // Sorting an already-sorted list is a no-op.
        let again = sort(&order, sorted.iter().map(String::as_str).collect());
        assert_eq!(again, sorted);
    }

    #[test]
    fn test_sorted_entries() {
        let mut map = Map::new();
        map.set("zzz".into(), Value::Int(1));
        map.set("name".into(), Value::Int(2));
        map.set("abc".into(), Value::Int(3));

        let order = KeyOrder::default();
        let keys: Vec<&str> = order
            .sorted_entries(&map)
            .into_iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, vec!["name", "abc", "zzz"]);
    }
}
