//! Skip/select path filtering.

/// PathFilter decides whether a value at a given path is emitted.
///
/// An exact match against the skip list excludes the value and wins
/// outright. With an empty select list everything else is included;
/// otherwise a path is included only while it is still descending toward a
/// selected subtree or is already inside one.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    skip_keys: Vec<String>,
    select_keys: Vec<String>,
}

impl PathFilter {
    /// Creates a filter from skip and select path lists.
    pub fn new(skip_keys: Vec<String>, select_keys: Vec<String>) -> Self {
        PathFilter {
            skip_keys,
            select_keys,
        }
    }

    fn skipped(&self, path: &str) -> bool {
        self.skip_keys.iter().any(|s| !s.is_empty() && s == path)
    }

    fn selected(&self, path: &str) -> bool {
        if self.select_keys.is_empty() {
            return true;
        }
        self.select_keys.iter().any(|s| {
            // Ancestors of a selected path stay open so the walk can reach
            // it; descendants are inside the selected subtree.
            !s.is_empty() && (s.starts_with(path) || path.starts_with(s.as_str()))
        })
    }

    /// Returns true when the value at `path` should be emitted.
    pub fn admits(&self, path: &str) -> bool {
        !self.skipped(path) && self.selected(path)
    }
}
