//! Process-scoped memoization of resolved asset paths.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Shared insert-if-absent cache of resolved asset paths keyed by `base_path + logical_name`.
///
/// Handles are cheap clones of one shared map. The cache is append-only with first-write-wins
/// semantics: once a key resolves, later writes for the same key are ignored, which makes a
/// late write from a stale in-flight resolution indistinguishable from the current one and
/// therefore harmless. Negative results are never stored. Single-threaded by construction
/// (`Rc`), matching the cooperative UI scheduling model.
#[derive(Debug, Clone, Default)]
pub struct AssetCache {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl AssetCache {
    /// Creates an empty cache. Tests create one per case; the app creates one at mount.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the memoized path for `key`, if any resolution has succeeded.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    /// Records `path` for `key` unless a value already exists; returns the winning value.
    pub fn insert_if_absent(&self, key: &str, path: &str) -> String {
        self.inner
            .borrow_mut()
            .entry(key.to_string())
            .or_insert_with(|| path.to_string())
            .clone()
    }

    /// Number of memoized entries.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns whether nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clones_share_one_map() {
        let cache = AssetCache::new();
        let handle = cache.clone();
        cache.insert_if_absent("/assets/skills/rust", "/assets/skills/rust.png");
        assert_eq!(
            handle.get("/assets/skills/rust"),
            Some("/assets/skills/rust.png".to_string())
        );
        assert_eq!(handle.len(), 1);
    }

    #[test]
    fn first_write_wins() {
        let cache = AssetCache::new();
        let first = cache.insert_if_absent("key", "one.png");
        let second = cache.insert_if_absent("key", "two.png");
        assert_eq!(first, "one.png");
        assert_eq!(second, "one.png");
        assert_eq!(cache.get("key"), Some("one.png".to_string()));
    }
}
