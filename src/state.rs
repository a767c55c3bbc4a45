use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use crate::path::Path;

/// The set of composite-node paths currently shown expanded.
///
/// Every composite starts collapsed unless its path is in the initial set.
/// Updates go through [`ExpansionState::toggle`], which returns a fresh
/// state rather than mutating in place, so the host always swaps in a whole
/// replacement per event. Entries are never pruned when the document root
/// is replaced; a stale path silently applies to whatever node now occupies
/// that address. Resetting on root replacement is a host decision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<Path>,
}

impl ExpansionState {
    /// All collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expanded(paths: impl IntoIterator<Item = Path>) -> Self {
        Self {
            expanded: paths.into_iter().collect(),
        }
    }

    pub fn is_expanded(&self, path: &Path) -> bool {
        self.expanded.contains(path)
    }

    /// Flip the membership of `path` and return the resulting state.
    ///
    /// Toggling twice restores the original state. Flipping a leaf path is
    /// harmless: rendering never consults expansion for leaves, so only
    /// wire the toggle affordance to composite nodes.
    pub fn toggle(&self, path: &Path) -> ExpansionState {
        let mut next = self.clone();
        if !next.expanded.remove(path) {
            next.expanded.insert(path.clone());
        }
        next
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

/// Host-side holder of the current document root.
///
/// The viewer treats the root as immutable; every edit replaces it
/// wholesale via [`crate::editor::commit`]. The lock lets a host with
/// background work share the root; the core itself never blocks on it
/// beyond the swap.
pub struct DocumentState {
    doc: RwLock<Option<Arc<Value>>>,
}

impl Default for DocumentState {
    fn default() -> Self {
        Self {
            doc: RwLock::new(None),
        }
    }
}

impl DocumentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current root, or `None` when no document is loaded.
    pub fn root(&self) -> Option<Arc<Value>> {
        self.doc.read().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.doc.read().is_some()
    }

    /// Replace the root wholesale, returning the shared handle.
    pub fn replace(&self, root: Value) -> Arc<Value> {
        let arc = Arc::new(root);
        *self.doc.write() = Some(arc.clone());
        arc
    }

    pub fn clear(&self) {
        *self.doc.write() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn toggle_is_an_involution() {
        let path = Path::root().key("folder1");
        let initial = ExpansionState::with_expanded([Path::root()]);
        let once = initial.toggle(&path);
        let twice = once.toggle(&path);
        assert!(once.is_expanded(&path));
        assert_eq!(twice, initial);
    }

    #[test]
    fn toggling_a_parent_does_not_cascade() {
        let parent = Path::root().key("folder1");
        let child = parent.key("subfolder1");
        let state = ExpansionState::with_expanded([parent.clone(), child.clone()]);

        // collapse the parent, child membership survives
        let collapsed = state.toggle(&parent);
        assert!(!collapsed.is_expanded(&parent));
        assert!(collapsed.is_expanded(&child));

        // re-expanding the parent shows the child expanded again
        let reopened = collapsed.toggle(&parent);
        assert!(reopened.is_expanded(&child));
    }

    #[test]
    fn toggle_leaves_the_original_untouched() {
        let path = Path::root().key("a");
        let state = ExpansionState::new();
        let _next = state.toggle(&path);
        assert!(!state.is_expanded(&path));
    }

    #[test]
    fn stale_entries_survive_root_replacement() {
        let doc = DocumentState::new();
        doc.replace(json!({"a": {"b": 1}}));
        let expansion = ExpansionState::with_expanded([Path::root().key("a")]);

        doc.replace(json!({"c": 2}));
        // the old path is still remembered; it just addresses nothing now
        assert!(expansion.is_expanded(&Path::root().key("a")));
        assert_eq!(expansion.len(), 1);
    }

    #[test]
    fn replace_swaps_the_root_wholesale() {
        let doc = DocumentState::new();
        assert!(!doc.is_loaded());
        doc.replace(json!([1, 2]));
        assert_eq!(doc.root().as_deref(), Some(&json!([1, 2])));
        doc.clear();
        assert!(doc.root().is_none());
    }
}
