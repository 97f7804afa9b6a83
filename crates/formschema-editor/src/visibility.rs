//! Expand/collapse state of tree nodes, keyed by node path.

use ahash::AHashMap;
use formschema_tree::FieldTree;

/// Which nodes of the field tree are expanded.
///
/// Lives beside the tree rather than inside it: keys are node paths, so the
/// state survives edits that rebuild fields by value. A path seen for the
/// first time is expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeVisibility {
    expanded: AHashMap<String, bool>,
}

impl NodeVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path`, defaulting it to expanded, and return its state.
    pub fn observe(&mut self, path: &str) -> bool {
        *self.expanded.entry(path.to_string()).or_insert(true)
    }

    /// Record every node of `tree`.
    pub fn observe_tree(&mut self, tree: &FieldTree) {
        tree.walk(|path, _, _| {
            self.observe(path);
        });
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.get(path).copied().unwrap_or(true)
    }

    /// Flip the state of `path` and return the new state.
    pub fn toggle(&mut self, path: &str) -> bool {
        let state = self.expanded.entry(path.to_string()).or_insert(true);
        *state = !*state;
        *state
    }

    pub fn set_expanded(&mut self, path: &str, expanded: bool) {
        self.expanded.insert(path.to_string(), expanded);
    }

    /// Forget every path, e.g. when another schema is loaded.
    pub fn reset(&mut self) {
        self.expanded.clear();
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
