//! Dialogue tree type
//!
//! A tree level maps keys to optional sub-trees, in insertion order:
//! - leaf lines map to `None`
//! - `"<line>:<label>"` composite keys map to `Some(subtree)` for each label the line references
//!
//! An empty sub-tree means the referenced label had no block, or that the
//! depth ceiling was reached.

use indexmap::IndexMap;
use serde::Serialize;

/// Recursive, insertion-ordered dialogue expansion of a script block
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct DialogueTree {
    entries: IndexMap<String, Option<DialogueTree>>,
}

impl DialogueTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a leaf line (absent value)
    pub fn insert_leaf(&mut self, line: &str) {
        self.entries.insert(line.to_string(), None);
    }

    /// Insert the expansion of one label referenced by `line`
    ///
    /// Re-inserting an existing key replaces its value but keeps its position.
    pub fn insert_reference(&mut self, line: &str, label: &str, subtree: DialogueTree) {
        self.entries.insert(composite_key(line, label), Some(subtree));
    }

    /// Look up an entry. `Some(None)` is a leaf, `Some(Some(_))` a reference.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Option<&DialogueTree>> {
        self.entries.get(key).map(Option::as_ref)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&DialogueTree>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Number of entries at this level
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of nested levels; an empty tree has depth 0
    #[must_use]
    pub fn depth(&self) -> usize {
        if self.entries.is_empty() {
            return 0;
        }
        1 + self
            .entries
            .values()
            .flatten()
            .map(DialogueTree::depth)
            .max()
            .unwrap_or(0)
    }

    /// Total entries across every level
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.entries.len()
            + self
                .entries
                .values()
                .flatten()
                .map(DialogueTree::node_count)
                .sum::<usize>()
    }
}

/// Key for one reference on a line: `"<line>:<label>"`
#[must_use]
pub fn composite_key(line: &str, label: &str) -> String {
    format!("{line}:{label}")
}

// Order-sensitive: two trees are equal only if their keys appear in the same order.
impl PartialEq for DialogueTree {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for DialogueTree {}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_tree(lines: &[&str]) -> DialogueTree {
        let mut tree = DialogueTree::new();
        for line in lines {
            tree.insert_leaf(line);
        }
        tree
    }

    #[test]
    fn test_composite_key() {
        assert_eq!(composite_key("Goto L_000010", "000010"), "Goto L_000010:000010");
    }

    #[test]
    fn test_leaf_and_reference_lookup() {
        let mut tree = leaf_tree(&["Hello"]);
        tree.insert_reference("Goto L_000010", "000010", DialogueTree::new());

        assert_eq!(tree.get("Hello"), Some(None));
        assert_eq!(tree.get("Goto L_000010:000010"), Some(Some(&DialogueTree::new())));
        assert_eq!(tree.get("missing"), None);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        assert_eq!(leaf_tree(&["a", "b"]), leaf_tree(&["a", "b"]));
        assert_ne!(leaf_tree(&["a", "b"]), leaf_tree(&["b", "a"]));
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut tree = leaf_tree(&["a", "b"]);
        tree.insert_leaf("a");
        assert_eq!(tree.keys().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn test_depth_and_node_count() {
        assert_eq!(DialogueTree::new().depth(), 0);

        let inner = leaf_tree(&["x", "y"]);
        let mut outer = leaf_tree(&["a"]);
        outer.insert_reference("go L_000001", "000001", inner);
        outer.insert_reference("go L_000002", "000002", DialogueTree::new());

        assert_eq!(outer.depth(), 2);
        assert_eq!(outer.node_count(), 5);
    }

    #[test]
    fn test_serializes_leaves_as_null() {
        let mut tree = leaf_tree(&["Hello"]);
        tree.insert_reference("Goto L_000010", "000010", leaf_tree(&["L_000010:"]));
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(
            json,
            r#"{"Hello":null,"Goto L_000010:000010":{"L_000010:":null}}"#
        );
    }
}
