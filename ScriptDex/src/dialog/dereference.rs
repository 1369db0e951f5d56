//! Recursive expansion of script blocks into dialogue trees
//!
//! Each line of a block is either a leaf or a set of `L_XXXXXX` references.
//! References are looked up in the [`BlockIndex`] and expanded recursively,
//! one level deeper each time, until `max_depth` cuts the chain off. The
//! ceiling is the only guard against reference cycles in the script.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::{DEFAULT_MAX_DEPTH, DerefConfig};
use crate::script::{BlockIndex, ScriptBlock};

use super::types::DialogueTree;

lazy_static! {
    static ref LABEL_REFERENCE: Regex =
        Regex::new(r"L_([0-9A-F]{6})").expect("label reference pattern is valid");
    static ref LABEL_DECLARATION: Regex =
        Regex::new(r"^L_[0-9A-F]{6}:$").expect("label declaration pattern is valid");
    static ref NPC_HEADER: Regex =
        Regex::new(r"^Npc[0-9]{4}:$").expect("NPC header pattern is valid");
}

/// Expands blocks of one [`BlockIndex`] into [`DialogueTree`]s
#[derive(Debug, Clone, Copy)]
pub struct Dereferencer<'a> {
    index: &'a BlockIndex,
    max_depth: usize,
}

impl<'a> Dereferencer<'a> {
    /// Create a dereferencer with the default depth ceiling
    #[must_use]
    pub fn new(index: &'a BlockIndex) -> Self {
        Self {
            index,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    #[must_use]
    pub fn with_config(index: &'a BlockIndex, config: &DerefConfig) -> Self {
        Self {
            index,
            max_depth: config.max_depth,
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[must_use]
    pub fn index(&self) -> &'a BlockIndex {
        self.index
    }

    /// Expand `block` at recursion level `depth` (0 for a top-level call).
    ///
    /// An absent or empty block gives an empty tree, and so does any call at
    /// `depth >= max_depth`, whatever the block holds. References to labels
    /// missing from the index expand to empty sub-trees.
    #[must_use]
    pub fn dereference(&self, block: Option<&ScriptBlock>, depth: usize) -> DialogueTree {
        let mut tree = DialogueTree::new();
        let Some(block) = block else {
            return tree;
        };
        if depth >= self.max_depth || block.is_empty() {
            return tree;
        }

        for line in block {
            let references = line_references(line);
            if references.is_empty() || is_leaf_line(line) {
                tree.insert_leaf(line);
                continue;
            }

            for label in references {
                let subtree = self.dereference(self.index.get(label), depth + 1);
                tree.insert_reference(line, label, subtree);
            }
        }

        tree
    }

    /// Expand the block stored under `label` from the top level.
    /// Returns `None` if the index has no such block.
    #[must_use]
    pub fn dereference_label(&self, label: &str) -> Option<DialogueTree> {
        let block = self.index.get(label)?;
        Some(self.dereference(Some(block), 0))
    }
}

/// Labels referenced on a line (`L_XXXXXX`), left to right
#[must_use]
pub fn line_references(line: &str) -> Vec<&str> {
    LABEL_REFERENCE
        .captures_iter(line)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// A bare label declaration (`L_XXXXXX:`) or NPC header (`NpcNNNN:`)
#[must_use]
pub fn is_leaf_line(line: &str) -> bool {
    LABEL_DECLARATION.is_match(line) || NPC_HEADER.is_match(line)
}
