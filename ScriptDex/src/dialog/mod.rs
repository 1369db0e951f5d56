//! Dialogue expansion for indexed scripts
//!
//! # Overview
//!
//! NPC dialogue in a disassembled script is spread across blocks that refer
//! to each other through `L_XXXXXX` labels:
//! - a line with no references (or a bare `L_XXXXXX:` / `NpcNNNN:` header) is a leaf
//! - every reference on any other line becomes a `"<line>:<label>"` entry holding that label's expansion
//! - expansion stops at a configurable depth, so cyclic references terminate
//!
//! # Usage
//!
//! ```
//! use scriptdex::dialog::Dereferencer;
//! use scriptdex::script::BlockIndex;
//!
//! let index = BlockIndex::from_script("; $000010\nL_000010:\nHello\n; $000020\nGoto L_000010\n");
//! let tree = Dereferencer::new(&index).dereference(index.get("000020"), 0);
//!
//! let child = tree.get("Goto L_000010:000010").flatten().unwrap();
//! assert_eq!(child.keys().collect::<Vec<_>>(), ["L_000010:", "Hello"]);
//! ```

mod types;
mod dereference;

pub use types::{DialogueTree, composite_key};
pub use dereference::{Dereferencer, is_leaf_line, line_references};
