//! Disassembled script handling
//!
//! The raw script is a single text blob where each addressable block is
//! introduced by a marker line:
//!
//! ```text
//! ; $000010
//! L_000010:
//! Hello
//! ; $000020
//! Goto L_000010
//! ```
//!
//! [`index_script`] turns it into a [`BlockIndex`]; [`resolve_pointer`] turns
//! an NPC's raw text-pointer field into an [`AddressLabel`] for lookups.

mod types;
mod indexer;
mod pointer;

pub use types::*;
pub use indexer::{index_script, marker_label};
pub use pointer::{resolve_block, resolve_pointer};
