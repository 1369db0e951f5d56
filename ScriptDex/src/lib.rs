//! # ScriptDex
//!
//! A pure-Rust library for pulling NPC dialogue out of disassembled retro game scripts.
//!
//! ## What it does
//!
//! - **Script indexing** - Split a raw script into blocks keyed by `; $XXXXXX` address markers
//! - **Pointer resolution** - Turn raw `0x######` text-pointer fields into address labels
//! - **Dialogue dereferencing** - Expand `L_XXXXXX` references into ordered, depth-bounded trees
//!
//! ## Quick Start
//!
//! ```
//! use scriptdex::prelude::*;
//!
//! let script = "; $000010\nL_000010:\nHello\n; $000020\nGoto L_000010\n";
//! let index = index_script(script);
//!
//! let label = resolve_pointer("text ptr 0x000020").unwrap();
//! let tree = Dereferencer::new(&index).dereference(index.get(&label), 0);
//! assert_eq!(tree.depth(), 2);
//! ```
//!
//! Missing labels and runaway references never fail; they expand to empty
//! trees. See [`config::DerefConfig`] for the depth ceiling.

pub mod error;
pub mod config;
pub mod script;
pub mod dialog;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::config::{DerefConfig, DEFAULT_MAX_DEPTH};
    pub use crate::script::{
        AddressLabel, ScriptBlock, BlockIndex,
        index_script, resolve_pointer, resolve_block,
    };
    pub use crate::dialog::{DialogueTree, Dereferencer};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
