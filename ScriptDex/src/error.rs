//! Error types for `ScriptDex`
//!
//! Indexing and dereferencing never fail: missing labels and runaway
//! references degrade to absent values or empty trees. The variants here
//! cover the edges of the crate (configuration loading and label parsing).

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `ScriptDex` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Label Errors ====================
    /// A string was not a 6-digit uppercase hex address label.
    #[error("invalid address label '{0}': expected 6 uppercase hex digits")]
    InvalidLabel(String),

    // ==================== Configuration Errors ====================
    /// The configuration file could not be parsed.
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        /// Where the configuration was read from (`<inline>` for strings).
        path: PathBuf,
        /// The underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// The configuration could not be serialized back to TOML.
    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// A specialized Result type for `ScriptDex` operations.
pub type Result<T> = std::result::Result<T, Error>;
