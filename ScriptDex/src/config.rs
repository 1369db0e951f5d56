//! Dereferencing configuration (`scriptdex.toml`)
//!
//! ```toml
//! max_depth = 10
//! expand_secondary = false
//! parallel = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default recursion ceiling for dialogue dereferencing.
pub const DEFAULT_MAX_DEPTH: usize = 10;

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

/// Settings shared by the dereferencer and the NPC annotator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DerefConfig {
    /// Recursion ceiling; a call at `depth >= max_depth` yields an empty tree
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Also expand the block behind "Text Pointer 2" (off by default)
    #[serde(default)]
    pub expand_secondary: bool,
    /// Annotate NPC records on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,
}

impl Default for DerefConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            expand_secondary: false,
            parallel: false,
        }
    }
}

impl DerefConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_expand_secondary(mut self, expand: bool) -> Self {
        self.expand_secondary = expand;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Parse a config from TOML text. Missing keys fall back to defaults.
    ///
    /// # Errors
    /// Returns [`Error::ConfigParse`] on invalid TOML or unknown keys.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|source| Error::ConfigParse {
            path: PathBuf::from("<inline>"),
            source,
        })
    }

    /// Load a config file from disk
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = toml::from_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded dereference config from {}", path.display());
        Ok(config)
    }

    /// Render the config as TOML
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DerefConfig::default();
        assert_eq!(config.max_depth, 10);
        assert!(!config.expand_secondary);
        assert!(!config.parallel);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = DerefConfig::from_toml_str("max_depth = 3").unwrap();
        assert_eq!(config, DerefConfig::new().with_max_depth(3));

        let empty = DerefConfig::from_toml_str("").unwrap();
        assert_eq!(empty, DerefConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = DerefConfig::from_toml_str("max_dept = 3").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains("<inline>"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_depth = 4\nexpand_secondary = true\nparallel = true").unwrap();

        let config = DerefConfig::load(file.path()).unwrap();
        assert_eq!(config.max_depth, 4);
        assert!(config.expand_secondary);
        assert!(config.parallel);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DerefConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = DerefConfig::new().with_max_depth(7).with_parallel(true);
        let text = config.to_toml_string().unwrap();
        assert_eq!(DerefConfig::from_toml_str(&text).unwrap(), config);
    }
}
