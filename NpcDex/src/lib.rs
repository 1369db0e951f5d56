//! NpcDex - NPC dialogue extraction on top of ScriptDex
use std::path::Path;

// Re-export scriptdex
pub use scriptdex;

pub mod error;
pub mod record;
pub mod sprites;
pub mod annotate;

pub use error::{Error, Result};
pub use record::{NpcId, NpcRecord, NpcTable, SpriteId};
pub use sprites::{SpriteLabeler, SpriteLocation, SpriteLocator};
pub use annotate::{AnnotationStats, Annotator};

use scriptdex::config::DerefConfig;
use scriptdex::script::BlockIndex;

/// Main extraction interface: one indexed script plus its settings
#[derive(Debug, Clone)]
pub struct Extractor {
    index: BlockIndex,
    config: DerefConfig,
}

impl Extractor {
    /// Index a raw script with the default settings
    #[must_use]
    pub fn new(raw_script: &str) -> Self {
        Self {
            index: BlockIndex::from_script(raw_script),
            config: DerefConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: DerefConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the settings with those from a TOML file
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.config = DerefConfig::load(path)?;
        Ok(self)
    }

    pub fn index(&self) -> &BlockIndex {
        &self.index
    }

    pub fn config(&self) -> &DerefConfig {
        &self.config
    }

    /// An annotator bound to this script; attach sprite sources to it as needed
    pub fn annotator(&self) -> Annotator<'_> {
        Annotator::new(&self.index, &self.config)
    }

    /// Annotate every NPC in the table without sprite sources
    pub fn annotate(&self, table: &mut NpcTable) -> AnnotationStats {
        self.annotator().annotate_all(table)
    }
}
