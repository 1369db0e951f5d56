//! Sprite data supplied from outside the crate
//!
//! Sprite positions and sprite category names come from tables this crate
//! does not load or compute. The annotator only asks for them by id, through
//! [`SpriteLocator`] and [`SpriteLabeler`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::record::{NpcId, SpriteId};

/// Where an NPC's sprite sits on the map, as computed by the loader
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteLocation {
    pub x_pixel_abs: u32,
    pub y_pixel_abs: u32,
    pub x_tile: u32,
    pub y_tile: u32,
    pub x_sector: u32,
    pub y_sector: u32,
    pub x_sector_offset: u32,
    pub y_sector_offset: u32,
}

/// Source of sprite locations by NPC id
pub trait SpriteLocator: Sync {
    fn locate(&self, npc: NpcId) -> Option<SpriteLocation>;
}

/// Source of human-readable sprite category labels by sprite id
pub trait SpriteLabeler: Sync {
    fn label(&self, sprite: SpriteId) -> Option<&str>;
}

impl SpriteLocator for HashMap<NpcId, SpriteLocation> {
    fn locate(&self, npc: NpcId) -> Option<SpriteLocation> {
        self.get(&npc).copied()
    }
}

impl SpriteLabeler for HashMap<SpriteId, String> {
    fn label(&self, sprite: SpriteId) -> Option<&str> {
        self.get(&sprite).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_collaborators() {
        let location = SpriteLocation {
            x_sector: 2,
            x_sector_offset: 16,
            ..Default::default()
        };
        let locations: HashMap<NpcId, SpriteLocation> = HashMap::from([(5, location)]);
        let labels: HashMap<SpriteId, String> = HashMap::from([(9, "Old man".to_string())]);

        assert_eq!(locations.locate(5), Some(location));
        assert_eq!(locations.locate(6), None);
        assert_eq!(labels.label(9), Some("Old man"));
        assert_eq!(labels.label(1), None);
    }
}
