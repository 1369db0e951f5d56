//! Attaches resolved and dereferenced dialogue to NPC records
//!
//! Both text pointers are resolved and looked up, but only the block behind
//! "Text Pointer 1" is expanded into a dialogue tree unless
//! `expand_secondary` is set in the [`DerefConfig`].

use rayon::prelude::*;
use scriptdex::config::DerefConfig;
use scriptdex::dialog::{DialogueTree, Dereferencer};
use scriptdex::script::{AddressLabel, BlockIndex, ScriptBlock, resolve_pointer};
use serde::Serialize;

use crate::record::{NpcRecord, NpcTable};
use crate::sprites::{SpriteLabeler, SpriteLocator};

/// Counts gathered after annotating a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnnotationStats {
    /// NPCs processed
    pub npcs: usize,
    /// NPCs whose pointer 1 led to a script block
    pub primary_resolved: usize,
    /// NPCs whose pointer 2 led to a script block
    pub secondary_resolved: usize,
    /// NPCs with a dialogue tree for pointer 1
    pub dereferenced: usize,
    /// NPCs given a sprite location
    pub located: usize,
    /// NPCs given a sprite label
    pub labelled: usize,
}

impl AnnotationStats {
    fn collect(table: &NpcTable) -> Self {
        let mut stats = Self::default();
        for npc in table.iter() {
            stats.npcs += 1;
            stats.primary_resolved += usize::from(npc.dialog_1.is_some());
            stats.secondary_resolved += usize::from(npc.dialog_2.is_some());
            stats.dereferenced += usize::from(npc.dialog_1_dereferenced.is_some());
            stats.located += usize::from(npc.location.is_some());
            stats.labelled += usize::from(npc.sprite_label.is_some());
        }
        stats
    }
}

/// Per-NPC orchestration over one block index
#[derive(Clone, Copy)]
pub struct Annotator<'a> {
    index: &'a BlockIndex,
    config: &'a DerefConfig,
    locator: Option<&'a dyn SpriteLocator>,
    labeler: Option<&'a dyn SpriteLabeler>,
}

impl<'a> Annotator<'a> {
    #[must_use]
    pub fn new(index: &'a BlockIndex, config: &'a DerefConfig) -> Self {
        Self {
            index,
            config,
            locator: None,
            labeler: None,
        }
    }

    #[must_use]
    pub fn with_locator(mut self, locator: &'a dyn SpriteLocator) -> Self {
        self.locator = Some(locator);
        self
    }

    #[must_use]
    pub fn with_labeler(mut self, labeler: &'a dyn SpriteLabeler) -> Self {
        self.labeler = Some(labeler);
        self
    }

    /// Fill in the derived fields of one record
    pub fn annotate(&self, npc: &mut NpcRecord) {
        let dereferencer = Dereferencer::with_config(self.index, self.config);

        npc.dialog_1_pointer = resolve_pointer(&npc.text_pointer_1);
        npc.dialog_2_pointer = resolve_pointer(&npc.text_pointer_2);
        npc.dialog_1 = self.lookup(npc.dialog_1_pointer.as_ref());
        npc.dialog_2 = self.lookup(npc.dialog_2_pointer.as_ref());

        npc.dialog_1_dereferenced = expand(&dereferencer, npc.dialog_1.as_ref());
        npc.dialog_2_dereferenced = if self.config.expand_secondary {
            expand(&dereferencer, npc.dialog_2.as_ref())
        } else {
            None
        };

        if let Some(location) = self.locator.and_then(|locator| locator.locate(npc.id)) {
            npc.location = Some(location);
        }
        if let Some(label) = self.labeler.and_then(|labeler| labeler.label(npc.sprite)) {
            npc.sprite_label = Some(label.to_string());
        }

        tracing::debug!(
            "NPC {}: pointer 1 {:?}, pointer 2 {:?}",
            npc.id,
            npc.dialog_1_pointer.as_deref(),
            npc.dialog_2_pointer.as_deref()
        );
    }

    /// Annotate every record in the table
    ///
    /// Records are independent, so with `parallel` set they are processed on
    /// the rayon pool; the result is the same either way.
    pub fn annotate_all(&self, table: &mut NpcTable) -> AnnotationStats {
        if self.config.parallel {
            table
                .records_mut()
                .par_values_mut()
                .for_each(|npc| self.annotate(npc));
        } else {
            for npc in table.iter_mut() {
                self.annotate(npc);
            }
        }

        let stats = AnnotationStats::collect(table);
        tracing::info!(
            "Annotated {} NPCs: {} with dialogue, {} secondary pointers resolved",
            stats.npcs,
            stats.dereferenced,
            stats.secondary_resolved
        );
        stats
    }

    fn lookup(&self, label: Option<&AddressLabel>) -> Option<ScriptBlock> {
        label.and_then(|label| self.index.get(label)).cloned()
    }
}

/// Expand a resolved block; absent and empty blocks give no tree
fn expand(dereferencer: &Dereferencer<'_>, block: Option<&ScriptBlock>) -> Option<DialogueTree> {
    block
        .filter(|block| !block.is_empty())
        .map(|block| dereferencer.dereference(Some(block), 0))
}
