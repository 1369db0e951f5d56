//! NPC record types
//!
//! A record starts with the fields supplied by the NPC config table (sprite
//! id and the two raw text pointers) and gains derived fields once it has
//! been through the [`Annotator`](crate::annotate::Annotator).

use indexmap::IndexMap;
use scriptdex::dialog::DialogueTree;
use scriptdex::script::{AddressLabel, ScriptBlock};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::sprites::SpriteLocation;

/// NPC identifier as used by the config table
pub type NpcId = u32;

/// Numeric sprite identifier
pub type SpriteId = u32;

/// One NPC and everything derived for it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NpcRecord {
    pub id: NpcId,
    #[serde(rename = "Sprite")]
    pub sprite: SpriteId,
    #[serde(rename = "Text Pointer 1")]
    pub text_pointer_1: String,
    #[serde(rename = "Text Pointer 2")]
    pub text_pointer_2: String,

    // Derived by the annotator
    /// Label resolved from "Text Pointer 1"
    pub dialog_1_pointer: Option<AddressLabel>,
    /// Label resolved from "Text Pointer 2"
    pub dialog_2_pointer: Option<AddressLabel>,
    /// Script block behind pointer 1
    pub dialog_1: Option<ScriptBlock>,
    /// Script block behind pointer 2
    pub dialog_2: Option<ScriptBlock>,
    /// Expanded dialogue for pointer 1
    pub dialog_1_dereferenced: Option<DialogueTree>,
    /// Expanded dialogue for pointer 2 (only with `expand_secondary`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_2_dereferenced: Option<DialogueTree>,

    // Supplied by external collaborators
    #[serde(flatten)]
    pub location: Option<SpriteLocation>,
    pub sprite_label: Option<String>,
}

/// The fields a loader must provide for every NPC. Other keys are ignored.
#[derive(Debug, Deserialize)]
struct RawNpcFields {
    #[serde(rename = "Sprite")]
    sprite: SpriteId,
    #[serde(rename = "Text Pointer 1")]
    text_pointer_1: String,
    #[serde(rename = "Text Pointer 2")]
    text_pointer_2: String,
}

impl NpcRecord {
    #[must_use]
    pub fn new(
        id: NpcId,
        sprite: SpriteId,
        text_pointer_1: impl Into<String>,
        text_pointer_2: impl Into<String>,
    ) -> Self {
        Self {
            id,
            sprite,
            text_pointer_1: text_pointer_1.into(),
            text_pointer_2: text_pointer_2.into(),
            ..Default::default()
        }
    }

    /// Build a record from a loosely-typed field map
    ///
    /// # Errors
    /// Returns [`Error::InvalidRecord`] if the value is not an object or a
    /// required field (`Sprite`, `Text Pointer 1`, `Text Pointer 2`) is
    /// missing or has the wrong type.
    pub fn from_value(id: NpcId, value: Value) -> Result<Self> {
        let raw: RawNpcFields = serde_json::from_value(value)
            .map_err(|source| Error::InvalidRecord { npc_id: id, source })?;
        Ok(Self::new(id, raw.sprite, raw.text_pointer_1, raw.text_pointer_2))
    }

    /// Whether pointer 1 led to a dialogue tree
    #[must_use]
    pub fn has_dialogue(&self) -> bool {
        self.dialog_1_dereferenced.is_some()
    }
}

/// NPC records keyed by id, in load order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NpcTable {
    records: IndexMap<NpcId, NpcRecord>,
}

impl NpcTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a loosely-typed `{ id: { field: value } }` map
    ///
    /// # Errors
    /// Fails on the first key that is not an unsigned integer or record with a bad shape.
    pub fn from_value(value: Value) -> Result<Self> {
        let entries = match value {
            Value::Object(entries) => entries,
            other => return Err(Error::InvalidTable(json_kind(&other).to_string())),
        };

        let mut table = Self::new();
        for (key, fields) in entries {
            let id: NpcId = key.trim().parse().map_err(|_| Error::InvalidNpcId(key.clone()))?;
            table.insert(NpcRecord::from_value(id, fields)?);
        }
        tracing::debug!("Loaded {} NPC records", table.len());
        Ok(table)
    }

    /// Insert a record under its own id, replacing any previous record
    pub fn insert(&mut self, record: NpcRecord) -> Option<NpcRecord> {
        self.records.insert(record.id, record)
    }

    #[must_use]
    pub fn get(&self, id: NpcId) -> Option<&NpcRecord> {
        self.records.get(&id)
    }

    pub fn get_mut(&mut self, id: NpcId) -> Option<&mut NpcRecord> {
        self.records.get_mut(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NpcRecord> {
        self.records.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut NpcRecord> {
        self.records.values_mut()
    }

    pub(crate) fn records_mut(&mut self) -> &mut IndexMap<NpcId, NpcRecord> {
        &mut self.records
    }
}

impl FromIterator<NpcRecord> for NpcTable {
    fn from_iter<I: IntoIterator<Item = NpcRecord>>(iter: I) -> Self {
        let mut table = Self::new();
        for record in iter {
            table.insert(record);
        }
        table
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
