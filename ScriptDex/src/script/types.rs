//! Script data types
//!
//! These types represent a disassembled script split into addressable blocks.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A 6-digit uppercase hex address, e.g. `"00A3F0"`
///
/// Every value satisfies the format; construct one with [`AddressLabel::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AddressLabel(String);

impl AddressLabel {
    /// Number of hex digits in a label
    pub const LEN: usize = 6;

    /// Parse and validate a label
    ///
    /// # Errors
    /// Returns [`Error::InvalidLabel`] unless `s` is exactly 6 characters of `0-9A-F`.
    pub fn parse(s: &str) -> Result<Self> {
        if is_address_label(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(Error::InvalidLabel(s.to_string()))
        }
    }

    /// Wrap a string already matched by one of the crate's label patterns
    pub(crate) fn from_matched(s: &str) -> Self {
        debug_assert!(is_address_label(s), "pattern produced invalid label {s:?}");
        Self(s.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Check whether `s` has the address label format
#[must_use]
pub fn is_address_label(s: &str) -> bool {
    s.len() == AddressLabel::LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F'))
}

impl Deref for AddressLabel {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AddressLabel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AddressLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AddressLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AddressLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AddressLabel {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        if is_address_label(&s) {
            Ok(Self(s))
        } else {
            Err(Error::InvalidLabel(s))
        }
    }
}

impl From<AddressLabel> for String {
    fn from(label: AddressLabel) -> Self {
        label.0
    }
}

/// Ordered, non-blank lines of one script block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScriptBlock {
    lines: Vec<String>,
}

impl ScriptBlock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a block from raw lines, dropping lines that are blank after trimming.
    /// Kept lines are stored unmodified.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines
                .into_iter()
                .map(Into::into)
                .filter(|line| !line.trim().is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.lines.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<'a> IntoIterator for &'a ScriptBlock {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Address label → script block table for one raw script
///
/// Labels iterate in the order they first appeared in the script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BlockIndex {
    blocks: IndexMap<AddressLabel, ScriptBlock>,
}

impl BlockIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a raw script. See [`crate::script::index_script`].
    #[must_use]
    pub fn from_script(raw: &str) -> Self {
        super::indexer::index_script(raw)
    }

    /// Insert a block, returning the block it replaced (last one wins).
    pub fn insert(&mut self, label: AddressLabel, block: ScriptBlock) -> Option<ScriptBlock> {
        self.blocks.insert(label, block)
    }

    /// Look up the block for a label. `None` means no block exists.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&ScriptBlock> {
        self.blocks.get(label)
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.blocks.contains_key(label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &AddressLabel> {
        self.blocks.keys()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, AddressLabel, ScriptBlock> {
        self.blocks.iter()
    }

    /// Total number of lines across all blocks
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.blocks.values().map(ScriptBlock::len).sum()
    }
}

impl<'a> IntoIterator for &'a BlockIndex {
    type Item = (&'a AddressLabel, &'a ScriptBlock);
    type IntoIter = indexmap::map::Iter<'a, AddressLabel, ScriptBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parse() {
        assert_eq!(AddressLabel::parse("00A3F0").unwrap().as_str(), "00A3F0");
        assert!(AddressLabel::parse("00a3f0").is_err());
        assert!(AddressLabel::parse("00A3F").is_err());
        assert!(AddressLabel::parse("00A3F0F").is_err());
        assert!(AddressLabel::parse("00G3F0").is_err());
        assert!("ABCDEF".parse::<AddressLabel>().is_ok());
    }

    #[test]
    fn test_label_deserialize_validates() {
        let label: AddressLabel = serde_json::from_str("\"0000FF\"").unwrap();
        assert_eq!(label.to_string(), "0000FF");
        assert!(serde_json::from_str::<AddressLabel>("\"0000ff\"").is_err());
    }

    #[test]
    fn test_block_drops_blank_lines() {
        let block = ScriptBlock::from_lines(["  first", "", "   ", "\t", "second  "]);
        assert_eq!(block.lines(), ["  first", "second  "]);
    }

    #[test]
    fn test_index_lookup_by_str_and_label() {
        let mut index = BlockIndex::new();
        let label = AddressLabel::parse("000010").unwrap();
        index.insert(label.clone(), ScriptBlock::from_lines(["Hello"]));

        assert!(index.contains("000010"));
        assert_eq!(index.get(&label).map(ScriptBlock::len), Some(1));
        assert!(index.get("000020").is_none());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut index = BlockIndex::new();
        index.insert(AddressLabel::parse("000001").unwrap(), ScriptBlock::from_lines(["a"]));
        index.insert(AddressLabel::parse("000002").unwrap(), ScriptBlock::from_lines(["b"]));
        let previous = index.insert(
            AddressLabel::parse("000001").unwrap(),
            ScriptBlock::from_lines(["c", "d"]),
        );

        assert_eq!(previous, Some(ScriptBlock::from_lines(["a"])));
        let labels: Vec<&str> = index.labels().map(AddressLabel::as_str).collect();
        assert_eq!(labels, ["000001", "000002"]);
        assert_eq!(index.total_lines(), 3);
    }
}
