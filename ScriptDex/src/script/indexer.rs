//! Splits a raw script into address-labelled blocks
//!
//! Block boundaries are marker lines of the form `; $XXXXXX`. A block runs
//! from the line after its marker up to the next marker, or to the end of
//! the text for the final block. Anything before the first marker is ignored.

use lazy_static::lazy_static;
use regex::Regex;

use super::types::{AddressLabel, BlockIndex, ScriptBlock};

lazy_static! {
    static ref BLOCK_MARKER: Regex =
        Regex::new(r"^; \$([0-9A-F]{6})$").expect("block marker pattern is valid");
}

/// Build the block index for a raw script in a single pass.
///
/// A script without marker lines yields an empty index. When a label is
/// declared more than once the last body wins.
#[must_use]
pub fn index_script(raw: &str) -> BlockIndex {
    let mut index = BlockIndex::new();
    let mut current: Option<(AddressLabel, Vec<&str>)> = None;

    for line in raw.lines() {
        if let Some(label) = marker_label(line) {
            if let Some((done, body)) = current.take() {
                store_block(&mut index, done, body);
            }
            current = Some((label, Vec::new()));
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
    }

    if let Some((done, body)) = current {
        store_block(&mut index, done, body);
    }

    tracing::info!(
        "Indexed {} script blocks ({} lines)",
        index.len(),
        index.total_lines()
    );
    index
}

/// Extract the label from a block marker line, if `line` is one
#[must_use]
pub fn marker_label(line: &str) -> Option<AddressLabel> {
    BLOCK_MARKER
        .captures(line.trim_end())
        .map(|caps| AddressLabel::from_matched(&caps[1]))
}

fn store_block(index: &mut BlockIndex, label: AddressLabel, body: Vec<&str>) {
    if index.contains(&label) {
        tracing::debug!("Duplicate block marker ${label}; keeping the later body");
    }
    index.insert(label, ScriptBlock::from_lines(body));
}
