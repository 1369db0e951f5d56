//! Resolves raw NPC text-pointer fields to address labels

use lazy_static::lazy_static;
use regex::Regex;

use super::types::{AddressLabel, BlockIndex, ScriptBlock};

lazy_static! {
    static ref TEXT_POINTER: Regex =
        Regex::new(r"0x([0-9a-f]{6})").expect("text pointer pattern is valid");
}

/// Find the first `0x` + 6 lowercase hex digits in a pointer field and
/// return the digits as an uppercase label.
///
/// The match is not anchored, so `"0xab12cdef"` resolves to `AB12CD`.
/// Uppercase digits after `0x` do not match.
#[must_use]
pub fn resolve_pointer(raw: &str) -> Option<AddressLabel> {
    TEXT_POINTER
        .captures(raw)
        .map(|caps| AddressLabel::from_matched(&caps[1].to_ascii_uppercase()))
}

/// Resolve a pointer field straight to its script block
#[must_use]
pub fn resolve_block<'a>(raw: &str, index: &'a BlockIndex) -> Option<&'a ScriptBlock> {
    resolve_pointer(raw).and_then(|label| index.get(&label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_pointer() {
        let label = resolve_pointer("some text 0xab12cd trailing").unwrap();
        assert_eq!(label.as_str(), "AB12CD");
    }

    #[test]
    fn test_no_pointer() {
        assert!(resolve_pointer("").is_none());
        assert!(resolve_pointer("none").is_none());
        assert!(resolve_pointer("0xAB12CD").is_none());
        assert!(resolve_pointer("0xab12c").is_none());
        assert!(resolve_pointer("ab12cd").is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let label = resolve_pointer("0x000010 / 0x000020").unwrap();
        assert_eq!(label.as_str(), "000010");
        assert_eq!(resolve_pointer("0xab12cdef").unwrap().as_str(), "AB12CD");
    }

    #[test]
    fn test_resolve_block() {
        let index = BlockIndex::from_script("; $00BEEF\nHi there\n");
        assert_eq!(
            resolve_block("ptr 0x00beef", &index).map(ScriptBlock::len),
            Some(1)
        );
        assert!(resolve_block("ptr 0x00dead", &index).is_none());
        assert!(resolve_block("no pointer", &index).is_none());
    }
}
