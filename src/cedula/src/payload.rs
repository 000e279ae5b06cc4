//! Cédula PDF417 payload parsing
//!
//! The decoded barcode text comes in one of two shapes:
//! 1. Delimited: `@`-separated positional fields
//! 2. Legacy: one concatenated block located by a fixed-width anchor
//!
//! Parsing is a total function. Every failure collapses into empty fields,
//! and an unclassifiable payload yields [`IdentityRecord::default`].

mod anchor;
mod delimited;
mod legacy;
mod tokens;

pub use anchor::ANCHOR_LEN;
pub use delimited::{MIN_SEGMENTS, SEPARATOR};
pub use tokens::{title_case, MIN_NUMBER_DIGITS, MIN_WORD_LEN, NOISE_WORDS};

use crate::record::IdentityRecord;
use std::borrow::Cow;

/// Which parsing strategy a payload is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    Delimited,
    Legacy,
    /// Empty, or neither separators nor an anchor
    Unrecognized,
}

impl std::fmt::Display for PayloadFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Delimited => write!(f, "delimited"),
            Self::Legacy => write!(f, "legacy"),
            Self::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Classify a payload without extracting any fields
pub fn detect_format(payload: &str) -> PayloadFormat {
    if payload.is_empty() {
        PayloadFormat::Unrecognized
    } else if delimited::is_delimited(payload) {
        PayloadFormat::Delimited
    } else if anchor::Anchor::find(payload).is_some() {
        PayloadFormat::Legacy
    } else {
        PayloadFormat::Unrecognized
    }
}

/// Parse a decoded barcode payload into an identity record.
///
/// Never fails; see the module docs for the failure semantics.
pub fn parse(payload: &str) -> IdentityRecord {
    if payload.is_empty() {
        return IdentityRecord::default();
    }
    if delimited::is_delimited(payload) {
        return delimited::parse(payload);
    }
    legacy::parse(payload).unwrap_or_default()
}

/// Parse a raw byte payload, dropping invalid UTF-8 sequences first
pub fn parse_bytes(payload: &[u8]) -> IdentityRecord {
    parse(&decode_lossy(payload))
}

/// Decode UTF-8, silently discarding invalid byte sequences.
///
/// Scanners emit Latin-1 bytes for accented letters on some cards. Dropping
/// them (instead of substituting U+FFFD) keeps the surrounding digit runs
/// contiguous.
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }

    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    Cow::Owned(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_all_empty(record: &IdentityRecord) {
        assert_eq!(record, &IdentityRecord::default());
        for (name, value) in record.fields() {
            assert_eq!(value, "", "field {} should be empty", name);
        }
    }

    #[test]
    fn test_empty_payload() {
        assert_all_empty(&parse(""));
        assert_all_empty(&parse_bytes(b""));
        assert_eq!(detect_format(""), PayloadFormat::Unrecognized);
    }

    #[test]
    fn test_delimited_passthrough() {
        let record = parse("@1234567890@JUAN@PEREZ@1990-01-15@M@BOGOTA");
        assert_eq!(record.number, "1234567890");
        assert_eq!(record.given_names, "JUAN");
        assert_eq!(record.surnames, "PEREZ");
        assert_eq!(record.date_of_birth, "1990-01-15");
        assert_eq!(record.sex, "M");
        assert_eq!(record.place_of_issuance, "BOGOTA");
    }

    #[test]
    fn test_delimited_segments_map_verbatim() {
        let segments = ["HDR", "52123456", "ana maría", "Gómez", "31/12/1999", "X", "05-001"];
        let record = parse(&segments.join("@"));
        assert_eq!(record.number, segments[1]);
        assert_eq!(record.given_names, segments[2]);
        assert_eq!(record.surnames, segments[3]);
        assert_eq!(record.date_of_birth, segments[4]);
        assert_eq!(record.sex, segments[5]);
        assert_eq!(record.place_of_issuance, segments[6]);
    }

    #[test]
    fn test_delimited_wins_over_anchor() {
        let payload = "@1234567890@JUAN@PEREZ@M19900115011123";
        assert_eq!(detect_format(payload), PayloadFormat::Delimited);
        assert_eq!(parse(payload).date_of_birth, "M19900115011123");
    }

    #[test]
    fn test_too_few_segments_falls_back_to_legacy() {
        let payload = "1234567890@PEREZ@M19900115011123";
        assert_eq!(detect_format(payload), PayloadFormat::Legacy);
        let record = parse(payload);
        assert_eq!(record.number, "1234567890");
        assert_eq!(record.surnames, "Perez");
        assert_eq!(record.date_of_birth, "1990-01-15");
    }

    #[test]
    fn test_legacy_scenario() {
        let record = parse("PEREZ GARCIA JUAN CARLOS M199001150111231112223334");
        assert_eq!(record.surnames, "Perez Garcia");
        assert_eq!(record.given_names, "Juan Carlos");
        assert_eq!(record.sex, "M");
        assert_eq!(record.date_of_birth, "1990-01-15");
        assert_eq!(record.number, "");
    }

    #[test]
    fn test_anchor_tie_break() {
        let record = parse("1112223334 9988776655M19900115011123");
        assert_eq!(record.number, "9988776655");
    }

    #[test]
    fn test_noise_words_never_become_names() {
        let record = parse("DSK PUB PUBDSK AB PEREZ GARCIA JUAN CARLOS 1234567890M19900115011123");
        assert_eq!(record.surnames, "Perez Garcia");
        assert_eq!(record.given_names, "Juan Carlos");
        for noise in ["Dsk", "Pub", "Pubdsk", "Ab"] {
            assert!(!record.surnames.split(' ').any(|w| w == noise));
            assert!(!record.given_names.split(' ').any(|w| w == noise));
        }
    }

    #[test]
    fn test_date_out_of_range() {
        assert_eq!(parse("1234567890M21500115011123").date_of_birth, "");
        assert_eq!(parse("1234567890M19901315011123").date_of_birth, "");
    }

    #[test]
    fn test_no_anchor_is_unparsed() {
        let payload = "PEREZ GARCIA 1234567890 M1990 0115";
        assert_eq!(detect_format(payload), PayloadFormat::Unrecognized);
        assert_all_empty(&parse(payload));
    }

    #[test]
    fn test_garbage_never_panics() {
        let inputs: &[&[u8]] = &[
            b"\xff\xfe\xfd",
            b"@",
            b"@@@@",
            b"M",
            b"M1990011501112",
            b"\x00\x00\x00",
            "ÑÑÑM19900115011123ÑÑÑ".as_bytes(),
        ];
        for input in inputs {
            let record = parse_bytes(input);
            assert!(record.sex.is_empty() || record.sex == "M" || record.sex == "F");
        }
    }

    #[test]
    fn test_parse_bytes_drops_invalid_sequences() {
        // 0xD1 is a Latin-1 Ñ; dropping it must not split the digit run
        let record = parse_bytes(b"12345\xd167890 PEREZ M19900115011123");
        assert_eq!(record.number, "1234567890");
        assert_eq!(record.surnames, "Perez");
    }

    #[test]
    fn test_decode_lossy_borrows_valid_utf8() {
        assert!(matches!(decode_lossy("MUÑOZ".as_bytes()), Cow::Borrowed("MUÑOZ")));
        assert_eq!(decode_lossy(b"A\xffB"), "AB");
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format("a@b@c@d"), PayloadFormat::Delimited);
        assert_eq!(detect_format("xxF20000101050010"), PayloadFormat::Legacy);
        assert_eq!(detect_format("hello"), PayloadFormat::Unrecognized);
        assert_eq!(PayloadFormat::Legacy.to_string(), "legacy");
    }
}
