//! Delimited format: positional fields separated by `@`.
//!
//! Segment 0 is a header and is ignored. Values are passed through trimmed
//! but otherwise untouched: no case folding and no date reformatting.

use super::tokens::Tokens;
use crate::record::IdentityRecord;

pub const SEPARATOR: char = '@';

/// Non-empty segments needed before a payload is treated as delimited
pub const MIN_SEGMENTS: usize = 4;

/// Strip whitespace and the ASCII information separators (FS, GS, RS, US)
/// that scanners leave around field boundaries
fn trim_segment(segment: &str) -> &str {
    segment.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// True when the payload carries enough `@`-separated content
pub(crate) fn is_delimited(payload: &str) -> bool {
    payload.contains(SEPARATOR)
        && payload
            .split(SEPARATOR)
            .filter(|segment| !trim_segment(segment).is_empty())
            .count()
            >= MIN_SEGMENTS
}

pub(crate) fn parse(payload: &str) -> IdentityRecord {
    let segments: Tokens<'_> = payload.split(SEPARATOR).map(trim_segment).collect();

    IdentityRecord {
        number: segments.nth_or_empty(1).to_string(),
        given_names: segments.nth_or_empty(2).to_string(),
        surnames: segments.nth_or_empty(3).to_string(),
        date_of_birth: segments.nth_or_empty(4).to_string(),
        sex: segments.nth_or_empty(5).to_string(),
        place_of_issuance: segments.nth_or_empty(6).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_delimited() {
        assert!(is_delimited("@1234567890@JUAN@PEREZ@1990-01-15"));
        assert!(is_delimited("a@b@c@d"));
        assert!(!is_delimited("a@b@c"));
        assert!(!is_delimited("@@@@@@"));
        assert!(!is_delimited("@ @ @ @x"));
        assert!(!is_delimited("no separators here"));
    }

    #[test]
    fn test_parse_full() {
        let record = parse("@1234567890@JUAN@PEREZ@1990-01-15@M@BOGOTA");
        assert_eq!(record.number, "1234567890");
        assert_eq!(record.given_names, "JUAN");
        assert_eq!(record.surnames, "PEREZ");
        assert_eq!(record.date_of_birth, "1990-01-15");
        assert_eq!(record.sex, "M");
        assert_eq!(record.place_of_issuance, "BOGOTA");
    }

    #[test]
    fn test_parse_trims_segments() {
        let record = parse("HDR@ 1234567890 @ Juan @PEREZ\n@ 15/01/1990");
        assert_eq!(record.number, "1234567890");
        assert_eq!(record.given_names, "Juan");
        assert_eq!(record.surnames, "PEREZ");
        assert_eq!(record.date_of_birth, "15/01/1990");
    }

    #[test]
    fn test_parse_trims_information_separators() {
        let record = parse("h@123\x1d@JUAN\x1c@PEREZ@x");
        assert_eq!(record.number, "123");
        assert_eq!(record.given_names, "JUAN");
        assert_eq!(record.surnames, "PEREZ");
        assert_eq!(record.date_of_birth, "x");

        let record = parse("\x1dHDR@\x1e52123456\x1f@ANA@GOMEZ\x1d\r\n");
        assert_eq!(record.number, "52123456");
        assert_eq!(record.surnames, "GOMEZ");
    }

    #[test]
    fn test_separator_only_segments_are_empty() {
        assert!(!is_delimited("h@\x1d@\x1c\x1e@x@\x1f"));
        assert!(is_delimited("h@1\x1d@2@3"));
    }

    #[test]
    fn test_parse_short_payload_fills_empty() {
        let record = parse("a@b@c@d");
        assert_eq!(record.number, "b");
        assert_eq!(record.given_names, "c");
        assert_eq!(record.surnames, "d");
        assert_eq!(record.date_of_birth, "");
        assert_eq!(record.sex, "");
        assert_eq!(record.place_of_issuance, "");
    }

    #[test]
    fn test_parse_ignores_extra_segments() {
        let record = parse("h@1@2@3@4@5@6@7@8");
        assert_eq!(record.place_of_issuance, "6");
    }

    #[test]
    fn test_parse_empty_number_segment() {
        let record = parse("h@@JUAN@PEREZ@1990-01-15");
        assert_eq!(record.number, "");
        assert_eq!(record.given_names, "JUAN");
        assert!(!record.is_parsed());
    }
}
