//! Concatenated (legacy) format.
//!
//! Older cards carry no field separators. The anchor fixes sex, birth date
//! and issuing place; the document number is the last long digit run before
//! the anchor and the name words are the uppercase runs of the whole
//! payload, surnames first.

use super::anchor::Anchor;
use super::tokens::{join_words, name_words, number_candidates, title_case};
use crate::record::IdentityRecord;

/// Parse a payload without separators, or `None` when it has no anchor
pub(crate) fn parse(payload: &str) -> Option<IdentityRecord> {
    let anchor = Anchor::find(payload)?;

    let prefix = &payload[..anchor.start];
    let number = number_candidates(prefix).last().unwrap_or_default();

    let words = name_words(payload);
    let surnames = join_words(&[words.nth_or_empty(0), words.nth_or_empty(1)]);
    let given_names = join_words(&[words.nth_or_empty(2), words.nth_or_empty(3)]);

    Some(IdentityRecord {
        number: number.to_string(),
        given_names: title_case(&given_names),
        surnames: title_case(&surnames),
        date_of_birth: anchor.date_of_birth(),
        sex: anchor.sex().to_string(),
        place_of_issuance: anchor.place_of_issuance(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: &str = "0045821937PUBDSK_1\u{0}1032456789\u{0}PEREZ\u{0}GARCIA\u{0}JUAN\u{0}CARLOS\u{0}0M19900115011123O+";

    #[test]
    fn test_parse_card() {
        let record = parse(CARD).unwrap();
        assert_eq!(record.number, "1032456789");
        assert_eq!(record.surnames, "Perez Garcia");
        assert_eq!(record.given_names, "Juan Carlos");
        assert_eq!(record.date_of_birth, "1990-01-15");
        assert_eq!(record.sex, "M");
        assert_eq!(record.place_of_issuance, "112-01");
    }

    #[test]
    fn test_parse_without_anchor() {
        assert!(parse("PEREZ GARCIA 1234567890").is_none());
    }

    #[test]
    fn test_number_is_nearest_to_anchor() {
        let record = parse("1112223334 9988776655 F19900115011123").unwrap();
        assert_eq!(record.number, "9988776655");
    }

    #[test]
    fn test_number_ignores_digits_after_anchor() {
        let record = parse("PEREZ M19900115011123 1234567890").unwrap();
        assert_eq!(record.number, "");
    }

    #[test]
    fn test_number_requires_ten_digits() {
        let record = parse("123456789 M19900115011123").unwrap();
        assert_eq!(record.number, "");
    }

    #[test]
    fn test_single_surname_and_given_name() {
        let record = parse("1234567890 ROJAS M19900115011123").unwrap();
        assert_eq!(record.surnames, "Rojas");
        assert_eq!(record.given_names, "");
    }

    #[test]
    fn test_three_words() {
        let record = parse("1234567890 ROJAS DIAZ ANA F1985123105001").unwrap();
        assert_eq!(record.surnames, "Rojas Diaz");
        assert_eq!(record.given_names, "Ana");
        assert_eq!(record.sex, "F");
        assert_eq!(record.date_of_birth, "1985-12-31");
        assert_eq!(record.place_of_issuance, "001-05");
    }

    #[test]
    fn test_words_after_anchor_count() {
        let record = parse("1234567890 ROJAS M19900115011123 DIAZ ANA MARIA").unwrap();
        assert_eq!(record.surnames, "Rojas Diaz");
        assert_eq!(record.given_names, "Ana Maria");
    }
}
