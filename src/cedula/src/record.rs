//! The identity record produced by the payload parser.

use serde::{Deserialize, Serialize};

/// Identity fields extracted from one cédula payload.
///
/// Every field is always present. Anything the parser could not recover is
/// the empty string, never a missing value. The serde names match the column
/// and wire names used by storage and the sync endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// National document number (digits only on the legacy path)
    #[serde(rename = "numero", default)]
    pub number: String,

    #[serde(rename = "nombres", default)]
    pub given_names: String,

    #[serde(rename = "apellidos", default)]
    pub surnames: String,

    /// `YYYY-MM-DD`, or empty when absent or out of range
    #[serde(rename = "fecha_nacimiento", default)]
    pub date_of_birth: String,

    /// `"M"`, `"F"` or empty
    #[serde(rename = "sexo", default)]
    pub sex: String,

    /// `"<department>-<municipality>"`, or empty
    #[serde(rename = "lugar_expedicion", default)]
    pub place_of_issuance: String,
}

/// How much of a payload was recovered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Document number recovered
    Parsed,
    /// Some fields recovered but no document number
    Partial,
    /// Nothing recovered
    Unparsed,
}

impl std::fmt::Display for ParseOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parsed => write!(f, "parsed"),
            Self::Partial => write!(f, "partial"),
            Self::Unparsed => write!(f, "unparsed"),
        }
    }
}

impl IdentityRecord {
    /// True when every field is empty
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_empty())
    }

    /// True when a document number was recovered.
    ///
    /// This is the only success signal callers should act on: a record
    /// without a number must not be stored.
    pub fn is_parsed(&self) -> bool {
        !self.number.is_empty()
    }

    pub fn outcome(&self) -> ParseOutcome {
        if self.is_parsed() {
            ParseOutcome::Parsed
        } else if self.is_empty() {
            ParseOutcome::Unparsed
        } else {
            ParseOutcome::Partial
        }
    }

    /// Field labels and values in storage order
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("number", self.number.as_str()),
            ("given_names", self.given_names.as_str()),
            ("surnames", self.surnames.as_str()),
            ("date_of_birth", self.date_of_birth.as_str()),
            ("sex", self.sex.as_str()),
            ("place_of_issuance", self.place_of_issuance.as_str()),
        ]
    }

    /// Mutable access to a field by its label (see [`IdentityRecord::fields`])
    pub fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "number" => Some(&mut self.number),
            "given_names" => Some(&mut self.given_names),
            "surnames" => Some(&mut self.surnames),
            "date_of_birth" => Some(&mut self.date_of_birth),
            "sex" => Some(&mut self.sex),
            "place_of_issuance" => Some(&mut self.place_of_issuance),
            _ => None,
        }
    }
}

impl std::fmt::Display for IdentityRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} {}", self.number, self.given_names, self.surnames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IdentityRecord {
        IdentityRecord {
            number: "1234567890".to_string(),
            given_names: "Juan Carlos".to_string(),
            surnames: "Perez Garcia".to_string(),
            date_of_birth: "1990-01-15".to_string(),
            sex: "M".to_string(),
            place_of_issuance: "001-01".to_string(),
        }
    }

    #[test]
    fn test_default_is_empty() {
        let record = IdentityRecord::default();
        assert!(record.is_empty());
        assert!(!record.is_parsed());
        assert_eq!(record.outcome(), ParseOutcome::Unparsed);
    }

    #[test]
    fn test_outcome_partial_without_number() {
        let record = IdentityRecord {
            date_of_birth: "1990-01-15".to_string(),
            ..Default::default()
        };
        assert_eq!(record.outcome(), ParseOutcome::Partial);
    }

    #[test]
    fn test_outcome_parsed() {
        assert_eq!(sample().outcome(), ParseOutcome::Parsed);
    }

    #[test]
    fn test_serde_uses_storage_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["numero"], "1234567890");
        assert_eq!(json["nombres"], "Juan Carlos");
        assert_eq!(json["apellidos"], "Perez Garcia");
        assert_eq!(json["fecha_nacimiento"], "1990-01-15");
        assert_eq!(json["sexo"], "M");
        assert_eq!(json["lugar_expedicion"], "001-01");
    }

    #[test]
    fn test_deserialize_missing_fields_default_to_empty() {
        let record: IdentityRecord = serde_json::from_str(r#"{"numero":"42"}"#).unwrap();
        assert_eq!(record.number, "42");
        assert_eq!(record.surnames, "");
        assert_eq!(record.place_of_issuance, "");
    }

    #[test]
    fn test_field_mut() {
        let mut record = sample();
        *record.field_mut("sex").unwrap() = "F".to_string();
        assert_eq!(record.sex, "F");
        assert!(record.field_mut("unknown").is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "1234567890 - Juan Carlos Perez Garcia");
    }
}
