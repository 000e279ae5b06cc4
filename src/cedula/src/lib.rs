//! # cedula
//!
//! Parser for the PDF417 barcode printed on the back of Colombian national
//! ID cards (cédulas de ciudadanía).
//!
//! Two generations of cards are in circulation and they encode their data
//! differently:
//! - Newer cards emit a delimited payload with `@` between fields
//! - Older cards emit one concatenated block with no field separators,
//!   which is decoded by locating a fixed-shape anchor and classifying the
//!   digit and letter runs around it
//!
//! Parsing never fails. A payload that cannot be classified produces the
//! all-empty [`IdentityRecord`]; callers treat an empty document number as
//! the signal that the scan needs to be retried or typed in by hand.
//!
//! ## Example
//!
//! ```
//! let record = cedula::parse("@1234567890@JUAN@PEREZ@1990-01-15@M@BOGOTA");
//!
//! assert_eq!(record.number, "1234567890");
//! assert_eq!(record.given_names, "JUAN");
//! assert!(record.is_parsed());
//!
//! let nothing = cedula::parse("");
//! assert!(nothing.is_empty());
//! ```

pub mod payload;
pub mod record;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
#[doc(inline)]
pub use payload::{detect_format, parse, parse_bytes, PayloadFormat};
#[doc(inline)]
pub use record::{IdentityRecord, ParseOutcome};
