//! Payload parse command handler

use anyhow::{bail, Result};
use cedula::IdentityRecord;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::file_io::read_payload;

/// Field labels shown in table output, in record order
const LABELS: [&str; 6] = [
    "Number",
    "Given names",
    "Surnames",
    "Date of birth",
    "Sex",
    "Place of issuance",
];

/// Handle `parse`
pub fn handle(payload: Option<&str>, file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let bytes = read_payload(payload, file)?;
    let text = cedula::payload::decode_lossy(&bytes);
    let detected = cedula::detect_format(&text);
    let record = cedula::parse(&text);

    tracing::debug!(format = %detected, outcome = %record.outcome(), "parsed payload");
    print!("{}", render_record(&record, format)?);

    if !record.is_parsed() {
        bail!("Could not read a document number from the payload ({})", detected);
    }
    Ok(())
}

/// Render one record in the requested format
pub fn render_record(record: &IdentityRecord, format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => {
            let row: Vec<String> = record
                .fields()
                .iter()
                .map(|(_, value)| cedula_idb::escape_csv(value))
                .collect();
            format!("{}\n{}\n", cedula_idb::CSV_HEADER.join(","), row.join(","))
        }
        OutputFormat::Table => record
            .fields()
            .iter()
            .zip(LABELS)
            .map(|((_, value), label)| format!("{:<18} {}\n", format!("{}:", label), value))
            .collect(),
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> IdentityRecord {
        cedula::parse("@1234567890@JUAN@PEREZ@1990-01-15@M@BOGOTA")
    }

    #[test]
    fn test_render_table() {
        let out = render_record(&record(), OutputFormat::Table).unwrap();
        assert_eq!(out.lines().count(), 6);
        assert!(out.starts_with("Number:            1234567890\n"));
        assert!(out.contains("Place of issuance: BOGOTA\n"));
    }

    #[test]
    fn test_render_csv() {
        let out = render_record(&record(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "1234567890,JUAN,PEREZ,1990-01-15,M,BOGOTA");
    }

    #[test]
    fn test_render_json() {
        let out = render_record(&record(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["nombres"], "JUAN");
    }

    #[test]
    fn test_handle_unparsed_payload_errors() {
        assert!(handle(Some("nothing to see"), None, OutputFormat::Table).is_err());
    }

    #[test]
    fn test_handle_parsed_payload() {
        let payload = "1234567890 PEREZ GARCIA JUAN M19900115011123";
        assert!(handle(Some(payload), None, OutputFormat::Json).is_ok());
    }
}
