//! Stored record command handlers

use anyhow::{bail, Result};
use cedula::IdentityRecord;
use cedula_idb::{escape_csv, Citizen, CitizenFilter, CitizensRepository, SqliteDb, CSV_HEADER};
use std::path::Path;

use super::{login, open_db};
use crate::cli::{AuthArgs, OutputFormat, RecordEdits};
use crate::file_io::read_payload;

/// Overwrite parsed fields with the operator's corrections
pub fn apply_edits(record: &mut IdentityRecord, edits: &RecordEdits) {
    let corrections = [
        ("number", &edits.number),
        ("given_names", &edits.given_names),
        ("surnames", &edits.surnames),
        ("date_of_birth", &edits.date_of_birth),
        ("sex", &edits.sex),
        ("place_of_issuance", &edits.place_of_issuance),
    ];
    for (name, value) in corrections {
        if let (Some(value), Some(field)) = (value, record.field_mut(name)) {
            *field = value.trim().to_string();
        }
    }
}

/// Parse a payload, apply corrections and store the result
pub fn store(sdb: &SqliteDb, bytes: &[u8], edits: &RecordEdits) -> Result<(i64, IdentityRecord)> {
    let mut record = cedula::parse_bytes(bytes);
    if !record.is_parsed() && edits.number.is_none() {
        tracing::warn!(outcome = %record.outcome(), "payload did not yield a document number");
    }
    apply_edits(&mut record, edits);

    if !record.is_parsed() {
        bail!("No document number; pass --number to enter it by hand");
    }

    let id = sdb.add_citizen(&record)?;
    tracing::info!(id, number = %record.number, "record saved");
    Ok((id, record))
}

/// Handle `record add`
pub fn add(
    db: &Path,
    auth: &AuthArgs,
    payload: Option<&str>,
    file: Option<&Path>,
    edits: &RecordEdits,
    dry_run: bool,
) -> Result<()> {
    let bytes = read_payload(payload, file)?;

    if dry_run {
        let mut record = cedula::parse_bytes(&bytes);
        apply_edits(&mut record, edits);
        print!("{}", super::parse::render_record(&record, OutputFormat::Table)?);
        println!("(dry run, not saved)");
        return Ok(());
    }

    let sdb = open_db(db)?;
    login(&sdb, auth)?;
    let (id, record) = store(&sdb, &bytes, edits)?;
    println!("Saved #{}: {}", id, record);
    Ok(())
}

/// Handle `record list`
pub fn list(
    db: &Path,
    auth: &AuthArgs,
    search: Option<&str>,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let sdb = open_db(db)?;
    login(&sdb, auth)?;

    let filter = CitizenFilter {
        limit,
        ..search.map(CitizenFilter::search).unwrap_or_default()
    };
    let citizens = sdb.list_citizens(&filter)?;

    if citizens.is_empty() && !matches!(format, OutputFormat::Json) {
        println!("No records found");
        return Ok(());
    }

    print!("{}", render_citizens(&citizens, format)?);
    Ok(())
}

/// Handle `record stats`
pub fn stats(db: &Path, auth: &AuthArgs) -> Result<()> {
    let sdb = open_db(db)?;
    login(&sdb, auth)?;
    let stats = sdb.stats()?;
    println!("Records Database Statistics");
    println!("  Records: {}", stats.citizen_count);
    println!("  Users:   {}", stats.user_count);
    Ok(())
}

/// Column widths for table output, in record order
const COLUMN_WIDTHS: [usize; 6] = [12, 24, 24, 10, 4, 9];

/// Render stored records in the requested format
pub fn render_citizens(citizens: &[Citizen], format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(citizens)?),
        OutputFormat::Csv => {
            let mut out = Vec::new();
            cedula_idb::write_csv(&mut out, citizens)?;
            String::from_utf8(out)?
        }
        OutputFormat::Table => {
            let header: String = CSV_HEADER
                .iter()
                .zip(COLUMN_WIDTHS)
                .map(|(h, w)| format!("{:<width$}", h, width = w))
                .collect::<Vec<_>>()
                .join(" ");
            let mut out = format!("{}\n{}\n", header, "-".repeat(header.chars().count()));

            for citizen in citizens {
                let row: String = citizen
                    .record
                    .fields()
                    .iter()
                    .zip(COLUMN_WIDTHS)
                    .map(|((_, value), w)| format!("{:<width$}", truncate(value, w), width = w))
                    .collect::<Vec<_>>()
                    .join(" ");
                out.push_str(row.trim_end());
                out.push('\n');
            }
            out
        }
    };
    Ok(out)
}

/// Cut a value to `width` characters, marking the cut with an ellipsis
fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() > width {
        let kept: String = value.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", kept)
    } else {
        value.to_string()
    }
}
