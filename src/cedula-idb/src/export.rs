//! CSV rendering of stored records

use crate::repository::RepoResult;
use crate::types::Citizen;
use chrono::NaiveDateTime;
use std::io::Write;

/// Header row of exported files
pub const CSV_HEADER: [&str; 6] = [
    "Número",
    "Nombres",
    "Apellidos",
    "Nacimiento",
    "Sexo",
    "Lugar Expedición",
];

/// Escape a string for CSV output
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// `cedulas_export_YYYYMMDD_HHMMSS.csv`
pub fn export_file_name(timestamp: NaiveDateTime) -> String {
    format!("cedulas_export_{}.csv", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Write the header and one row per record.
///
/// Writer failures surface as [`RepoError::Io`](crate::RepoError::Io).
pub fn write_csv<W: Write>(mut writer: W, citizens: &[Citizen]) -> RepoResult<()> {
    writeln!(writer, "{}", CSV_HEADER.join(","))?;
    for citizen in citizens {
        let row: Vec<String> = citizen
            .record
            .fields()
            .iter()
            .map(|(_, value)| escape_csv(value))
            .collect();
        writeln!(writer, "{}", row.join(","))?;
    }
    writer.flush()?;
    Ok(())
}
