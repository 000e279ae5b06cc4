//! CSV export command handler

use anyhow::{bail, Context, Result};
use cedula_idb::{export_file_name, write_csv, CitizenFilter, CitizensRepository};
use chrono::NaiveDateTime;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use super::{open_db, require_admin};
use crate::cli::AuthArgs;

/// Handle `export`
pub fn handle(db: &Path, auth: &AuthArgs, search: Option<&str>, output: &Path) -> Result<()> {
    let sdb = open_db(db)?;
    require_admin(&sdb, auth)?;

    let now = chrono::Local::now().naive_local();
    let (path, count) = export(&sdb, search, output, now)?;
    println!("Exported {} records to {}", count, path.display());
    Ok(())
}

/// Write matching records to a timestamped CSV file in `output`
pub fn export<R: CitizensRepository>(
    repo: &R,
    search: Option<&str>,
    output: &Path,
    now: NaiveDateTime,
) -> Result<(PathBuf, usize)> {
    let filter = search.map(CitizenFilter::search).unwrap_or_default();
    let citizens = repo.list_citizens(&filter)?;
    if citizens.is_empty() {
        bail!("No records to export");
    }

    std::fs::create_dir_all(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let path = output.join(export_file_name(now));
    let file =
        File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(BufWriter::new(file), &citizens)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), count = citizens.len(), "export written");
    Ok((path, citizens.len()))
}
