//! Sync command handler

use anyhow::Result;
use cedula::IdentityRecord;
use cedula_idb::{CitizenFilter, CitizensRepository};
use std::path::Path;

use super::{open_db, require_admin};
use crate::cli::AuthArgs;
use crate::config::Config;

/// Handle `sync`
pub fn handle(config_path: &Path, db: &Path, auth: &AuthArgs) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let sdb = open_db(db)?;
    require_admin(&sdb, auth)?;

    let records: Vec<IdentityRecord> = sdb
        .list_citizens(&CitizenFilter::default())?
        .into_iter()
        .map(|citizen| citizen.record)
        .collect();

    let now = chrono::Local::now().naive_local();
    let sent = crate::sync::push(&config.sync, &records, now)?;
    tracing::info!(sent, server = %config.sync.server, "sync complete");
    println!(
        "Synchronized {} records with {}",
        sent,
        crate::sync::sync_url(&config.sync)
    );
    Ok(())
}
