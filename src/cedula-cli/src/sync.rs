//! Push stored records to the sync server
//!
//! The server accepts one JSON document per sync at
//! `http://<server>:<port>/api/sincronizar` and answers 200 when it has
//! stored the batch.

use cedula::IdentityRecord;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::time::Duration;

use crate::config::SyncConfig;

/// Request timeout for the sync call
pub const SYNC_TIMEOUT: Duration = Duration::from_secs(10);

/// Device label sent with each batch
pub const DEVICE: &str = "Desktop";

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Synchronization is disabled")]
    Disabled,

    #[error("Sync server is not configured")]
    NotConfigured,

    #[error("No records to synchronize")]
    NothingToSync,

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Request failed: {0}")]
    Transport(String),
}

/// Request body of a sync call
#[derive(Debug, Serialize)]
pub struct SyncBatch<'a> {
    #[serde(rename = "dispositivo")]
    pub device: &'a str,
    pub timestamp: String,
    #[serde(rename = "registros")]
    pub records: &'a [IdentityRecord],
}

impl<'a> SyncBatch<'a> {
    pub fn new(records: &'a [IdentityRecord], now: NaiveDateTime) -> Self {
        Self {
            device: DEVICE,
            timestamp: now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            records,
        }
    }
}

/// Endpoint URL for a sync config
pub fn sync_url(config: &SyncConfig) -> String {
    format!(
        "http://{}:{}/api/sincronizar",
        config.server.trim(),
        config.port
    )
}

/// Check the config and record set before any network traffic
pub fn check_ready(config: &SyncConfig, records: &[IdentityRecord]) -> Result<(), SyncError> {
    if !config.enabled {
        return Err(SyncError::Disabled);
    }
    if config.server.trim().is_empty() {
        return Err(SyncError::NotConfigured);
    }
    if records.is_empty() {
        return Err(SyncError::NothingToSync);
    }
    Ok(())
}

/// Send every record in one batch, returning how many were sent
pub fn push(
    config: &SyncConfig,
    records: &[IdentityRecord],
    now: NaiveDateTime,
) -> Result<usize, SyncError> {
    check_ready(config, records)?;

    let url = sync_url(config);
    let batch = SyncBatch::new(records, now);
    tracing::debug!(%url, count = records.len(), "sending sync batch");

    let agent = ureq::AgentBuilder::new().timeout(SYNC_TIMEOUT).build();
    match agent.post(&url).send_json(&batch) {
        Ok(resp) if resp.status() == 200 => Ok(records.len()),
        Ok(resp) => Err(SyncError::Status(resp.status())),
        Err(ureq::Error::Status(code, _)) => Err(SyncError::Status(code)),
        Err(e) => Err(SyncError::Transport(e.to_string())),
    }
}
