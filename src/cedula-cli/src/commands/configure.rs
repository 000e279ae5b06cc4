//! Configuration command handlers
//!
//! Handles the `configure` subcommand for the sync server and the default
//! records database.

use crate::cli::AuthArgs;
use crate::config::Config;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Requested configuration changes
#[derive(Debug, Default)]
pub struct ConfigUpdate {
    pub server: Option<String>,
    pub port: Option<u16>,
    pub enabled: Option<bool>,
    pub database: Option<PathBuf>,
}

impl ConfigUpdate {
    pub fn is_empty(&self) -> bool {
        self.server.is_none()
            && self.port.is_none()
            && self.enabled.is_none()
            && self.database.is_none()
    }

    /// Write the requested values into `config`
    pub fn apply(self, config: &mut Config) {
        if let Some(server) = self.server {
            config.sync.server = server.trim().to_string();
        }
        if let Some(port) = self.port {
            config.sync.port = port;
        }
        if let Some(enabled) = self.enabled {
            config.sync.enabled = enabled;
        }
        if let Some(database) = self.database {
            config.database = Some(database);
        }
    }
}

/// Handle the configure command
///
/// Showing is open to everyone; changes need an admin login against `db`.
pub fn handle(
    config_path: &Path,
    db: &Path,
    update: ConfigUpdate,
    show: bool,
    auth: &AuthArgs,
) -> Result<()> {
    let mut config = Config::load_from(config_path)?;

    if update.is_empty() {
        if show {
            show_config(&config, config_path);
        } else {
            show_usage();
        }
        return Ok(());
    }

    let sdb = super::open_db(db)?;
    super::require_admin(&sdb, auth)?;

    update.apply(&mut config);
    config.save_to(config_path)?;
    tracing::info!(path = %config_path.display(), "configuration saved");

    println!("Config saved to: {}", config_path.display());
    if show {
        show_config(&config, config_path);
    }
    Ok(())
}

/// Display current configuration
fn show_config(config: &Config, config_path: &Path) {
    let server = if config.sync.server.is_empty() {
        "(not set)"
    } else {
        config.sync.server.as_str()
    };
    println!("Sync server: {}", server);
    println!("Sync port:   {}", config.sync.port);
    println!(
        "Sync:        {}",
        if config.sync.enabled { "enabled" } else { "disabled" }
    );
    match &config.database {
        Some(path) => println!("Database:    {}", path.display()),
        None => println!("Database:    (default)"),
    }
    println!("Config file: {}", config_path.display());
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: cedula configure --server HOST [--port PORT] --enable --user ADMIN --password PASS");
    println!("   or: cedula configure --show");
    println!();
    println!("Note: Records are sent to http://HOST:PORT/api/sincronizar by `cedula sync`.");
}
