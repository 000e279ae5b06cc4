//! Configuration management for cedula CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Port used when the config file does not name one
pub const DEFAULT_SYNC_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Host name or address of the sync server
    pub server: String,
    pub port: u16,
    pub enabled: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            server: String::new(),
            port: DEFAULT_SYNC_PORT,
            enabled: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Records database used when `--db` is not given
    pub database: Option<PathBuf>,
    pub sync: SyncConfig,
}

impl Config {
    /// Get the default path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("cedula");

        Ok(config_dir.join("config.toml"))
    }

    /// Explicit path if given, otherwise the default location
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::config_path(),
        }
    }

    /// Load configuration from file, or defaults if it doesn't exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Database path: `--db` first, then the configured path, then the
    /// platform data directory
    pub fn database_path(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.database {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir()
            .context("Could not determine data directory")?
            .join("cedula");
        Ok(data_dir.join(cedula_idb::DEFAULT_DB_NAME))
    }
}
