//! Command handlers for cedula CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod export;
pub mod parse;
pub mod record;
pub mod sync;
pub mod user;

use anyhow::{bail, Context, Result};
use cedula_idb::{CitizensRepository, Role, SqliteDb, UsersRepository};
use std::path::Path;

use crate::cli::AuthArgs;

/// Open the records database, creating it on first use
pub fn open_db(db: &Path) -> Result<SqliteDb> {
    if let Some(parent) = db.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    let sdb = SqliteDb::open(db).with_context(|| format!("Failed to open {}", db.display()))?;
    sdb.init()?;
    Ok(sdb)
}

/// Check operator credentials, returning the account role
pub fn login(sdb: &SqliteDb, auth: &AuthArgs) -> Result<Role> {
    let (Some(user), Some(password)) = (auth.user.as_deref(), auth.password.as_deref()) else {
        bail!("Credentials required: pass --user and --password (or set CEDULA_USER and CEDULA_PASSWORD)");
    };

    match sdb.authenticate(user, password)? {
        Some(role) => {
            tracing::debug!(user, %role, "authenticated");
            Ok(role)
        }
        None => bail!("Invalid username or password"),
    }
}

/// Like [`login`], but only admins pass
pub fn require_admin(sdb: &SqliteDb, auth: &AuthArgs) -> Result<()> {
    let role = login(sdb, auth)?;
    if !role.is_admin() {
        bail!("This operation requires an admin account");
    }
    Ok(())
}
