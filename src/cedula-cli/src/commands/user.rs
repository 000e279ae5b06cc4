//! Operator account command handlers

use anyhow::Result;
use cedula_idb::{Role, UsersRepository};
use std::path::Path;

use super::{open_db, require_admin};
use crate::cli::AuthArgs;

/// Handle `user add`
pub fn add(db: &Path, auth: &AuthArgs, username: &str, password: &str, role: Role) -> Result<()> {
    let sdb = open_db(db)?;
    require_admin(&sdb, auth)?;

    sdb.add_user(username.trim(), password, role)?;
    tracing::info!(username = username.trim(), %role, "user created");
    println!("Created {} account '{}'", role, username.trim());
    Ok(())
}

/// Handle `user list`
pub fn list(db: &Path, auth: &AuthArgs) -> Result<()> {
    let sdb = open_db(db)?;
    require_admin(&sdb, auth)?;

    let users = sdb.list_users()?;
    println!("{:<20} ROLE", "USERNAME");
    println!("{}", "-".repeat(26));
    for user in &users {
        println!("{:<20} {}", user.username, user.role);
    }
    println!();
    println!("Total: {} accounts", users.len());
    Ok(())
}
