//! Shared types for the records database.
//!
//! These types are database-agnostic and used by all implementations.

use cedula::IdentityRecord;
use serde::{Deserialize, Serialize};

/// Operator role. Readers may scan, save and list; admins may also export,
/// sync, manage users and change configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "lector")]
    Reader,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Reader => write!(f, "lector"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "lector" | "reader" => Ok(Self::Reader),
            _ => Err(ParseError::InvalidRole(s.to_string())),
        }
    }
}

/// A stored identity record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citizen {
    pub id: i64,
    #[serde(flatten)]
    pub record: IdentityRecord,
    pub created_at: String,
}

/// An operator account (the password hash never leaves the database)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub role: Role,
}

/// Filter for listing records
#[derive(Debug, Clone, Default)]
pub struct CitizenFilter {
    /// Substring matched against number, given names and surnames
    pub search: Option<String>,
    pub limit: Option<usize>,
}

impl CitizenFilter {
    /// Filter on a search term; blank terms match everything
    pub fn search(term: &str) -> Self {
        let term = term.trim();
        Self {
            search: (!term.is_empty()).then(|| term.to_string()),
            ..Default::default()
        }
    }
}

/// Database statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DbStats {
    pub citizen_count: i64,
    pub user_count: i64,
}

/// Parse errors for enum conversions
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid role: {0}")]
    InvalidRole(String),
}
