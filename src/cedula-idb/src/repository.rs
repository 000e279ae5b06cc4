//! Repository traits for records database operations.
//!
//! These traits define the interface for all database backends.

use crate::types::*;
use cedula::IdentityRecord;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Record has no document number")]
    MissingNumber,

    #[error("User already exists: {0}")]
    UserExists(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Stored identity records
pub trait CitizensRepository {
    /// Initialize the database schema and seed the default accounts
    fn init(&self) -> RepoResult<()>;

    /// Store a confirmed record, returning its row id.
    ///
    /// Records without a document number are rejected. Duplicates are
    /// stored as separate rows.
    fn add_citizen(&self, record: &IdentityRecord) -> RepoResult<i64>;

    /// List records in insertion order
    fn list_citizens(&self, filter: &CitizenFilter) -> RepoResult<Vec<Citizen>>;

    fn count_citizens(&self) -> RepoResult<i64>;

    /// Get database statistics
    fn stats(&self) -> RepoResult<DbStats>;
}

/// Operator accounts
pub trait UsersRepository {
    /// Role of the account if the credentials match
    fn authenticate(&self, username: &str, password: &str) -> RepoResult<Option<Role>>;

    fn add_user(&self, username: &str, password: &str, role: Role) -> RepoResult<()>;

    fn list_users(&self) -> RepoResult<Vec<User>>;
}
