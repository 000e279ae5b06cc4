//! Records Database Library for cedula
//!
//! Persists the identity records confirmed after a scan, the operator
//! accounts allowed to use the tool, and renders records as CSV.
//!
//! # Features
//!
//! - `sqlite-sync` (default) - Synchronous SQLite using rusqlite (for CLI)
//!
//! # Example
//!
//! ```no_run
//! use cedula_idb::{CitizenFilter, CitizensRepository, SqliteDb};
//!
//! let db = SqliteDb::open("cedulas.db").unwrap();
//! db.init().unwrap();
//!
//! let record = cedula::parse("@1234567890@JUAN@PEREZ@1990-01-15@M@BOGOTA");
//! db.add_citizen(&record).unwrap();
//!
//! let found = db.list_citizens(&CitizenFilter::search("PEREZ")).unwrap();
//! ```

pub mod export;
pub mod repository;
pub mod shared;
pub mod types;

#[cfg(feature = "sqlite-sync")]
pub mod sqlite;

// Re-export types
pub use types::*;

// Re-export repository traits
pub use repository::{CitizensRepository, RepoError, RepoResult, UsersRepository};

pub use export::{escape_csv, export_file_name, write_csv, CSV_HEADER};

#[cfg(feature = "sqlite-sync")]
pub use sqlite::{SqliteDb, DEFAULT_DB_NAME};
