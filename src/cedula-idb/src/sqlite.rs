//! SQLite implementation using rusqlite (synchronous).
//!
//! This implementation is used by the CLI tool.

use crate::repository::*;
use crate::shared::{self, hash_password, CITIZEN_SELECT_COLUMNS, DEFAULT_USERS};
use crate::types::*;
use cedula::IdentityRecord;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Default database file name inside the application data directory
pub const DEFAULT_DB_NAME: &str = "cedulas.db";

/// SQLite-backed records database
pub struct SqliteDb {
    conn: Connection,
}

fn row_to_citizen(row: &rusqlite::Row<'_>) -> rusqlite::Result<Citizen> {
    Ok(Citizen {
        id: row.get(0)?,
        record: IdentityRecord {
            number: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            given_names: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            surnames: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            date_of_birth: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
            sex: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
            place_of_issuance: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
        },
        created_at: row.get::<_, Option<String>>(7)?.unwrap_or_default(),
    })
}

impl SqliteDb {
    /// Open or create the database
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path.as_ref())?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    fn seed_default_users(&self) -> RepoResult<()> {
        for (username, password, role) in DEFAULT_USERS {
            let inserted = self
                .conn
                .execute(
                    "INSERT OR IGNORE INTO users (username, password, role) VALUES (?1, ?2, ?3)",
                    params![username, hash_password(password), role],
                )
                .map_err(|e| RepoError::Database(e.to_string()))?;
            if inserted > 0 {
                tracing::warn!(
                    "Created default account '{}'; change its password before real use",
                    username
                );
            }
        }
        Ok(())
    }
}

impl CitizensRepository for SqliteDb {
    fn init(&self) -> RepoResult<()> {
        self.conn
            .execute_batch(
                r#"
            CREATE TABLE IF NOT EXISTS citizens (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                numero TEXT NOT NULL,
                nombres TEXT,
                apellidos TEXT,
                fecha_nacimiento TEXT,
                sexo TEXT,
                lugar_expedicion TEXT,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_citizens_numero ON citizens(numero);

            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT UNIQUE NOT NULL,
                password TEXT NOT NULL,
                role TEXT NOT NULL
            );
            "#,
            )
            .map_err(|e| RepoError::Database(e.to_string()))?;

        self.seed_default_users()
    }

    fn add_citizen(&self, record: &IdentityRecord) -> RepoResult<i64> {
        if !record.is_parsed() {
            return Err(RepoError::MissingNumber);
        }

        self.conn
            .execute(
                "INSERT INTO citizens (numero, nombres, apellidos, fecha_nacimiento, sexo, lugar_expedicion)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    record.number,
                    record.given_names,
                    record.surnames,
                    record.date_of_birth,
                    record.sex,
                    record.place_of_issuance,
                ],
            )
            .map_err(|e| RepoError::Database(e.to_string()))?;

        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, number = %record.number, "stored citizen");
        Ok(id)
    }

    fn list_citizens(&self, filter: &CitizenFilter) -> RepoResult<Vec<Citizen>> {
        let (sql, _) = shared::build_list_query(filter);
        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| RepoError::Database(e.to_string()))?;

        let rows = match &filter.search {
            Some(term) => stmt.query_map(params![shared::like_pattern(term)], row_to_citizen),
            None => stmt.query_map([], row_to_citizen),
        };
        let citizens = rows
            .map_err(|e| RepoError::Database(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| RepoError::Database(e.to_string()))?;
        Ok(citizens)
    }

    fn count_citizens(&self) -> RepoResult<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM citizens", [], |row| row.get(0))
            .map_err(|e| RepoError::Database(e.to_string()))
    }

    fn stats(&self) -> RepoResult<DbStats> {
        let user_count = self
            .conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .map_err(|e| RepoError::Database(e.to_string()))?;
        Ok(DbStats {
            citizen_count: self.count_citizens()?,
            user_count,
        })
    }
}

impl UsersRepository for SqliteDb {
    fn authenticate(&self, username: &str, password: &str) -> RepoResult<Option<Role>> {
        let role: Option<String> = self
            .conn
            .query_row(
                "SELECT role FROM users WHERE username = ?1 AND password = ?2",
                params![username, hash_password(password)],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| RepoError::Database(e.to_string()))?;

        role.map(|r| r.parse::<Role>()).transpose().map_err(Into::into)
    }

    fn add_user(&self, username: &str, password: &str, role: Role) -> RepoResult<()> {
        let inserted = self
            .conn
            .execute(
                "INSERT OR IGNORE INTO users (username, password, role) VALUES (?1, ?2, ?3)",
                params![username, hash_password(password), role.to_string()],
            )
            .map_err(|e| RepoError::Database(e.to_string()))?;
        if inserted == 0 {
            return Err(RepoError::UserExists(username.to_string()));
        }
        Ok(())
    }

    fn list_users(&self) -> RepoResult<Vec<User>> {
        let mut stmt = self
            .conn
            .prepare("SELECT username, role FROM users ORDER BY username")
            .map_err(|e| RepoError::Database(e.to_string()))?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
            .map_err(|e| RepoError::Database(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter()
            .map(|(username, role)| -> RepoResult<User> {
                Ok(User {
                    username,
                    role: role.parse()?,
                })
            })
            .collect()
    }
}
