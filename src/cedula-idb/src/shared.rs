//! Shared constants and query building utilities for database implementations.

use crate::types::CitizenFilter;
use sha2::{Digest, Sha256};

/// Comma-separated column list for SELECT queries.
/// Order must match the positional indices used in row mapping functions.
pub const CITIZEN_SELECT_COLUMNS: &str = "id, numero, nombres, apellidos, fecha_nacimiento, sexo,
                    lugar_expedicion, created_at";

/// Accounts created by `init` when missing: (username, password, role)
pub const DEFAULT_USERS: &[(&str, &str, &str)] =
    &[("admin", "1234", "admin"), ("lector", "lector", "lector")];

/// Lowercase hex SHA-256 of a password, as stored in the users table
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// `%term%` pattern for LIKE matching, with LIKE wildcards escaped
pub fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

/// Build the list query for a filter.
///
/// # Returns
/// A tuple of (sql_string, param_count). When searching, the same pattern is
/// bound once per searched column.
pub fn build_list_query(filter: &CitizenFilter) -> (String, usize) {
    let mut sql = format!("SELECT {} FROM citizens", CITIZEN_SELECT_COLUMNS);
    let mut param_count = 0;

    if filter.search.is_some() {
        sql.push_str(
            " WHERE numero LIKE ?1 ESCAPE '\\' OR nombres LIKE ?1 ESCAPE '\\' OR apellidos LIKE ?1 ESCAPE '\\'",
        );
        param_count = 1;
    }

    sql.push_str(" ORDER BY id ASC");

    if let Some(limit) = filter.limit {
        sql.push_str(&format!(" LIMIT {}", limit));
    }

    (sql, param_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password() {
        assert_eq!(
            hash_password("1234"),
            "03ac674216f3e15c761ee1a5e255f067953623c8b388b4459e13f978d7c846f4"
        );
        assert_eq!(hash_password("1234").len(), 64);
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("PEREZ"), "%PEREZ%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
    }

    #[test]
    fn test_build_list_query_no_filter() {
        let (sql, count) = build_list_query(&CitizenFilter::default());
        assert!(sql.starts_with("SELECT id, numero"));
        assert!(!sql.contains("WHERE"));
        assert!(sql.ends_with("ORDER BY id ASC"));
        assert_eq!(count, 0);
    }

    #[test]
    fn test_build_list_query_with_search_and_limit() {
        let filter = CitizenFilter {
            search: Some("JUAN".to_string()),
            limit: Some(10),
        };
        let (sql, count) = build_list_query(&filter);
        assert!(sql.contains("numero LIKE ?1"));
        assert!(sql.contains("apellidos LIKE ?1"));
        assert!(sql.ends_with("LIMIT 10"));
        assert_eq!(count, 1);
    }
}
