//! Shared helpers used across CLI commands.
//!
//! Centralises the repetitive pattern of resolving the database path and
//! opening the SQLite store, ensuring consistent defaults everywhere.

use rusqlite::Connection;
use useradm_core::db::open_db;

/// Environment variable overriding the default database path.
pub const DB_ENV_VAR: &str = "USERADM_DB";

const DEFAULT_DB_FILE: &str = "useradm.db";

/// Default database path for the user store.
///
/// Uses `$USERADM_DB` or `useradm.db` in the working directory.
pub fn default_db_path() -> String {
    std::env::var(DB_ENV_VAR).unwrap_or_else(|_| DEFAULT_DB_FILE.to_string())
}

/// Opens the SQLite user store, applying pending migrations.
///
/// # Errors
///
/// Returns an error if the database file cannot be created or opened.
pub fn open_store(db: &Option<String>) -> anyhow::Result<Connection> {
    let path = db.clone().unwrap_or_else(default_db_path);
    if let Some(parent) = std::path::Path::new(&path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    open_db(&path).map_err(|e| anyhow::anyhow!("failed to open user store at `{path}`: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_store_with_temp_path() {
        let dir = tempfile::tempdir().expect("tmp");
        let db = dir.path().join("store.db").to_str().expect("utf8").to_string();
        let conn = open_store(&Some(db));
        assert!(conn.is_ok());
    }

    #[test]
    fn open_store_creates_parent_directories() {
        let dir = tempfile::tempdir().expect("tmp");
        let db = dir
            .path()
            .join("nested/dir/store.db")
            .to_str()
            .expect("utf8")
            .to_string();
        let conn = open_store(&Some(db));
        assert!(conn.is_ok());
    }
}
