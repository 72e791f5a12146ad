//! SQLite migration registry and executor.
//!
//! # Responsibility
//! - Register schema migrations in strictly increasing order.
//! - Apply pending migrations atomically.
//! - Support the destructive store reset used by `initialize`.
//!
//! # Invariants
//! - `version` values must remain monotonic.
//! - Applied migration version is mirrored to `PRAGMA user_version`.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_users.sql"),
}];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies all pending migrations on the provided connection.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let current_version = current_user_version(conn)?;
    let latest = latest_version();

    if current_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: latest,
        });
    }

    if current_version == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS {
        if migration.version <= current_version {
            continue;
        }

        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
    }
    tx.commit()?;

    Ok(())
}

/// Drops all registry tables and re-applies every migration.
///
/// Irreversibly destroys existing contents; callers are expected to have
/// confirmed intent before reaching this point. There is no prompt here.
///
/// # Side effects
/// - Emits `store_reset` logging events with duration and status.
pub fn reset_schema(conn: &mut Connection) -> DbResult<()> {
    let started_at = Instant::now();
    info!("event=store_reset module=store status=start");

    let tx = conn.transaction()?;
    tx.execute_batch(
        "DROP TABLE IF EXISTS users;
         PRAGMA user_version = 0;",
    )?;
    tx.commit()?;

    apply_migrations(conn)?;

    info!(
        "event=store_reset module=store status=ok duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(())
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
