//! SQLite Key-Value Store
//!
//! Native snapshot storage: a single `kv` table keyed like localStorage.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use super::traits::KeyValueStore;
use crate::error::LedgerResult;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a database file and run migrations
    pub fn open(path: impl AsRef<Path>) -> LedgerResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| crate::LedgerError::Storage(format!("Failed to create {}: {}", parent.display(), e)))?;
            }
        }
        let conn = Connection::open(path)?;
        log::info!("Snapshot database opened at {}", path.display());
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> LedgerResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> LedgerResult<Self> {
        run_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Unix seconds of the last write to `key`
    pub fn updated_at(&self, key: &str) -> LedgerResult<Option<i64>> {
        let ts = self
            .conn
            .query_row("SELECT updated_at FROM kv WHERE key = ?1", params![key], |row| row.get(0))
            .optional()?;
        Ok(ts)
    }
}

fn run_migrations(conn: &Connection) -> LedgerResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv (
            key         TEXT PRIMARY KEY,
            value       TEXT NOT NULL,
            updated_at  INTEGER NOT NULL
        )",
        [],
    )?;
    Ok(())
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, chrono::Utc::now().timestamp()],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> LedgerResult<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}
