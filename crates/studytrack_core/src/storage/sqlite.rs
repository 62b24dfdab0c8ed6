//! SQLite-backed key-value storage.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections with migrations applied.
//! - Implement the `Storage` trait over the `kv_entries` table.
//!
//! # Invariants
//! - Returned stores have migrations fully applied before first use.
//! - `set` is an upsert; a key never holds more than one row.

use super::migrations::apply_migrations;
use super::{Storage, StorageResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

/// Key-value store persisted in a single SQLite file (or memory).
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens (creating if needed) a storage file and applies pending
    /// migrations.
    ///
    /// # Side effects
    /// - Emits `storage_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let started_at = Instant::now();
        info!("event=storage_open module=storage status=start mode=file");
        let conn = Connection::open(path)?;
        Self::bootstrap(conn, "file", started_at)
    }

    /// Opens an in-memory storage, mainly for tests and ephemeral runs.
    pub fn open_in_memory() -> StorageResult<Self> {
        let started_at = Instant::now();
        info!("event=storage_open module=storage status=start mode=memory");
        let conn = Connection::open_in_memory()?;
        Self::bootstrap(conn, "memory", started_at)
    }

    fn bootstrap(mut conn: Connection, mode: &str, started_at: Instant) -> StorageResult<Self> {
        conn.busy_timeout(Duration::from_secs(5))?;
        match apply_migrations(&mut conn) {
            Ok(()) => {
                info!(
                    "event=storage_open module=storage status=ok mode={} duration_ms={}",
                    mode,
                    started_at.elapsed().as_millis()
                );
                Ok(Self { conn })
            }
            Err(err) => {
                error!(
                    "event=storage_open module=storage status=error mode={} duration_ms={} error={}",
                    mode,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

impl Storage for SqliteStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }
}
