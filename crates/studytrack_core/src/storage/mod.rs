//! String key-value persistence boundary.
//!
//! # Responsibility
//! - Define the storage contract the stores write through.
//! - Keep SQLite details behind the trait so tests can run in memory.
//!
//! # Invariants
//! - Values are opaque strings; JSON encoding/decoding belongs to the stores.
//! - `set` fully replaces the previous value for a key.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod migrations;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport-level persistence failure.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Write-through key-value store shared by both stores.
///
/// Mirrors the browser localStorage contract the data model was designed
/// against: string keys, string values, last write wins.
pub trait Storage {
    /// Returns the stored value for `key`, or `None` when absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Key holding the JSON-encoded task list.
pub const TASKS_KEY: &str = "tasks";
/// Key holding the JSON-encoded exam roster.
pub const EXAMS_KEY: &str = "exams";
/// Key holding the UI theme (`"dark"` / `"light"`). Owned by the frontend;
/// listed here so all persisted keys live in one place.
pub const THEME_KEY: &str = "theme";
