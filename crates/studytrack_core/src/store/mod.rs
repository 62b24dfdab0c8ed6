//! Use-case stores over the key-value persistence boundary.
//!
//! # Responsibility
//! - Own the in-memory task list and exam roster.
//! - Write every mutation through to storage before returning.
//! - Notify the registered change listener after successful mutations.
//!
//! # Invariants
//! - Storage holds no independent copy: it is read once at load and mirrored
//!   on every write.
//! - Listeners are never invoked for silent no-ops or failed validations.

use crate::storage::{Storage, StorageError, StorageResult};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod exam_store;
pub mod task_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence failure raised by a store mutation.
#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode store blob: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Callback invoked (with no arguments) after every successful mutation.
/// Consumers re-pull full state; the stores never push diffs.
pub type ChangeListener<'a> = Box<dyn Fn() + 'a>;

/// Reads and decodes a JSON list from storage.
///
/// Absent and malformed blobs both decode to `None`; malformed data is logged
/// and otherwise ignored (best-effort load policy). Transport failures still
/// propagate.
pub(crate) fn read_list<T: DeserializeOwned>(
    storage: &dyn Storage,
    key: &str,
) -> StorageResult<Option<Vec<T>>> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(items) => Ok(Some(items)),
        Err(err) => {
            warn!("event=store_load module=store status=degraded key={key} error={err}");
            Ok(None)
        }
    }
}

/// Encodes and writes a JSON list through to storage.
pub(crate) fn write_list<T: Serialize>(
    storage: &dyn Storage,
    key: &str,
    items: &[T],
) -> StoreResult<()> {
    let raw = serde_json::to_string(items)?;
    storage.set(key, &raw)?;
    Ok(())
}
