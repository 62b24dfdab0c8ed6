//! Task domain model.
//!
//! # Responsibility
//! - Define the task record persisted under the `"tasks"` key.
//! - Provide the draft shape handed back to forms on edit.
//!
//! # Invariants
//! - `name` is non-empty and trimmed at creation time (enforced by the store).
//! - `date` is an ISO `YYYY-MM-DD` string.
//! - `done` starts as `false`.

use serde::{Deserialize, Serialize};

/// Identifier for a task, derived from the creation timestamp
/// (epoch milliseconds).
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = i64;

/// A single to-do entry shown in the filtered task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Timestamp-derived id, unique within one store.
    pub id: TaskId,
    /// Trimmed, non-empty display name.
    pub name: String,
    /// ISO `YYYY-MM-DD` date the task belongs to.
    pub date: String,
    /// Completion flag toggled from the list.
    pub done: bool,
}

impl Task {
    /// Creates a task with `done = false`.
    ///
    /// Input validation (non-empty name, non-empty date) is the store's job;
    /// this constructor only assembles the record.
    pub fn new(id: TaskId, name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            date: date.into(),
            done: false,
        }
    }

    /// Flips the completion flag.
    pub fn toggle_done(&mut self) {
        self.done = !self.done;
    }
}

/// Field snapshot returned by `begin_edit` for repopulating an external form.
///
/// Edit is destructive: the task is removed from the store and its fields are
/// handed back here instead of being mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub name: String,
    pub date: String,
}
