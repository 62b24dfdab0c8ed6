//! Domain records for the task list and the exam roster.
//!
//! # Responsibility
//! - Define the canonical data structures persisted by the stores.
//! - Keep wire field names stable against the persisted JSON blobs.
//!
//! # Invariants
//! - `Task` is identified by a process-unique integer id.
//! - `Exam` carries no id; its position in the roster is its identity.

pub mod exam;
pub mod task;
