//! Core domain logic for studytrack: a task list with date-based filtering
//! and an exam roster with automatic pruning of past entries.
//!
//! Frontends (the CLI, or any other coordinator) talk to [`TaskStore`] and
//! [`ExamStore`], register an `on_change` callback, and re-pull the derived
//! views after each notification. Persistence is a string key-value store
//! behind the [`Storage`] trait.

pub mod calendar;
pub mod dates;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;

pub use calendar::{calendar_strip, CalendarDay, STRIP_DAYS};
pub use logging::{default_log_level, init_logging};
pub use model::exam::{default_exams, Exam, SUBJECTS};
pub use model::task::{Task, TaskDraft, TaskId};
pub use storage::{MemoryStorage, SqliteStorage, Storage, StorageError, StorageResult};
pub use store::exam_store::{ExamStore, ExamStoreError, ExamStoreResult};
pub use store::task_store::TaskStore;
pub use store::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
