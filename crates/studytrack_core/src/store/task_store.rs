//! Task list store with date-based filtering.
//!
//! # Responsibility
//! - Own the task list and the selected-date filter.
//! - Provide create/toggle/delete/edit mutations and the derived views the
//!   calendar and list render from.
//!
//! # Invariants
//! - Invalid input (empty name or date) is a silent no-op, never an error.
//! - Insertion order is preserved; filtering never reorders.
//! - Every successful mutation persists before the listener fires.

use crate::model::task::{Task, TaskDraft, TaskId};
use crate::storage::{Storage, TASKS_KEY};
use crate::store::{read_list, write_list, ChangeListener, StoreResult};
use chrono::Utc;
use log::info;
use std::collections::HashSet;

/// In-memory task list mirrored to the `"tasks"` storage key.
pub struct TaskStore<'s> {
    storage: &'s dyn Storage,
    tasks: Vec<Task>,
    selected_date: Option<String>,
    on_change: Option<ChangeListener<'s>>,
}

impl<'s> TaskStore<'s> {
    /// Loads the task list from storage.
    ///
    /// An absent or malformed blob degrades silently to an empty list;
    /// nothing is written back until the first mutation.
    pub fn load(storage: &'s dyn Storage) -> StoreResult<Self> {
        let tasks = read_list(storage, TASKS_KEY)?.unwrap_or_default();
        info!(
            "event=task_load module=task_store status=ok count={}",
            tasks.len()
        );
        Ok(Self {
            storage,
            tasks,
            selected_date: None,
            on_change: None,
        })
    }

    /// Registers the callback fired after every successful mutation.
    pub fn set_on_change(&mut self, listener: ChangeListener<'s>) {
        self.on_change = Some(listener);
    }

    /// Creates a task with `done = false` and returns its id.
    ///
    /// Returns `Ok(None)` without persisting or notifying when the trimmed
    /// name is empty or the date is empty: invalid form input is ignored, not
    /// reported.
    pub fn create(&mut self, name: &str, date: &str) -> StoreResult<Option<TaskId>> {
        let name = name.trim();
        if name.is_empty() || date.is_empty() {
            return Ok(None);
        }

        let id = self.next_task_id();
        self.tasks.push(Task::new(id, name, date));
        self.persist()?;
        info!("event=task_create module=task_store status=ok id={id}");
        self.notify();
        Ok(Some(id))
    }

    /// Flips the completion flag of the task with `id`.
    ///
    /// Returns `Ok(false)` (no-op) when the id is unknown.
    pub fn toggle_done(&mut self, id: TaskId) -> StoreResult<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };
        task.toggle_done();
        self.persist()?;
        self.notify();
        Ok(true)
    }

    /// Removes the task with `id`. Returns `Ok(false)` when unknown.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        self.persist()?;
        info!("event=task_delete module=task_store status=ok id={id}");
        self.notify();
        Ok(true)
    }

    /// Starts editing: returns the task's fields for form prefill and removes
    /// the task from the list.
    ///
    /// Edit is destructive by design; the caller recreates the task via
    /// `create` once the form is resubmitted. Returns `Ok(None)` when the id
    /// is unknown.
    pub fn begin_edit(&mut self, id: TaskId) -> StoreResult<Option<TaskDraft>> {
        let Some(position) = self.tasks.iter().position(|task| task.id == id) else {
            return Ok(None);
        };
        let task = self.tasks.remove(position);
        self.persist()?;
        self.notify();
        Ok(Some(TaskDraft {
            name: task.name,
            date: task.date,
        }))
    }

    /// Sets the selected-date filter (`None` shows all tasks) and notifies so
    /// the consumer re-renders. The filter is session state, never persisted.
    pub fn select_date(&mut self, date: Option<String>) {
        self.selected_date = date;
        self.notify();
    }

    /// Current selected-date filter.
    pub fn selected_date(&self) -> Option<&str> {
        self.selected_date.as_deref()
    }

    /// Tasks visible under `selected`: all of them when `None`, else only
    /// those whose date matches, in insertion order.
    pub fn visible_tasks(&self, selected: Option<&str>) -> Vec<&Task> {
        match selected {
            None => self.tasks.iter().collect(),
            Some(date) => self.tasks.iter().filter(|task| task.date == date).collect(),
        }
    }

    /// Tasks visible under the store's own selected-date filter.
    pub fn visible(&self) -> Vec<&Task> {
        self.visible_tasks(self.selected_date.as_deref())
    }

    /// Every date that has at least one task, used to flag calendar cells.
    /// Dates outside the 30-day window count too; the strip just ignores them.
    pub fn dates_with_tasks(&self) -> HashSet<String> {
        self.tasks.iter().map(|task| task.date.clone()).collect()
    }

    /// Timestamp-derived id: epoch milliseconds, bumped past the current
    /// maximum when two creations land in the same millisecond.
    fn next_task_id(&self) -> TaskId {
        let now_ms = Utc::now().timestamp_millis();
        let max_existing = self.tasks.iter().map(|task| task.id).max().unwrap_or(0);
        now_ms.max(max_existing + 1)
    }

    fn persist(&self) -> StoreResult<()> {
        write_list(self.storage, TASKS_KEY, &self.tasks)
    }

    fn notify(&self) {
        if let Some(listener) = &self.on_change {
            listener();
        }
    }
}
