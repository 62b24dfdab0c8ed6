//! Exam roster store with index-based identity.
//!
//! # Responsibility
//! - Own the exam roster and its seed fallback.
//! - Provide upsert/delete by selector index and the prune pass.
//!
//! # Invariants
//! - Roster order is storage order and defines the selector index space.
//! - Index identity assumes a single user mutating synchronously per click;
//!   a stale index between "populate selector" and "submit" edits the wrong
//!   entry. Accepted constraint, not a defect to fix here.
//! - `prune_expired` always persists, even when nothing was removed.

use crate::dates::is_valid_iso_date;
use crate::model::exam::{default_exams, Exam};
use crate::storage::{Storage, EXAMS_KEY};
use crate::store::{read_list, write_list, ChangeListener, StoreError, StoreResult};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ExamStoreResult<T> = Result<T, ExamStoreError>;

/// User-facing failure of an exam mutation. Unlike the task side, these are
/// reported so the frontend can render a message.
#[derive(Debug)]
pub enum ExamStoreError {
    /// Subject or date field was empty on save.
    EmptySubjectOrDate,
    /// Delete requested without a (valid) selection.
    NoExamSelected,
    /// Persistence failure underneath.
    Store(StoreError),
}

impl Display for ExamStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySubjectOrDate => write!(f, "subject and date are both required"),
            Self::NoExamSelected => write!(f, "no exam selected"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ExamStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptySubjectOrDate | Self::NoExamSelected => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ExamStoreError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// In-memory exam roster mirrored to the `"exams"` storage key.
pub struct ExamStore<'s> {
    storage: &'s dyn Storage,
    exams: Vec<Exam>,
    on_change: Option<ChangeListener<'s>>,
}

impl<'s> ExamStore<'s> {
    /// Loads the roster from storage.
    ///
    /// An absent or malformed blob falls back to the default seed, which is
    /// written back immediately so the next load reads it as regular data.
    pub fn load(storage: &'s dyn Storage) -> StoreResult<Self> {
        let (exams, seeded) = match read_list(storage, EXAMS_KEY)? {
            Some(exams) => (exams, false),
            None => (default_exams(), true),
        };
        let store = Self {
            storage,
            exams,
            on_change: None,
        };
        if seeded {
            store.persist()?;
        }
        info!(
            "event=exam_load module=exam_store status=ok count={} seeded={}",
            store.exams.len(),
            seeded
        );
        Ok(store)
    }

    /// Registers the callback fired after every successful mutation.
    pub fn set_on_change(&mut self, listener: ChangeListener<'s>) {
        self.on_change = Some(listener);
    }

    /// Saves an exam: an in-range `index` overwrites that entry, `None` or an
    /// out-of-range index appends a new one.
    ///
    /// # Errors
    /// - `EmptySubjectOrDate` when either field is empty. This is the one
    ///   mutation with explicit user-facing validation.
    pub fn upsert_by_index(
        &mut self,
        index: Option<usize>,
        subject: &str,
        date: &str,
    ) -> ExamStoreResult<()> {
        if subject.is_empty() || date.is_empty() {
            return Err(ExamStoreError::EmptySubjectOrDate);
        }

        match index.and_then(|i| self.exams.get_mut(i)) {
            Some(exam) => {
                exam.subject = subject.to_string();
                exam.date = date.to_string();
            }
            None => self.exams.push(Exam::new(subject, date)),
        }

        self.persist()?;
        info!("event=exam_upsert module=exam_store status=ok count={}", self.exams.len());
        self.notify();
        Ok(())
    }

    /// Removes the exam at `index`.
    ///
    /// # Errors
    /// - `NoExamSelected` when `index` is `None` or out of range. Obtaining
    ///   delete confirmation from the user is the frontend's job.
    pub fn delete_by_index(&mut self, index: Option<usize>) -> ExamStoreResult<()> {
        let index = index
            .filter(|&i| i < self.exams.len())
            .ok_or(ExamStoreError::NoExamSelected)?;

        self.exams.remove(index);
        self.persist()?;
        info!("event=exam_delete module=exam_store status=ok index={index}");
        self.notify();
        Ok(())
    }

    /// Removes every exam whose date is a well-formed ISO string strictly
    /// earlier than `today`, and returns how many were removed.
    ///
    /// Malformed or empty dates never expire. ISO strings compare correctly
    /// as plain strings, so no date parsing is needed. The write-through runs
    /// even when nothing was removed; the second of two identical calls
    /// removes zero.
    pub fn prune_expired(&mut self, today: &str) -> StoreResult<usize> {
        let before = self.exams.len();
        self.exams
            .retain(|exam| !is_valid_iso_date(&exam.date) || exam.date.as_str() >= today);
        let removed = before - self.exams.len();

        self.persist()?;
        if removed > 0 {
            info!("event=exam_prune module=exam_store status=ok removed={removed}");
            self.notify();
        }
        Ok(removed)
    }

    /// The roster in storage order. Positions double as selector indexes.
    pub fn all(&self) -> &[Exam] {
        &self.exams
    }

    fn persist(&self) -> StoreResult<()> {
        write_list(self.storage, EXAMS_KEY, &self.exams)
    }

    fn notify(&self) {
        if let Some(listener) = &self.on_change {
            listener();
        }
    }
}
