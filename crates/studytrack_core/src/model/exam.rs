//! Exam domain model.
//!
//! # Responsibility
//! - Define the exam record persisted under the `"exams"` key.
//! - Publish the fixed subject roster and the default seed.
//!
//! # Invariants
//! - Exams have no id; the roster index is the identity used by edit/delete.
//! - `subject` values come from `SUBJECTS`; membership is enforced by the
//!   selector UI, the store only rejects empty input.

use serde::{Deserialize, Serialize};

/// Subjects offered by the exam selector. Free-text subjects are not part of
/// the data model.
pub const SUBJECTS: &[&str] = &[
    "פרקי מכונות",
    "דינמיקה",
    "תרמודינמיקה",
    "מתמטיקה",
    "פיזיקה",
    "כימיה",
];

/// One roster entry: a subject paired with its exam date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    /// Subject name from `SUBJECTS`.
    pub subject: String,
    /// ISO `YYYY-MM-DD` date. Malformed values are tolerated and treated as
    /// never expiring by the prune pass.
    pub date: String,
}

impl Exam {
    pub fn new(subject: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            date: date.into(),
        }
    }
}

/// Seed roster used when no persisted exams exist (or the blob is malformed).
///
/// Written back to storage immediately after the fallback is taken, so the
/// next load reads it as regular data.
pub fn default_exams() -> Vec<Exam> {
    vec![
        Exam::new("פרקי מכונות", "2025-12-20"),
        Exam::new("דינמיקה", "2025-12-22"),
        Exam::new("תרמודינמיקה", "2025-12-25"),
    ]
}

#[cfg(test)]
mod tests {
    use super::{default_exams, SUBJECTS};

    #[test]
    fn seed_has_three_entries_with_known_subjects() {
        let seed = default_exams();
        assert_eq!(seed.len(), 3);
        for exam in &seed {
            assert!(SUBJECTS.contains(&exam.subject.as_str()));
        }
    }
}
