//! Derived 30-day calendar strip.
//!
//! # Responsibility
//! - Turn "today" plus the task-date set into the cells a frontend renders.
//!
//! # Invariants
//! - Exactly 30 consecutive cells, starting at `today`.
//! - Pure derivation: no state, no storage access.

use crate::dates::{day_month_label, format_iso};
use chrono::{Duration, NaiveDate};
use std::collections::HashSet;

/// Number of consecutive days shown by the strip.
pub const STRIP_DAYS: usize = 30;

/// One calendar cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    /// ISO date the cell stands for; handed back on click as the new filter.
    pub date: String,
    /// `D/M` display label, no zero padding.
    pub label: String,
    /// At least one task exists on this date.
    pub has_tasks: bool,
    /// This date is the active selected-date filter.
    pub selected: bool,
}

/// Derives the strip for `today`, flagging cells from the task-date set and
/// the current selection.
pub fn calendar_strip(
    today: NaiveDate,
    dates_with_tasks: &HashSet<String>,
    selected: Option<&str>,
) -> Vec<CalendarDay> {
    (0..STRIP_DAYS)
        .map(|offset| {
            let day = today + Duration::days(offset as i64);
            let date = format_iso(day);
            CalendarDay {
                label: day_month_label(day),
                has_tasks: dates_with_tasks.contains(&date),
                selected: selected == Some(date.as_str()),
                date,
            }
        })
        .collect()
}
