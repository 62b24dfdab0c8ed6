//! Shared date formatting and validation helpers.
//!
//! # Responsibility
//! - Convert between calendar dates and the ISO `YYYY-MM-DD` strings used
//!   everywhere in the data model.
//! - Provide the display format (`DD/MM/YYYY`) and calendar cell labels.
//!
//! # Invariants
//! - Validation is shape-only: `2025-02-30` passes. Calendar correctness is
//!   deliberately not checked.
//! - `format_display` never fails; non-ISO input is returned unchanged.

use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid ISO date regex"));

/// Formats a calendar date as zero-padded `YYYY-MM-DD`.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's local date as an ISO string.
pub fn today_local() -> String {
    format_iso(Local::now().date_naive())
}

/// Returns whether `value` has the `YYYY-MM-DD` shape.
///
/// Shape-only: digit counts and dashes, nothing else.
pub fn is_valid_iso_date(value: &str) -> bool {
    ISO_DATE_RE.is_match(value)
}

/// Converts `YYYY-MM-DD` to `DD/MM/YYYY` for human display.
///
/// Input that does not match the ISO shape is returned unchanged, so callers
/// can render whatever was persisted without a separate error path.
pub fn format_display(iso: &str) -> String {
    if !is_valid_iso_date(iso) {
        return iso.to_string();
    }
    let (year, rest) = iso.split_at(4);
    let (month, day) = rest[1..].split_at(2);
    format!("{}/{}/{}", &day[1..], month, year)
}

/// Calendar cell label: `D/M` without zero padding.
pub fn day_month_label(date: NaiveDate) -> String {
    format!("{}/{}", date.day(), date.month())
}

#[cfg(test)]
mod tests {
    use super::{day_month_label, format_display, format_iso, is_valid_iso_date};
    use chrono::NaiveDate;

    #[test]
    fn format_iso_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_iso(date), "2025-03-07");
    }

    #[test]
    fn display_swaps_day_and_year() {
        assert_eq!(format_display("2025-12-20"), "20/12/2025");
    }

    #[test]
    fn display_passes_non_iso_input_through() {
        assert_eq!(format_display("tomorrow"), "tomorrow");
        assert_eq!(format_display(""), "");
        assert_eq!(format_display("2025-1-2"), "2025-1-2");
    }

    #[test]
    fn validation_is_shape_only() {
        assert!(is_valid_iso_date("2025-02-30"));
        assert!(!is_valid_iso_date("2025-2-30"));
        assert!(!is_valid_iso_date("20250230"));
        assert!(!is_valid_iso_date(""));
    }

    #[test]
    fn cell_label_has_no_padding() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(day_month_label(date), "7/3");
    }
}
