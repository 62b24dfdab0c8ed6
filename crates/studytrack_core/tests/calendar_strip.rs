use chrono::NaiveDate;
use std::collections::HashSet;
use studytrack_core::{calendar_strip, STRIP_DAYS};

#[test]
fn strip_covers_thirty_days_starting_today() {
    let today = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
    let strip = calendar_strip(today, &HashSet::new(), None);

    assert_eq!(strip.len(), STRIP_DAYS);
    assert_eq!(strip[0].date, "2025-12-01");
    assert_eq!(strip[29].date, "2025-12-30");
    assert!(strip.iter().all(|day| !day.has_tasks && !day.selected));
}

#[test]
fn strip_rolls_over_month_and_year_boundaries() {
    let today = NaiveDate::from_ymd_opt(2025, 12, 20).unwrap();
    let strip = calendar_strip(today, &HashSet::new(), None);

    assert_eq!(strip[11].date, "2025-12-31");
    assert_eq!(strip[12].date, "2026-01-01");
    assert_eq!(strip[12].label, "1/1");
}

#[test]
fn labels_use_day_slash_month_without_padding() {
    let today = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap();
    let strip = calendar_strip(today, &HashSet::new(), None);
    assert_eq!(strip[0].label, "3/2");
}

#[test]
fn cells_are_flagged_from_the_task_date_set() {
    let today = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
    let mut dates = HashSet::new();
    dates.insert("2025-12-05".to_string());
    // Outside the window; must not flag anything.
    dates.insert("2026-06-01".to_string());

    let strip = calendar_strip(today, &dates, None);
    let flagged: Vec<_> = strip.iter().filter(|day| day.has_tasks).collect();
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].date, "2025-12-05");
}

#[test]
fn the_selected_cell_is_marked() {
    let today = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
    let strip = calendar_strip(today, &HashSet::new(), Some("2025-12-03"));

    assert!(strip[2].selected);
    assert_eq!(strip.iter().filter(|day| day.selected).count(), 1);
}
