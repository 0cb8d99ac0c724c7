// src/utils/date.rs

//! Date formatting helpers for display and calendar exports.

use chrono::NaiveDate;

use crate::models::MonthDay;

/// Short display form of a month-day, e.g. `05-01` → `May 1`.
pub fn format_window_date(date: MonthDay) -> String {
    date.reference_date().format("%b %-d").to_string()
}

/// Compact `YYYYMMDD` form used by calendar services.
pub fn format_date_compact(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}
