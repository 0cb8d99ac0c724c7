//! Utility functions and helpers.

pub mod date;
pub mod http;
pub mod ical;
pub mod url;

use chrono::{Local, NaiveDate};

/// Lowercase a display name and replace whitespace runs with hyphens.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// The current local calendar date.
///
/// Read once per top-level operation and passed down from there.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
