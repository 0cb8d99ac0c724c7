// src/services/resolver.rs

//! Booking-window resolution.
//!
//! Turns a recurring [`AvailabilityWindow`] and a concrete "today" into the
//! next date on which reservations open.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::AvailabilityWindow;

/// The next booking-open date of a window as a whole-day event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedBookingEvent {
    /// Day reservations open
    pub booking_open: NaiveDate,

    /// Exclusive end of the all-day event
    pub next_day: NaiveDate,
}

impl ResolvedBookingEvent {
    /// Resolve `window` relative to `today`.
    pub fn resolve(window: &AvailabilityWindow, today: NaiveDate) -> Self {
        let booking_open = resolve_booking_open_date(window, today);
        Self {
            booking_open,
            next_day: booking_open.succ_opt().unwrap_or(booking_open),
        }
    }

    /// Whole days from `today` until booking opens (zero when it opens today).
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.booking_open - today).num_days()
    }
}

/// Next date, on or after `today`, on which reservations open for `window`.
///
/// Candidates are checked for the current and the following year, in order;
/// the first one not before `today` wins.
pub fn resolve_booking_open_date(window: &AvailabilityWindow, today: NaiveDate) -> NaiveDate {
    let advance = Days::new(u64::from(window.advance_days()));

    for year in today.year()..=today.year() + 1 {
        if let Some(candidate) = candidate_for_year(window, year, advance) {
            if candidate >= today {
                return candidate;
            }
        }
    }

    let fallback = candidate_for_year(window, today.year() + 1, advance).unwrap_or(NaiveDate::MIN);
    log::warn!(
        "Booking window {}..{} with {} advance days has no open date on or after {}; using {}",
        window.start,
        window.end,
        window.advance_days(),
        today,
        fallback
    );
    fallback
}

/// `None` when the advance reaches past the earliest representable date.
fn candidate_for_year(window: &AvailabilityWindow, year: i32, advance: Days) -> Option<NaiveDate> {
    window.start.in_year(year).checked_sub_days(advance)
}
