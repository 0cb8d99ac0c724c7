// src/models/reservation.rs

//! Reservation details returned by the optional backend.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Body of `GET /campsite/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReservationDetails {
    /// ISO-8601 dates or timestamps, as sent by the backend
    #[serde(default)]
    pub reservation_dates: Vec<String>,
}

impl ReservationDetails {
    /// All dates that parse, in the order received.
    pub fn parsed_dates(&self) -> Vec<NaiveDate> {
        self.reservation_dates
            .iter()
            .filter_map(|raw| {
                let parsed = parse_iso_date(raw);
                if parsed.is_none() {
                    log::debug!("Skipping unparseable reservation date '{}'", raw);
                }
                parsed
            })
            .collect()
    }

    /// Dates on or after `today`, sorted and deduplicated.
    pub fn upcoming(&self, today: NaiveDate) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self
            .parsed_dates()
            .into_iter()
            .filter(|d| *d >= today)
            .collect();
        dates.sort();
        dates.dedup();
        dates
    }
}

/// Parse a date or the date part of an ISO-8601 timestamp.
fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}
