// src/models/window.rs

//! Recurring seasonal availability windows.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Leap year used to validate and display month-day values.
///
/// Never used when resolving real dates.
pub const REFERENCE_YEAR: i32 = 2000;

/// A calendar month and day without a year, written `MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Create a month-day, checking it exists in a leap year.
    pub fn new(month: u32, day: u32) -> Result<Self> {
        if NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day).is_none() {
            return Err(AppError::month_day(
                format!("{month:02}-{day:02}"),
                "no such calendar day",
            ));
        }
        Ok(Self { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// The concrete date of this month-day in `year`.
    ///
    /// `02-29` rolls over to `03-01` in non-leap years.
    ///
    /// # Panics
    ///
    /// Only if `year` lies outside chrono's supported range.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .expect("month-day is validated against a leap year")
    }

    /// This month-day placed in the reference year, for display only.
    pub fn reference_date(&self) -> NaiveDate {
        self.in_year(REFERENCE_YEAR)
    }
}

impl FromStr for MonthDay {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (month, day) = trimmed
            .split_once('-')
            .ok_or_else(|| AppError::month_day(s, "expected MM-DD"))?;

        let month: u32 = month
            .parse()
            .map_err(|e| AppError::month_day(s, format!("bad month: {e}")))?;
        let day: u32 = day
            .parse()
            .map_err(|e| AppError::month_day(s, format!("bad day: {e}")))?;

        Self::new(month, day).map_err(|_| AppError::month_day(s, "no such calendar day"))
    }
}

impl TryFrom<String> for MonthDay {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<MonthDay> for String {
    fn from(value: MonthDay) -> Self {
        value.to_string()
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// A recurring annual season during which a campsite is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityWindow {
    /// First day of the season
    pub start: MonthDay,

    /// Last day of the season
    pub end: MonthDay,

    /// Days before `start` that reservations open
    #[serde(
        default,
        alias = "booking_advance_days",
        skip_serializing_if = "Option::is_none"
    )]
    pub booking_advance_days: Option<u32>,
}

impl AvailabilityWindow {
    /// Build a window from `MM-DD` strings.
    pub fn parse(start: &str, end: &str, booking_advance_days: Option<u32>) -> Result<Self> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
            booking_advance_days,
        })
    }

    /// Advance days, with absent treated as zero.
    pub fn advance_days(&self) -> u32 {
        self.booking_advance_days.unwrap_or(0)
    }

    pub fn has_advance(&self) -> bool {
        self.advance_days() > 0
    }

    /// True for the `01-01` .. `12-31` window.
    pub fn is_year_round(&self) -> bool {
        self.start.month == 1 && self.start.day == 1 && self.end.month == 12 && self.end.day == 31
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month_day() {
        let md: MonthDay = "05-01".parse().unwrap();
        assert_eq!(md.month(), 5);
        assert_eq!(md.day(), 1);
        assert_eq!(md.to_string(), "05-01");
    }

    #[test]
    fn test_parse_unpadded() {
        let md: MonthDay = "9-3".parse().unwrap();
        assert_eq!(md.to_string(), "09-03");
    }

    #[test]
    fn test_rejects_malformed() {
        assert!("".parse::<MonthDay>().is_err());
        assert!("0501".parse::<MonthDay>().is_err());
        assert!("13-01".parse::<MonthDay>().is_err());
        assert!("04-31".parse::<MonthDay>().is_err());
        assert!("ab-cd".parse::<MonthDay>().is_err());
    }

    #[test]
    fn test_leap_day_rolls_over() {
        let md: MonthDay = "02-29".parse().unwrap();
        assert_eq!(md.in_year(2024), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(md.in_year(2026), NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    }

    #[test]
    fn test_window_deserialize() {
        let json = r#"{"start":"05-15","end":"09-30","bookingAdvanceDays":120}"#;
        let window: AvailabilityWindow = serde_json::from_str(json).unwrap();
        assert_eq!(window.advance_days(), 120);
        assert!(window.has_advance());

        let snake = r#"{"start":"05-15","end":"09-30","booking_advance_days":0}"#;
        let window: AvailabilityWindow = serde_json::from_str(snake).unwrap();
        assert!(!window.has_advance());
    }

    #[test]
    fn test_window_deserialize_rejects_bad_date() {
        let json = r#"{"start":"02-30","end":"09-30"}"#;
        assert!(serde_json::from_str::<AvailabilityWindow>(json).is_err());
    }

    #[test]
    fn test_year_round() {
        let window = AvailabilityWindow::parse("01-01", "12-31", None).unwrap();
        assert!(window.is_year_round());
        assert_eq!(window.advance_days(), 0);

        let window = AvailabilityWindow::parse("01-01", "12-30", None).unwrap();
        assert!(!window.is_year_round());
    }
}
