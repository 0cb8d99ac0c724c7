// src/services/export.rs

//! Calendar exports for booking-open dates.
//!
//! Two formats share the same title and description text:
//! - a calendar-service template URL ([`build_calendar_url`])
//! - an iCalendar whole-day event ([`generate_window_ics`])

use chrono::NaiveDate;

use crate::models::{AvailabilityWindow, CampsiteRef};
use crate::services::resolver::ResolvedBookingEvent;
use crate::utils::date::{format_date_compact, format_window_date};
use crate::utils::ical::{escape_text, to_document};
use crate::utils::slugify;
use crate::utils::url::encode_component;

/// Calendar-service template endpoint.
pub const CALENDAR_RENDER_URL: &str = "https://www.google.com/calendar/render";

/// A rendered `.ics` file ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcsArtifact {
    /// Suggested file name, `<slug>-booking.ics`
    pub file_name: String,

    /// CRLF-terminated iCalendar document
    pub content: String,
}

/// Title, description and dates shared by both export formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingEventText {
    pub title: String,
    pub details: String,
    pub event: ResolvedBookingEvent,
}

impl BookingEventText {
    /// Derive the export text for `window` at `campsite`, resolved against `today`.
    pub fn new(campsite: CampsiteRef<'_>, window: &AvailabilityWindow, today: NaiveDate) -> Self {
        let event = ResolvedBookingEvent::resolve(window, today);
        let advance = window.advance_days();
        let range = season_range(window);

        let (title, summary_line) = if window.has_advance() {
            (
                format!("Book {} (reservations open)", campsite.name),
                format!("Reservations open today — {advance} days before the {range} season."),
            )
        } else {
            (
                format!("{} season opens", campsite.name),
                format!("{} opens for the {range} season.", campsite.name),
            )
        };

        let info_line = campsite
            .official_url
            .map(|url| format!("Info: {url}"))
            .unwrap_or_default();

        let details = [summary_line, info_line]
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            title,
            details,
            event,
        }
    }
}

/// `"year-round"` or `"May 1 – Oct 31"`.
pub fn season_range(window: &AvailabilityWindow) -> String {
    if window.is_year_round() {
        "year-round".to_string()
    } else {
        format!(
            "{} – {}",
            format_window_date(window.start),
            format_window_date(window.end)
        )
    }
}

/// Calendar-service URL that pre-fills an all-day booking-open event.
pub fn build_calendar_url(
    campsite: CampsiteRef<'_>,
    window: &AvailabilityWindow,
    today: NaiveDate,
) -> String {
    let text = BookingEventText::new(campsite, window, today);
    format!(
        "{CALENDAR_RENDER_URL}?action=TEMPLATE&text={}&dates={}/{}&details={}",
        encode_component(&text.title),
        format_date_compact(text.event.booking_open),
        format_date_compact(text.event.next_day),
        encode_component(&text.details),
    )
}

/// iCalendar document for the booking-open date, with its download file name.
pub fn generate_window_ics(
    campsite: CampsiteRef<'_>,
    window: &AvailabilityWindow,
    today: NaiveDate,
) -> IcsArtifact {
    let text = BookingEventText::new(campsite, window, today);

    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!(
            "DTSTART;VALUE=DATE:{}",
            format_date_compact(text.event.booking_open)
        ),
        format!(
            "DTEND;VALUE=DATE:{}",
            format_date_compact(text.event.next_day)
        ),
        format!("SUMMARY:{}", escape_text(&text.title)),
        format!("DESCRIPTION:{}", escape_text(&text.details)),
    ];
    if let Some(url) = campsite.official_url {
        lines.push(format!("URL:{url}"));
    }
    lines.push("END:VEVENT".to_string());
    lines.push("END:VCALENDAR".to_string());

    IcsArtifact {
        file_name: ics_file_name(campsite.name),
        content: to_document(lines),
    }
}

/// `<name lowercased, hyphenated>-booking.ics`
pub fn ics_file_name(name: &str) -> String {
    format!("{}-booking.ics", slugify(name))
}
