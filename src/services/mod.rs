//! Service layer for campcal.
//!
//! This module contains the business logic for:
//! - Booking-window resolution (`resolver`)
//! - Calendar exports (`export`)
//! - Campsite lookup and agency filtering (`CampsiteCatalog`)
//! - Reservation-detail lookups (`ReservationClient`)

mod catalog;
pub mod export;
mod reservations;
pub mod resolver;

pub use catalog::CampsiteCatalog;
pub use export::{
    BookingEventText, IcsArtifact, build_calendar_url, generate_window_ics, ics_file_name,
    season_range,
};
pub use reservations::{ReservationClient, parse_details};
pub use resolver::{ResolvedBookingEvent, resolve_booking_open_date};
