// src/models/mod.rs

//! Domain models for campcal.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod campsite;
mod config;
mod reservation;
mod window;

// Re-export all public types
pub use campsite::{Campsite, CampsiteRef, UNKNOWN_AGENCY};
pub use config::{ADVANCE_DAYS_LIMIT, BackendConfig, BookingConfig, Config, PathsConfig};
pub use reservation::ReservationDetails;
pub use window::{AvailabilityWindow, MonthDay, REFERENCE_YEAR};
