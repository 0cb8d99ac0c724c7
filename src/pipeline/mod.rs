//! Pipeline entry points for campcal commands.
//!
//! - `run_agencies` / `run_list` / `run_show`: browse campsites and windows
//! - `run_url` / `run_export`: calendar exports
//! - `run_details`: reservation-date lookups
//! - `run_validate`: configuration and data checks

pub mod browse;
pub mod details;
pub mod export;
pub mod validate;

pub use browse::{WindowSummary, run_agencies, run_list, run_show, upcoming_windows};
pub use details::run_details;
pub use export::{run_export, run_url};
pub use validate::run_validate;
