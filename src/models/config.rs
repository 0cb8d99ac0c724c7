//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Upper bound on `bookingAdvanceDays` accepted when loading data.
///
/// Windows within the bound can still resolve to the fallback date, which
/// may lie before "today" (e.g. a `01-15` start with 30 days resolved on
/// Dec 31).
pub const ADVANCE_DAYS_LIMIT: u32 = 365;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Reservation backend settings
    #[serde(default)]
    pub backend: BackendConfig,

    /// Data and export locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Booking-window rules
    #[serde(default)]
    pub booking: BookingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.backend.user_agent.trim().is_empty() {
            return Err(AppError::validation("backend.user_agent is empty"));
        }
        if self.backend.timeout_secs == 0 {
            return Err(AppError::validation("backend.timeout_secs must be > 0"));
        }
        if self.backend.max_concurrent == 0 {
            return Err(AppError::validation("backend.max_concurrent must be > 0"));
        }
        if let Some(base) = self.backend.base_url.as_deref() {
            url::Url::parse(base)?;
        }
        if self.paths.campsites_file.trim().is_empty() {
            return Err(AppError::validation("paths.campsites_file is empty"));
        }
        if self.booking.max_advance_days == 0
            || self.booking.max_advance_days > ADVANCE_DAYS_LIMIT
        {
            return Err(AppError::validation(format!(
                "booking.max_advance_days must be within 1..={ADVANCE_DAYS_LIMIT}"
            )));
        }
        Ok(())
    }

    /// Campsite data file, resolved against the data directory.
    pub fn campsites_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.paths.campsites_file)
    }

    /// Export directory, resolved against the data directory.
    pub fn export_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.paths.export_dir)
    }
}

/// Reservation backend client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the reservation-detail service; lookups are disabled when unset
    #[serde(default)]
    pub base_url: Option<String>,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Maximum concurrent requests
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_concurrent: defaults::max_concurrent(),
        }
    }
}

/// File locations, relative to the data directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// GeoJSON campsite collection
    #[serde(default = "defaults::campsites_file")]
    pub campsites_file: String,

    /// Where `.ics` files are saved
    #[serde(default = "defaults::export_dir")]
    pub export_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            campsites_file: defaults::campsites_file(),
            export_dir: defaults::export_dir(),
        }
    }
}

/// Booking-window ingestion rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Upper bound on `bookingAdvanceDays` accepted at load time
    #[serde(default = "defaults::max_advance_days")]
    pub max_advance_days: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            max_advance_days: defaults::max_advance_days(),
        }
    }
}

mod defaults {
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; campcal/0.1)".into()
    }
    pub fn timeout() -> u64 {
        10
    }
    pub fn max_concurrent() -> usize {
        4
    }

    pub fn campsites_file() -> String {
        "campsites.geojson".into()
    }
    pub fn export_dir() -> String {
        "exports".into()
    }

    pub fn max_advance_days() -> u32 {
        super::ADVANCE_DAYS_LIMIT
    }
}
