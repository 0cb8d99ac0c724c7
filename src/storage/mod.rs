//! Storage for exported calendar files.
//!
//! Saving an [`IcsArtifact`] is the "download" step of an export: the
//! rendered document is written under its suggested file name.
//!
//! ## Directory Structure
//!
//! ```text
//! data/
//! ├── config.toml
//! ├── campsites.geojson
//! └── exports/
//!     ├── rainier-base-camp-booking.ics
//!     └── deception-pass-booking.ics
//! ```

pub mod local;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::services::IcsArtifact;

// Re-export for convenience
pub use local::LocalExportDir;

/// Metadata about a saved export.
#[derive(Debug, Clone)]
pub struct SavedExport {
    /// Where the file ended up
    pub location: String,
    /// Bytes written
    pub bytes: usize,
    /// Timestamp of the write
    pub timestamp: DateTime<Utc>,
}

/// Trait for export storage backends.
#[async_trait]
pub trait ExportSink: Send + Sync {
    /// Save an artifact under its file name, replacing any previous copy.
    async fn save(&self, artifact: &IcsArtifact) -> Result<SavedExport>;
}
