// src/pipeline/export.rs

//! Calendar export commands.

use chrono::NaiveDate;

use crate::error::Result;
use crate::services::{CampsiteCatalog, build_calendar_url, generate_window_ics};
use crate::storage::{ExportSink, SavedExport};

/// Calendar-service URL for one window of a campsite.
pub fn run_url(
    catalog: &CampsiteCatalog,
    key: &str,
    window_index: usize,
    today: NaiveDate,
) -> Result<String> {
    let site = catalog.find(key)?;
    let window = site.window(window_index)?;
    Ok(build_calendar_url(site.export_ref(), window, today))
}

/// Render and save the `.ics` file for one window of a campsite.
pub async fn run_export(
    catalog: &CampsiteCatalog,
    sink: &dyn ExportSink,
    key: &str,
    window_index: usize,
    today: NaiveDate,
) -> Result<SavedExport> {
    let site = catalog.find(key)?;
    let window = site.window(window_index)?;

    let artifact = generate_window_ics(site.export_ref(), window, today);
    let saved = sink.save(&artifact).await?;

    log::info!(
        "Saved {} booking reminder to {} ({} bytes) at {}",
        site.name,
        saved.location,
        saved.bytes,
        saved.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    );
    Ok(saved)
}
