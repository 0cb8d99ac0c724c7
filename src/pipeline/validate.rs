// src/pipeline/validate.rs

use std::path::Path;

use crate::config::load_all;
use crate::error::Result;

/// Validate configuration and campsite data using load_all.
pub fn run_validate(data_dir: &Path) -> Result<()> {
    log::info!("Validating {}...", data_dir.display());

    match load_all(data_dir) {
        Ok((config, catalog)) => {
            log::info!("✓ Config OK");
            log::info!(
                "    Backend: {}",
                config.backend.base_url.as_deref().unwrap_or("(disabled)")
            );
            log::info!("    Max advance days: {}", config.booking.max_advance_days);

            log::info!("✓ Campsite data OK");
            log::info!("    Campsites: {}", catalog.len());
            log::info!("    Agencies: {}", catalog.agencies().len());
            log::info!("    Availability windows: {}", catalog.window_count());
            Ok(())
        }
        Err(e) => {
            log::error!("Validation failed: {}", e);
            Err(e)
        }
    }
}
