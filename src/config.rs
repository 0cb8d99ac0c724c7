// src/config.rs

//! Configuration loading utilities.
//!
//! This module provides convenience functions for loading configuration
//! and campsite data from a data directory.

use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::Config;
use crate::services::CampsiteCatalog;

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file is missing or unreadable.
pub fn load_config(path: &Path) -> Config {
    Config::load_or_default(path)
}

/// Load and validate both config and campsite data.
pub fn load_all(data_dir: &Path) -> Result<(Config, CampsiteCatalog)> {
    let config = load_config(&data_dir.join(CONFIG_FILE));
    config
        .validate()
        .map_err(|e| AppError::config(format!("Invalid configuration: {e}")))?;

    let campsites_path = config.campsites_path(data_dir);
    let catalog = CampsiteCatalog::load(&campsites_path)?;

    catalog
        .validate(config.booking.max_advance_days)
        .map_err(|e| AppError::config(format!("Invalid campsite data: {e}")))?;

    Ok((config, catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const ONE_SITE: &str = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","id":"a","geometry":null,"properties":{
            "name":"Alpha","agency":"USFS",
            "availabilityWindows":[{"start":"06-01","end":"09-30","bookingAdvanceDays":400}]}}
    ]}"#;

    #[test]
    fn test_load_all_with_defaults() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("campsites.geojson"),
            r#"{"type":"FeatureCollection","features":[]}"#,
        )
        .unwrap();

        let (config, catalog) = load_all(tmp.path()).unwrap();
        assert_eq!(config.paths.export_dir, "exports");
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_all_enforces_advance_bound() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("campsites.geojson"), ONE_SITE).unwrap();

        let err = load_all(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("bookingAdvanceDays 400"));
    }

    #[test]
    fn test_load_all_reads_config_paths() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE),
            "[paths]\ncampsites_file = \"sites.json\"\n",
        )
        .unwrap();
        std::fs::write(
            tmp.path().join("sites.json"),
            ONE_SITE.replace("400", "90"),
        )
        .unwrap();

        let (_, catalog) = load_all(tmp.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.campsites()[0].id, "a");
    }

    #[test]
    fn test_bundled_data_is_valid() {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let (config, catalog) = load_all(&data_dir).unwrap();
        assert!(config.backend.base_url.is_none());
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.agencies().len(), 4);
    }

    #[test]
    fn test_load_all_missing_data_file() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(load_all(tmp.path()), Err(AppError::Io(_))));
    }
}
