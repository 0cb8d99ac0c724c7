// src/services/catalog.rs

//! Campsite catalog: loading, validation, agency filtering and lookup.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::Campsite;
use crate::utils::slugify;

/// In-memory collection of campsites from the data file.
#[derive(Debug, Clone, Default)]
pub struct CampsiteCatalog {
    campsites: Vec<Campsite>,
}

impl CampsiteCatalog {
    pub fn new(campsites: Vec<Campsite>) -> Self {
        Self { campsites }
    }

    /// Load the catalog from a GeoJSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let campsites = Campsite::load_all(path)?;
        log::debug!("Loaded {} campsites from {}", campsites.len(), path.display());
        Ok(Self::new(campsites))
    }

    pub fn campsites(&self) -> &[Campsite] {
        &self.campsites
    }

    pub fn len(&self) -> usize {
        self.campsites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campsites.is_empty()
    }

    /// Total number of availability windows across all sites.
    pub fn window_count(&self) -> usize {
        self.campsites.iter().map(|c| c.windows.len()).sum()
    }

    /// Check names, ids and the booking-advance bound of every window.
    pub fn validate(&self, max_advance_days: u32) -> Result<()> {
        let mut seen = HashSet::new();

        for site in &self.campsites {
            if site.name.trim().is_empty() {
                return Err(AppError::validation(format!(
                    "campsite {} has an empty name",
                    site.id
                )));
            }
            if !seen.insert(site.id.as_str()) {
                return Err(AppError::validation(format!(
                    "duplicate campsite id '{}'",
                    site.id
                )));
            }
            for window in &site.windows {
                if window.advance_days() > max_advance_days {
                    return Err(AppError::validation(format!(
                        "{}: bookingAdvanceDays {} exceeds the limit of {}",
                        site.name,
                        window.advance_days(),
                        max_advance_days
                    )));
                }
            }
        }

        Ok(())
    }

    /// Managing agencies with their site counts, sorted by name.
    pub fn agencies(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for site in &self.campsites {
            *counts.entry(site.agency.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Sites managed by any of `agencies` (case-insensitive); all sites when empty.
    pub fn filter_by_agency<S: AsRef<str>>(&self, agencies: &[S]) -> Vec<&Campsite> {
        if agencies.is_empty() {
            return self.campsites.iter().collect();
        }

        let wanted: HashSet<String> = agencies
            .iter()
            .map(|a| a.as_ref().trim().to_lowercase())
            .collect();

        self.campsites
            .iter()
            .filter(|site| wanted.contains(&site.agency.to_lowercase()))
            .collect()
    }

    /// Find a site by id, then by name (case-insensitive), then by name slug.
    pub fn find(&self, key: &str) -> Result<&Campsite> {
        let key = key.trim();
        let lowered = key.to_lowercase();

        self.campsites
            .iter()
            .find(|c| c.id == key)
            .or_else(|| {
                self.campsites
                    .iter()
                    .find(|c| c.name.to_lowercase() == lowered)
            })
            .or_else(|| {
                let slug = slugify(key);
                self.campsites.iter().find(|c| c.slug() == slug)
            })
            .ok_or_else(|| AppError::not_found(format!("campsite '{key}'")))
    }
}
