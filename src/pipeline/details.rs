// src/pipeline/details.rs

//! Reservation-date lookups against the optional backend.

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::BackendConfig;
use crate::services::{CampsiteCatalog, ReservationClient};

/// Fetch and print upcoming reservation dates for the given campsites.
///
/// Returns the number of lookups that failed.
pub async fn run_details(
    backend: &BackendConfig,
    catalog: &CampsiteCatalog,
    keys: &[String],
    today: NaiveDate,
) -> Result<usize> {
    let client = ReservationClient::new(backend)?;

    let mut ids = Vec::with_capacity(keys.len());
    for key in keys {
        ids.push(catalog.find(key)?.id.clone());
    }

    log::info!("Looking up reservation dates for {} campsite(s)", ids.len());
    let results = client.fetch_many(&ids).await;

    let mut failures = 0;
    for (id, result) in results {
        let name = catalog.find(&id).map(|s| s.name.as_str()).unwrap_or(&id);
        match result {
            Ok(details) => {
                let upcoming = details.upcoming(today);
                if upcoming.is_empty() {
                    println!("{name}: no upcoming reservation dates");
                } else {
                    let dates: Vec<String> = upcoming.iter().map(|d| d.to_string()).collect();
                    println!("{name}: {}", dates.join(", "));
                }
            }
            Err(error) => {
                failures += 1;
                println!("{name}: lookup failed ({error})");
            }
        }
    }

    Ok(failures)
}
