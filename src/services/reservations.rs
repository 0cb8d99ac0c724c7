// src/services/reservations.rs

//! Client for the optional reservation-detail backend.
//!
//! The backend exposes a single endpoint, `GET /campsite/{id}`, returning
//! `{ "reservation_dates": [...] }`.

use futures::stream::{self, StreamExt};
use reqwest::Client;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{BackendConfig, ReservationDetails};
use crate::utils::http::{create_async_client, fetch_text};
use crate::utils::url::campsite_endpoint;

/// Service for looking up reservation dates by campsite id.
pub struct ReservationClient {
    base_url: String,
    client: Client,
    max_concurrent: usize,
}

impl ReservationClient {
    /// Create a client; fails when no backend URL is configured.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| AppError::config("backend.base_url is not set"))?
            .to_string();

        Url::parse(&base_url)?;

        Ok(Self {
            base_url,
            client: create_async_client(config)?,
            max_concurrent: config.max_concurrent.max(1),
        })
    }

    /// URL for a campsite's reservation details.
    pub fn endpoint(&self, id: &str) -> Result<Url> {
        campsite_endpoint(&self.base_url, id)
    }

    /// Fetch reservation details for one campsite.
    pub async fn fetch(&self, id: &str) -> Result<ReservationDetails> {
        let url = self.endpoint(id)?;
        log::debug!("Fetching reservation details from {}", url);

        let body = fetch_text(&self.client, url.as_str()).await?;
        parse_details(id, &body)
    }

    /// Fetch several campsites concurrently, bounded by `max_concurrent`.
    ///
    /// Results come back in completion order, each paired with its id.
    pub async fn fetch_many(&self, ids: &[String]) -> Vec<(String, Result<ReservationDetails>)> {
        let mut results = Vec::with_capacity(ids.len());
        let mut lookups = stream::iter(ids)
            .map(|id| async move { (id.clone(), self.fetch(id).await) })
            .buffer_unordered(self.max_concurrent);

        while let Some((id, result)) = lookups.next().await {
            if let Err(error) = &result {
                log::warn!("Reservation lookup failed for {}: {}", id, error);
            }
            results.push((id, result));
        }

        results
    }
}

/// Decode a backend response body.
pub fn parse_details(id: &str, body: &str) -> Result<ReservationDetails> {
    serde_json::from_str(body)
        .map_err(|e| AppError::backend(id, format!("unexpected response body: {e}")))
}
