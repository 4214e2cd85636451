//! Listings API service

use crate::client::create_client;
use crate::services::transport_error;
use reqwest::Method;
use souk_core::{ApiEnvelope, ListingSummary};

/// Listings API service
#[derive(Clone)]
pub struct ListingsApi;

impl ListingsApi {
    /// Create a new listings API service
    pub fn new() -> Self {
        Self
    }
}

impl Default for ListingsApi {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingsApi {
    /// Fetch the seller's product and service listings
    pub async fn fetch_listings(&self) -> Result<Vec<ListingSummary>, String> {
        let client = create_client().map_err(|e| transport_error("client init", e))?;

        let envelope: ApiEnvelope<Vec<ListingSummary>> = client
            .fetch_envelope(Method::GET, "/api/listings")
            .await
            .map_err(|e| transport_error("listings fetch", e))?;
        envelope.into_result()
    }
}
