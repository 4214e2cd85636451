//! Dashboard metrics API service

use crate::client::create_client;
use crate::services::transport_error;
use reqwest::Method;
use souk_core::{ApiEnvelope, DashboardMetrics};

/// Dashboard metrics API service
#[derive(Clone)]
pub struct DashboardApi;

impl DashboardApi {
    /// Create a new dashboard API service
    pub fn new() -> Self {
        Self
    }
}

impl Default for DashboardApi {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardApi {
    /// Fetch the aggregate sales/order metrics
    pub async fn fetch_stats(&self) -> Result<DashboardMetrics, String> {
        let client = create_client().map_err(|e| transport_error("client init", e))?;

        let envelope: ApiEnvelope<DashboardMetrics> = client
            .fetch_envelope(Method::GET, "/api/dashboard/stats")
            .await
            .map_err(|e| transport_error("dashboard stats fetch", e))?;
        envelope.into_result()
    }
}
