//! Wallet balance API service

use crate::client::create_client;
use crate::services::transport_error;
use reqwest::Method;
use souk_core::{ApiEnvelope, WalletBalance};

/// Wallet API service
#[derive(Clone)]
pub struct WalletApi;

impl WalletApi {
    /// Create a new wallet API service
    pub fn new() -> Self {
        Self
    }
}

impl Default for WalletApi {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletApi {
    /// Fetch the current wallet balance
    pub async fn fetch_balance(&self) -> Result<WalletBalance, String> {
        let client = create_client().map_err(|e| transport_error("client init", e))?;

        let envelope: ApiEnvelope<WalletBalance> = client
            .fetch_envelope(Method::GET, "/api/wallet/balance")
            .await
            .map_err(|e| transport_error("wallet balance fetch", e))?;
        envelope.into_result()
    }
}
