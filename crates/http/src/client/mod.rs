//! Souk dashboard API client

pub mod error;

use error::ClientError;
use reqwest::{Client, ClientBuilder};
use souk_core::ApiEnvelope;
use std::time::Duration;

/// Same-origin dashboard API client
///
/// Session identity rides on the backend-issued cookie, which the browser
/// attaches to same-origin requests on its own; the client itself carries
/// no credential.
#[derive(Clone)]
pub struct SoukClient {
    client: Client,
    base_url: String,
}

impl SoukClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> SoukClientBuilder {
        SoukClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder for the given method and path
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors
    ///
    /// For plain (non-envelope) endpoints; a non-success status maps to the
    /// matching `ClientError`.
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }

    /// Fetch an enveloped read endpoint
    ///
    /// The envelope's success flag is the only authority on the outcome, so
    /// the body is decoded whatever the HTTP status; only transport and
    /// decode failures error here.
    pub async fn fetch_envelope<T: serde::de::DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> Result<ApiEnvelope<T>, ClientError> {
        let response = self.request(method, path).send().await?;
        Ok(response.json().await?)
    }
}

/// Builder for SoukClient
#[derive(Default)]
pub struct SoukClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SoukClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<SoukClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout; // Timeouts not supported on WASM

        if let Some(user_agent) = self.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        } else {
            client_builder = client_builder.user_agent("souk-admin/0.1.0");
        }

        let client = client_builder.build()?;

        Ok(SoukClient { client, base_url })
    }
}
