//! Application state management

use std::sync::Arc;

/// Shared application state
///
/// Holds the resolved backend base URL and the outbound HTTP client used by
/// the forwarding routes. Immutable once the server is up; handlers only
/// read from it.
#[derive(Clone)]
pub struct AppState {
    backend_base: Arc<str>,
    http: reqwest::Client,
}

impl AppState {
    /// Create a new AppState for the given backend base URL
    pub fn new(backend_base: impl Into<String>, http: reqwest::Client) -> Self {
        let backend_base = backend_base.into().trim_end_matches('/').to_string();
        Self {
            backend_base: backend_base.into(),
            http,
        }
    }

    /// Base URL of the backend every proxy route forwards to
    pub fn backend_base(&self) -> &str {
        &self.backend_base
    }

    /// Outbound HTTP client
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }
}
