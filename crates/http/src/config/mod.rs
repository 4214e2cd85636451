//! Server configuration: recognized environment variables and backend
//! candidate selection

mod resolver;

pub use resolver::resolve_backend;

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Environment variable naming an explicit backend base URL, tried first
pub const ENV_API_BASE: &str = "SOUK_API_BASE";
/// Preferred backend API URL
pub const ENV_API_URL_PRIMARY: &str = "SOUK_API_URL_PRIMARY";
/// Fallback backend API URL
pub const ENV_API_URL_SECONDARY: &str = "SOUK_API_URL_SECONDARY";
/// Preferred websocket URL (surfaced to the frontend, not probed)
pub const ENV_WS_URL_PRIMARY: &str = "SOUK_WS_URL_PRIMARY";
/// Fallback websocket URL
pub const ENV_WS_URL_SECONDARY: &str = "SOUK_WS_URL_SECONDARY";
/// Public URL this dashboard is served from
pub const ENV_APP_URL: &str = "SOUK_APP_URL";
/// Deployment environment switch; "production" selects the production fallbacks
pub const ENV_DEPLOYMENT: &str = "SOUK_ENV";

const DEV_API_PRIMARY: &str = "http://localhost:4000";
const DEV_API_SECONDARY: &str = "http://127.0.0.1:4000";
const DEV_WS_PRIMARY: &str = "ws://localhost:4000/ws";
const DEV_WS_SECONDARY: &str = "ws://127.0.0.1:4000/ws";
const DEV_APP_URL: &str = "http://localhost:8080";

const PROD_API_PRIMARY: &str = "https://api.souk.market";
const PROD_API_SECONDARY: &str = "https://api-fallback.souk.market";
const PROD_WS_PRIMARY: &str = "wss://api.souk.market/ws";
const PROD_WS_SECONDARY: &str = "wss://api-fallback.souk.market/ws";
const PROD_APP_URL: &str = "https://admin.souk.market";

/// Default per-candidate liveness probe timeout
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Backend endpoint configuration
///
/// Every field has an environment-sensitive hardcoded fallback, so a bare
/// process always resolves to something routable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Explicit backend override; wins over primary/secondary when set
    pub api_base: Option<String>,

    /// Preferred backend API URL
    pub primary_url: String,

    /// Fallback backend API URL
    pub secondary_url: String,

    /// Preferred websocket URL
    pub ws_primary_url: String,

    /// Fallback websocket URL
    pub ws_secondary_url: String,

    /// Public URL of this dashboard
    pub app_url: String,

    /// Per-candidate probe timeout
    #[serde(skip, default = "default_probe_timeout")]
    pub probe_timeout: Duration,
}

fn default_probe_timeout() -> Duration {
    DEFAULT_PROBE_TIMEOUT
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::with_production(false)
    }
}

impl BackendConfig {
    /// Hardcoded fallbacks for the given deployment environment
    pub fn with_production(production: bool) -> Self {
        if production {
            Self {
                api_base: None,
                primary_url: PROD_API_PRIMARY.to_string(),
                secondary_url: PROD_API_SECONDARY.to_string(),
                ws_primary_url: PROD_WS_PRIMARY.to_string(),
                ws_secondary_url: PROD_WS_SECONDARY.to_string(),
                app_url: PROD_APP_URL.to_string(),
                probe_timeout: DEFAULT_PROBE_TIMEOUT,
            }
        } else {
            Self {
                api_base: None,
                primary_url: DEV_API_PRIMARY.to_string(),
                secondary_url: DEV_API_SECONDARY.to_string(),
                ws_primary_url: DEV_WS_PRIMARY.to_string(),
                ws_secondary_url: DEV_WS_SECONDARY.to_string(),
                app_url: DEV_APP_URL.to_string(),
                probe_timeout: DEFAULT_PROBE_TIMEOUT,
            }
        }
    }

    /// Load configuration from the environment
    pub fn from_env() -> Self {
        let production = std::env::var(ENV_DEPLOYMENT)
            .map(|v| v.eq_ignore_ascii_case("production"))
            .unwrap_or(false);
        let defaults = Self::with_production(production);

        Self {
            api_base: env_var(ENV_API_BASE),
            primary_url: env_var(ENV_API_URL_PRIMARY).unwrap_or(defaults.primary_url),
            secondary_url: env_var(ENV_API_URL_SECONDARY).unwrap_or(defaults.secondary_url),
            ws_primary_url: env_var(ENV_WS_URL_PRIMARY).unwrap_or(defaults.ws_primary_url),
            ws_secondary_url: env_var(ENV_WS_URL_SECONDARY).unwrap_or(defaults.ws_secondary_url),
            app_url: env_var(ENV_APP_URL).unwrap_or(defaults.app_url),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    /// Candidate backend base URLs in preference order
    ///
    /// The explicit override comes first, then primary, then secondary.
    /// Duplicates are dropped so a candidate is probed at most once.
    pub fn candidates(&self) -> Vec<String> {
        let mut candidates: Vec<String> = Vec::new();
        let mut push = |url: &str| {
            let url = url.trim_end_matches('/').to_string();
            if !url.is_empty() && !candidates.contains(&url) {
                candidates.push(url);
            }
        };
        if let Some(base) = &self.api_base {
            push(base);
        }
        push(&self.primary_url);
        push(&self.secondary_url);
        candidates
    }

    /// Probe the candidates and pick a reachable backend base URL
    pub async fn resolve(&self, client: &reqwest::Client) -> String {
        resolve_backend(client, &self.candidates(), self.probe_timeout).await
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Address to bind the HTTP server
    pub bind_addr: SocketAddr,

    /// Enable CORS for the web interface
    pub cors_enabled: bool,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_addr: ([127, 0, 0, 1], 8080).into(),
            cors_enabled: true,
            timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_prefer_explicit_base() {
        let config = BackendConfig {
            api_base: Some("http://override:9000/".to_string()),
            ..BackendConfig::with_production(false)
        };
        let candidates = config.candidates();
        assert_eq!(candidates[0], "http://override:9000");
        assert_eq!(candidates.len(), 3);
    }

    #[test]
    fn candidates_drop_duplicates() {
        let config = BackendConfig {
            api_base: Some(DEV_API_PRIMARY.to_string()),
            ..BackendConfig::with_production(false)
        };
        let candidates = config.candidates();
        assert_eq!(candidates, vec![DEV_API_PRIMARY, DEV_API_SECONDARY]);
    }

    #[test]
    fn production_fallbacks_differ_from_dev() {
        let dev = BackendConfig::with_production(false);
        let prod = BackendConfig::with_production(true);
        assert_ne!(dev.primary_url, prod.primary_url);
        assert_ne!(dev.app_url, prod.app_url);
    }
}
