//! Session API service
//!
//! Talks only to the same-origin session routes so the browser attaches and
//! accepts the backend's session cookie.

use crate::client::create_client;
use crate::services::transport_error;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use souk_core::{ApiEnvelope, User};

/// Session API service
#[derive(Clone)]
pub struct SessionApi;

impl SessionApi {
    /// Create a new session API service
    pub fn new() -> Self {
        Self
    }
}

impl Default for SessionApi {
    fn default() -> Self {
        Self::new()
    }
}

/// Login credentials posted through the session proxy
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// CSRF token issued by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct CsrfToken {
    pub token: String,
}

impl SessionApi {
    /// Identity check: resolve the session cookie to a user, if any
    pub async fn current_user(&self) -> Result<Option<User>, String> {
        let client = create_client().map_err(|e| transport_error("client init", e))?;

        let envelope: ApiEnvelope<User> = client
            .fetch_envelope(Method::GET, "/api/auth/me")
            .await
            .map_err(|e| transport_error("identity check", e))?;

        // An anonymous session is a plain "no", not an error
        if envelope.success {
            Ok(envelope.data)
        } else {
            Ok(None)
        }
    }

    /// Fetch a CSRF token for the next mutating request
    pub async fn csrf_token(&self) -> Result<CsrfToken, String> {
        let client = create_client().map_err(|e| transport_error("client init", e))?;

        let request = client.request(Method::GET, "/csrf-token");
        client
            .execute(request)
            .await
            .map_err(|e| transport_error("csrf token fetch", e))
    }

    /// Sign in; the session cookie arrives on the response
    pub async fn login(&self, request: LoginRequest) -> Result<User, String> {
        let client = create_client().map_err(|e| transport_error("client init", e))?;
        let token = self.csrf_token().await?;

        let response = client
            .request(Method::POST, "/api/auth/login")
            .header("x-csrf-token", token.token)
            .json(&request)
            .send()
            .await
            .map_err(|e| transport_error("login", e))?;

        let envelope: ApiEnvelope<User> = response
            .json()
            .await
            .map_err(|e| transport_error("login response decode", e))?;
        envelope.into_result()
    }

    /// Invalidate the backend session
    pub async fn logout(&self) -> Result<(), String> {
        let client = create_client().map_err(|e| transport_error("client init", e))?;
        let token = self.csrf_token().await?;

        let response = client
            .request(Method::POST, "/api/auth/logout")
            .header("x-csrf-token", token.token)
            .send()
            .await
            .map_err(|e| transport_error("logout", e))?;

        let envelope: ApiEnvelope<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| transport_error("logout response decode", e))?;

        // Logout carries no payload; only the flag matters
        if envelope.success {
            Ok(())
        } else {
            Err(envelope
                .error
                .map(|e| e.message)
                .unwrap_or_else(|| souk_core::types::GENERIC_ERROR_MESSAGE.to_string()))
        }
    }
}
