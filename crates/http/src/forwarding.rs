//! Allowlist-based forwarding of browser session requests to the backend
//!
//! Each proxied route copies a fixed allowlist of inbound headers onto an
//! outbound backend request, then relays the backend's status, body, and an
//! allowlist of response headers back unchanged. The value-add is purely
//! same-origin cookie scoping; nothing is rewritten or retried.

use crate::{error::HttpError, state::AppState};
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Response};

/// Inbound request headers copied onto the outbound backend request
///
/// The CSRF token is accepted under either of the two names the backend
/// recognizes.
pub const FORWARDED_REQUEST_HEADERS: &[&str] = &["cookie", "x-csrf-token", "csrf-token"];

/// Backend response headers relayed back to the browser
pub const RELAYED_RESPONSE_HEADERS: &[&str] = &["content-type", "set-cookie"];

/// A single same-origin route forwarded to the backend
#[derive(Debug, Clone, Copy)]
pub struct ProxyRule {
    /// Path on the backend this route forwards to
    pub target_path: &'static str,
    /// Allowlist of inbound request headers to copy through
    pub request_headers: &'static [&'static str],
    /// Allowlist of backend response headers to relay
    pub response_headers: &'static [&'static str],
}

impl ProxyRule {
    /// Rule for a session-scoped route with the standard header allowlists
    pub const fn session(target_path: &'static str) -> Self {
        Self {
            target_path,
            request_headers: FORWARDED_REQUEST_HEADERS,
            response_headers: RELAYED_RESPONSE_HEADERS,
        }
    }
}

/// Forward one inbound request to the backend per the given rule
///
/// Allowlisted headers absent from the inbound request are simply not sent;
/// none is ever synthesized. The backend's status code passes through
/// unchanged and its body is relayed verbatim as bytes, never re-parsed.
/// A transport failure is terminal for the call and surfaces as 502.
pub async fn forward(
    state: &AppState,
    rule: &ProxyRule,
    method: Method,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<Response<Body>, HttpError> {
    let url = format!("{}{}", state.backend_base(), rule.target_path);

    let mut outbound = state.http().request(method.clone(), url.as_str());
    for name in rule.request_headers {
        for value in headers.get_all(*name) {
            outbound = outbound.header(*name, value.clone());
        }
    }
    if !body.is_empty() {
        outbound = outbound.body(body);
    }

    debug!(%method, %url, "forwarding session request to backend");

    let upstream = outbound.send().await.map_err(|err| {
        error!(%url, error = %err, "backend request failed");
        HttpError::BackendUnreachable(err.to_string())
    })?;

    let status = upstream.status();
    let mut relayed = Response::builder().status(status);
    for name in rule.response_headers {
        // set-cookie may legitimately appear more than once
        for value in upstream.headers().get_all(*name) {
            relayed = relayed.header(*name, value.clone());
        }
    }

    let body = upstream.bytes().await.map_err(|err| {
        error!(%url, error = %err, "failed reading backend response body");
        HttpError::BackendUnreachable(err.to_string())
    })?;

    debug!(%url, status = status.as_u16(), bytes = body.len(), "relaying backend response");

    relayed
        .body(Body::from(body))
        .map_err(|err| HttpError::InternalServerError(err.to_string()))
}
