//! Session-forwarding proxy routes
//!
//! Same-origin routes whose sole purpose is forwarding a browser request to
//! the backend while preserving cookie-based session context. The browser
//! will only attach and accept session cookies on its own origin, which
//! cross-origin fetches from the page cannot do reliably.

use crate::{
    error::HttpError,
    forwarding::{self, ProxyRule, RELAYED_RESPONSE_HEADERS},
    state::AppState,
};
use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, Method, Response},
};
use tracing::instrument;
use utoipa_axum::{router::OpenApiRouter, routes};

const IDENTITY: ProxyRule = ProxyRule::session("/api/auth/me");
const LOGOUT: ProxyRule = ProxyRule::session("/api/auth/logout");
const CSRF_TOKEN: ProxyRule = ProxyRule::session("/csrf-token");

/// Login additionally forwards the credential body, so its allowlist also
/// carries the content type.
const LOGIN: ProxyRule = ProxyRule {
    target_path: "/api/auth/login",
    request_headers: &["cookie", "x-csrf-token", "csrf-token", "content-type"],
    response_headers: RELAYED_RESPONSE_HEADERS,
};

/// Identity check: is the session cookie still good, and for whom
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Backend identity response relayed verbatim"),
        (status = 502, description = "Backend unreachable"),
    ),
    tag = "session"
)]
#[instrument(name = "session_identity", skip_all)]
pub async fn identity(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response<Body>, HttpError> {
    forwarding::forward(&state, &IDENTITY, Method::GET, &headers, Bytes::new()).await
}

/// Login: forwards credentials and relays the session cookie the backend sets
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = Vec<u8>,
    responses(
        (status = 200, description = "Backend login response relayed verbatim"),
        (status = 502, description = "Backend unreachable"),
    ),
    tag = "session"
)]
#[instrument(name = "session_login", skip_all)]
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response<Body>, HttpError> {
    forwarding::forward(&state, &LOGIN, Method::POST, &headers, body).await
}

/// Logout: invalidates the backend session and relays the cookie clearing
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Backend logout response relayed verbatim"),
        (status = 502, description = "Backend unreachable"),
    ),
    tag = "session"
)]
#[instrument(name = "session_logout", skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response<Body>, HttpError> {
    forwarding::forward(&state, &LOGOUT, Method::POST, &headers, Bytes::new()).await
}

/// CSRF token fetch
#[utoipa::path(
    get,
    path = "/csrf-token",
    responses(
        (status = 200, description = "Backend CSRF token response relayed verbatim"),
        (status = 502, description = "Backend unreachable"),
    ),
    tag = "session"
)]
#[instrument(name = "session_csrf_token", skip_all)]
pub async fn csrf_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response<Body>, HttpError> {
    forwarding::forward(&state, &CSRF_TOKEN, Method::GET, &headers, Bytes::new()).await
}

/// Create the session proxy router
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(identity))
        .routes(routes!(login))
        .routes(routes!(logout))
        .routes(routes!(csrf_token))
}
