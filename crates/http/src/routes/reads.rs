//! Enveloped read proxies for the dashboard pages
//!
//! Bodies are relayed verbatim; the frontend stores decode the envelope and
//! branch on its success flag, never on the HTTP status seen here.

use crate::{
    error::HttpError,
    forwarding::{self, ProxyRule},
    state::AppState,
};
use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, Method, Response},
};
use tracing::instrument;
use utoipa_axum::{router::OpenApiRouter, routes};

const DASHBOARD_STATS: ProxyRule = ProxyRule::session("/api/dashboard/stats");
const WALLET_BALANCE: ProxyRule = ProxyRule::session("/api/wallet/balance");
const LISTINGS: ProxyRule = ProxyRule::session("/api/listings");

/// Aggregate sales/order metrics
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    responses(
        (status = 200, description = "Backend metrics envelope relayed verbatim"),
        (status = 502, description = "Backend unreachable"),
    ),
    tag = "reads"
)]
#[instrument(name = "dashboard_stats", skip_all)]
pub async fn dashboard_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response<Body>, HttpError> {
    forwarding::forward(&state, &DASHBOARD_STATS, Method::GET, &headers, Bytes::new()).await
}

/// Wallet balance
#[utoipa::path(
    get,
    path = "/api/wallet/balance",
    responses(
        (status = 200, description = "Backend wallet envelope relayed verbatim"),
        (status = 502, description = "Backend unreachable"),
    ),
    tag = "reads"
)]
#[instrument(name = "wallet_balance", skip_all)]
pub async fn wallet_balance(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response<Body>, HttpError> {
    forwarding::forward(&state, &WALLET_BALANCE, Method::GET, &headers, Bytes::new()).await
}

/// Product and service listings
#[utoipa::path(
    get,
    path = "/api/listings",
    responses(
        (status = 200, description = "Backend listings envelope relayed verbatim"),
        (status = 502, description = "Backend unreachable"),
    ),
    tag = "reads"
)]
#[instrument(name = "listings", skip_all)]
pub async fn listings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response<Body>, HttpError> {
    forwarding::forward(&state, &LISTINGS, Method::GET, &headers, Bytes::new()).await
}

/// Create the read proxy router
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(dashboard_stats))
        .routes(routes!(wallet_balance))
        .routes(routes!(listings))
}
