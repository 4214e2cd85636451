//! HTTP server assembly for the dashboard API

use crate::config::HttpConfig;
use crate::state::AppState;
use anyhow::Context;
use axum::Router;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa_scalar::{Scalar, Servable};

/// HTTP server serving the proxy routes and API docs
#[derive(Clone)]
pub struct HttpServer {
    config: HttpConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: HttpConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Build the axum application with middleware applied
    pub fn create_app(&self) -> Router {
        let (router, api) = crate::routes::router().split_for_parts();

        let mut app = router
            .with_state(self.state.clone())
            .merge(Scalar::with_url("/docs", api))
            .layer(axum::middleware::from_fn(
                crate::middleware::trace_middleware,
            ))
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(
                self.config.timeout_secs,
            )));

        if self.config.cors_enabled {
            app = app.layer(CorsLayer::permissive());
        }

        app
    }

    /// Bind the configured address and serve until the task is aborted
    pub async fn start(&self) -> anyhow::Result<()> {
        let app = self.create_app();

        let listener = TcpListener::bind(self.config.bind_addr)
            .await
            .with_context(|| format!("Failed to bind to {}", self.config.bind_addr))?;

        info!("HTTP server listening on {}", self.config.bind_addr);

        axum::serve(listener, app)
            .await
            .context("HTTP server terminated")
    }
}
