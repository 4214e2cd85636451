//! Souk HTTP module: the same-origin proxy server and the backend API client
//!
//! The server half exposes the session-forwarding routes the browser talks
//! to; the client half is the reqwest wrapper the frontend crates use to
//! reach those routes.

#[cfg(feature = "server")]
#[macro_use]
extern crate tracing;

pub mod error;

#[cfg(feature = "server")]
#[path = "config/mod.rs"]
pub mod config;
#[cfg(feature = "server")]
pub mod forwarding;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod server;
#[cfg(feature = "server")]
pub mod state;

#[cfg(feature = "client")]
pub mod client;

pub use error::{HttpError, Result};

#[cfg(feature = "server")]
pub use config::{BackendConfig, resolve_backend};
#[cfg(feature = "server")]
pub use state::AppState;

// Re-export commonly used types
#[cfg(feature = "server")]
pub use axum::{Json, extract, response};
