//! Common frontend state, services, and components for the Souk admin dashboard

pub mod access;
pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod services;
pub mod stores;

pub use access::can_access;
pub use auth::context::{AuthAction, AuthContext, AuthContextData, AuthProvider, use_auth};
pub use client::create_client;
pub use components::{ErrorBanner, LoadingSpinner};
pub use config::AuthConfig;
