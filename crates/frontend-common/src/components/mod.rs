//! Shared UI components

pub mod error_banner;
pub mod spinner;

pub use error_banner::ErrorBanner;
pub use spinner::LoadingSpinner;
