//! Souk core types and utilities

pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult, ErrorContext};
pub use types::{
    ApiEnvelope, ApiError, DashboardMetrics, ListingKind, ListingSummary, Role, User,
    VerificationStatus, VerificationTier, WalletBalance,
};
