//! API services for the dashboard pages

pub mod dashboard;
pub mod listings;
pub mod session;
pub mod wallet;

pub use dashboard::DashboardApi;
pub use listings::ListingsApi;
pub use session::{LoginRequest, SessionApi};
pub use wallet::WalletApi;

/// User-facing message for transport failures; the underlying error goes to
/// the diagnostic log only.
pub const TRANSPORT_ERROR_MESSAGE: &str =
    "Unable to reach the marketplace service. Please try again.";

pub(crate) fn transport_error(context: &str, err: impl std::fmt::Display) -> String {
    tracing::error!("{context}: {err}");
    TRANSPORT_ERROR_MESSAGE.to_string()
}
