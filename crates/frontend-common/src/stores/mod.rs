//! Fetch-and-cache stores for the dashboard pages

pub mod dashboard;
pub mod fetch;
pub mod listings;
pub mod wallet;

pub use dashboard::{DashboardStore, fetch_dashboard_data, use_dashboard_store};
pub use fetch::{FetchAction, FetchState};
pub use listings::{ListingsStore, fetch_listings, use_listings_store};
pub use wallet::{WalletStore, fetch_wallet_balance, use_wallet_store};
