//! Dashboard pages

pub mod dashboard;
pub mod listings;
pub mod login;
pub mod not_found;
pub mod wallet;

pub use dashboard::DashboardPage;
pub use listings::ListingsPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use wallet::WalletPage;
