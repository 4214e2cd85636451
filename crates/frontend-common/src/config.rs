//! Frontend configuration

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Session storage key for the persisted user record
    pub const USER_STATE_KEY: &'static str = "souk_user";
}
