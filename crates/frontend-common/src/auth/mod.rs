//! Authentication state and session actions

pub mod actions;
pub mod context;

pub use actions::{check_auth, login, logout, refresh_auth};
pub use context::{
    AuthAction, AuthContext, AuthContextData, AuthProvider, ProfileUpdate, use_auth,
    use_auth_user, use_is_authenticated,
};
