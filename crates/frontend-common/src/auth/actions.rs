//! Session actions driving the auth context
//!
//! Every action funnels through the same-origin session routes; nothing is
//! retried automatically, and every failure lands in the context state or
//! the diagnostic log.

use super::context::{AuthAction, AuthContext};
use crate::services::session::{LoginRequest, SessionApi};
use wasm_bindgen_futures::spawn_local;

/// Sign in with credentials
pub fn login(auth: AuthContext, request: LoginRequest) {
    auth.dispatch(AuthAction::AuthStarted);
    spawn_local(async move {
        match SessionApi::new().login(request).await {
            Ok(user) => auth.dispatch(AuthAction::SignedIn(user)),
            Err(message) => {
                tracing::warn!("login failed: {message}");
                auth.dispatch(AuthAction::AuthFailed(message));
            }
        }
    });
}

/// Revalidate the session cookie
///
/// Resolves to signed-in or anonymous; a transport failure here is treated
/// as no session rather than an error state.
pub fn check_auth(auth: AuthContext) {
    auth.dispatch(AuthAction::AuthStarted);
    spawn_local(async move {
        match SessionApi::new().current_user().await {
            Ok(Some(user)) => auth.dispatch(AuthAction::SignedIn(user)),
            Ok(None) => auth.dispatch(AuthAction::SessionAbsent),
            Err(message) => {
                tracing::warn!("identity check failed: {message}");
                auth.dispatch(AuthAction::SessionAbsent);
            }
        }
    });
}

/// Re-fetch the current user without leaving the page
pub fn refresh_auth(auth: AuthContext) {
    spawn_local(async move {
        match SessionApi::new().current_user().await {
            Ok(Some(user)) => auth.dispatch(AuthAction::SignedIn(user)),
            Ok(None) => auth.dispatch(AuthAction::SessionAbsent),
            Err(message) => {
                tracing::warn!("session refresh failed: {message}");
                auth.dispatch(AuthAction::AuthFailed(message));
            }
        }
    });
}

/// Sign out and invalidate the backend session
pub fn logout(auth: AuthContext) {
    auth.dispatch(AuthAction::AuthStarted);
    spawn_local(async move {
        if let Err(message) = SessionApi::new().logout().await {
            tracing::warn!("logout request failed: {message}");
        }
        // The local session ends regardless of what the backend said
        auth.dispatch(AuthAction::SignedOut);
    });
}
