//! Global authentication context and provider

use crate::config::AuthConfig;
use souk_core::User;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::Storage;
use yew::prelude::*;

/// Field-level profile changes applied without re-fetching the session
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub metadata: HashMap<String, String>,
}

/// Authentication context data
///
/// `user` doubles as the remembered pre-error state: a failed call keeps it
/// intact, so clearing the error returns to whatever state held before.
/// Role flags are read straight off the user record and never cached.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthContextData {
    pub user: Option<User>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Authentication context actions
pub enum AuthAction {
    /// A session call began
    AuthStarted,
    /// Identity check or login resolved to a user
    SignedIn(User),
    /// Identity check resolved to no live session
    SessionAbsent,
    /// Logout completed
    SignedOut,
    /// Login or refresh failed with a user-facing message
    AuthFailed(String),
    /// Field-level profile update while staying signed in
    ProfileUpdated(ProfileUpdate),
    /// Drop the error and return to the previous non-error state
    ClearError,
}

/// Authentication context
pub type AuthContext = UseReducerHandle<AuthContextData>;

impl Default for AuthContextData {
    fn default() -> Self {
        Self {
            user: None,
            is_loading: true, // Start with loading to restore sessionStorage
            error: None,
        }
    }
}

impl AuthContextData {
    /// Whether a user is currently signed in
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::AuthStarted => Rc::new(Self {
                user: self.user.clone(),
                is_loading: true,
                error: None,
            }),
            AuthAction::SignedIn(user) => {
                persist_user(&user);
                Rc::new(Self {
                    user: Some(user),
                    is_loading: false,
                    error: None,
                })
            }
            AuthAction::SessionAbsent | AuthAction::SignedOut => {
                clear_persisted_user();
                Rc::new(Self {
                    user: None,
                    is_loading: false,
                    error: None,
                })
            }
            AuthAction::AuthFailed(message) => Rc::new(Self {
                user: self.user.clone(),
                is_loading: false,
                error: Some(message),
            }),
            AuthAction::ProfileUpdated(update) => match &self.user {
                Some(user) => {
                    let mut user = user.clone();
                    if let Some(name) = update.name {
                        user.name = Some(name);
                    }
                    user.metadata.extend(update.metadata);
                    persist_user(&user);
                    Rc::new(Self {
                        user: Some(user),
                        is_loading: false,
                        error: None,
                    })
                }
                None => self,
            },
            AuthAction::ClearError => Rc::new(Self {
                error: None,
                ..(*self).clone()
            }),
        }
    }
}

/// Get sessionStorage
fn get_session_storage() -> Option<Storage> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.session_storage().ok().flatten())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        // sessionStorage only exists in the browser
        None
    }
}

fn persist_user(user: &User) {
    if let Some(storage) = get_session_storage() {
        if let Ok(serialized) = serde_json::to_string(user) {
            let _ = storage.set_item(AuthConfig::USER_STATE_KEY, &serialized);
        }
    }
}

fn clear_persisted_user() {
    if let Some(storage) = get_session_storage() {
        let _ = storage.remove_item(AuthConfig::USER_STATE_KEY);
    }
}

fn restore_user() -> Option<User> {
    let storage = get_session_storage()?;
    let stored = storage.get_item(AuthConfig::USER_STATE_KEY).ok().flatten()?;
    serde_json::from_str(&stored).ok()
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth_state = use_reducer(AuthContextData::default);

    // Restore the persisted user on mount, then revalidate against the
    // backend; the cookie is the actual authority.
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            if let Some(user) = restore_user() {
                auth_state.dispatch(AuthAction::SignedIn(user));
            } else {
                auth_state.dispatch(AuthAction::SessionAbsent);
            }
            super::actions::check_auth(auth_state);
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth_state}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

/// Hook to get the current user
#[hook]
pub fn use_auth_user() -> Option<User> {
    let auth = use_auth();
    auth.user.clone()
}

/// Hook to check if authenticated
#[hook]
pub fn use_is_authenticated() -> bool {
    let auth = use_auth();
    auth.is_authenticated()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use souk_core::{Role, VerificationStatus, VerificationTier};

    fn reduce(state: AuthContextData, action: AuthAction) -> AuthContextData {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn user() -> User {
        User {
            id: "u-1".to_string(),
            name: Some("Amina".to_string()),
            role: Role::Seller,
            verification: VerificationStatus::Verified,
            tier: VerificationTier::Basic,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            metadata: HashMap::new(),
        }
    }

    #[test]
    fn starts_loading_to_restore_session() {
        let state = AuthContextData::default();
        assert!(state.is_loading);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn sign_in_clears_loading_and_error() {
        let state = reduce(
            AuthContextData {
                user: None,
                is_loading: true,
                error: Some("old".to_string()),
            },
            AuthAction::SignedIn(user()),
        );
        assert!(state.is_authenticated());
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn sign_out_returns_to_anonymous() {
        let signed_in = reduce(AuthContextData::default(), AuthAction::SignedIn(user()));
        let state = reduce(signed_in, AuthAction::SignedOut);
        assert!(!state.is_authenticated());
        assert!(!state.is_loading);
    }

    #[test]
    fn failure_keeps_previous_user() {
        let signed_in = reduce(AuthContextData::default(), AuthAction::SignedIn(user()));
        let failed = reduce(signed_in, AuthAction::AuthFailed("refresh failed".to_string()));
        assert_eq!(failed.error.as_deref(), Some("refresh failed"));
        assert!(failed.user.is_some());

        // Clearing the error restores the previous non-error state
        let restored = reduce(failed, AuthAction::ClearError);
        assert_eq!(restored.error, None);
        assert!(restored.is_authenticated());
    }

    #[test]
    fn profile_update_merges_fields() {
        let signed_in = reduce(AuthContextData::default(), AuthAction::SignedIn(user()));
        let update = ProfileUpdate {
            name: Some("Amina K".to_string()),
            metadata: HashMap::from([("shop".to_string(), "spice-row".to_string())]),
        };
        let state = reduce(signed_in, AuthAction::ProfileUpdated(update));
        let user = state.user.unwrap();
        assert_eq!(user.name.as_deref(), Some("Amina K"));
        assert_eq!(user.metadata.get("shop").map(String::as_str), Some("spice-row"));
        // Untouched fields survive the merge
        assert_eq!(user.role, Role::Seller);
    }

    #[test]
    fn profile_update_without_session_is_ignored() {
        let state = reduce(
            AuthContextData {
                user: None,
                is_loading: false,
                error: None,
            },
            AuthAction::ProfileUpdated(ProfileUpdate::default()),
        );
        assert!(!state.is_authenticated());
    }
}
