//! Authentication guard component for protected routes

use crate::app::Route;
use souk_frontend_common::auth::use_auth;
use souk_frontend_common::components::LoadingSpinner;
use yew::prelude::*;
use yew_router::prelude::*;

/// RequireAuth component - simple auth guard
#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Simple auth guard that bounces to the login page when not authenticated
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let auth = use_auth();

    // Show loading state while the session is being restored
    if auth.is_loading {
        return html! {
            <div class="flex flex-col items-center justify-center min-h-screen">
                <LoadingSpinner text={Some("Checking session...".to_string())} />
            </div>
        };
    }

    // Show children if authenticated
    if auth.is_authenticated() {
        return html! { <>{ props.children.clone() }</> };
    }

    html! { <Redirect<Route> to={Route::Login} /> }
}
