//! Navigation link with role-gated eager routing

use crate::app::Route;
use souk_frontend_common::access::can_access;
use souk_frontend_common::auth::use_auth;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub to: Route,
    pub label: AttrValue,
}

/// Top-bar navigation link
///
/// When the current role has access to the target, the click routes in-app
/// so the page loads eagerly. Otherwise, or when the router is not
/// available, the link degrades to a plain full-page navigation; it is
/// never blocked, since the backend enforces authorization on the data.
#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let path = props.to.to_path();

    let eager = auth
        .user
        .as_ref()
        .map(|user| can_access(&path, user.role))
        .unwrap_or(false);

    let onclick = {
        let navigator = navigator.clone();
        let to = props.to.clone();
        let path = path.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            match (&navigator, eager) {
                (Some(nav), true) => nav.push(&to),
                _ => full_page_navigate(&path),
            }
        })
    };

    html! {
        <a
            href={path.clone()}
            onclick={onclick}
            class="text-sm text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-gray-100"
        >
            {&props.label}
        </a>
    }
}

fn full_page_navigate(path: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().assign(path).is_err() {
            tracing::error!("full-page navigation to {path} failed");
        }
    }
}
