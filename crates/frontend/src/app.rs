use crate::auth_guard::RequireAuth;
use crate::nav::NavLink;
use crate::pages::{DashboardPage, ListingsPage, LoginPage, NotFoundPage, WalletPage};
use souk_frontend_common::auth::{AuthProvider, logout, use_auth};
use yew::prelude::*;
use yew_router::prelude::*;

/// Dashboard routes
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/listings")]
    Listings,
    #[at("/wallet")]
    Wallet,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Dashboard => html! {
            <RequireAuth><Layout><DashboardPage /></Layout></RequireAuth>
        },
        Route::Listings => html! {
            <RequireAuth><Layout><ListingsPage /></Layout></RequireAuth>
        },
        Route::Wallet => html! {
            <RequireAuth><Layout><WalletPage /></Layout></RequireAuth>
        },
        Route::Login => html! { <LoginPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AuthProvider>
                <Switch<Route> render={switch} />
            </AuthProvider>
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq)]
struct LayoutProps {
    children: Children,
}

/// Shared chrome: top navigation plus the page body
#[function_component(Layout)]
fn layout(props: &LayoutProps) -> Html {
    let auth = use_auth();

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_| {
            logout(auth.clone());
        })
    };

    let user_name = auth
        .user
        .as_ref()
        .and_then(|u| u.name.clone())
        .unwrap_or_else(|| "Account".to_string());

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900">
            <nav class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between h-16 items-center">
                        <div class="flex items-center gap-6">
                            <h1 class="text-xl font-bold text-gray-900 dark:text-white">{"Souk Admin"}</h1>
                            <div class="flex items-center gap-4">
                                <NavLink to={Route::Dashboard} label="Dashboard" />
                                <NavLink to={Route::Listings} label="Listings" />
                                <NavLink to={Route::Wallet} label="Wallet" />
                            </div>
                        </div>
                        <div class="flex items-center gap-4">
                            <span class="text-sm text-gray-600 dark:text-gray-400">{user_name}</span>
                            <button
                                onclick={on_logout}
                                class="text-sm text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-gray-100"
                            >
                                {"Sign Out"}
                            </button>
                        </div>
                    </div>
                </div>
            </nav>
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                {props.children.clone()}
            </main>
        </div>
    }
}
