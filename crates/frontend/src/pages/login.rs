//! Sign-in page

use crate::app::Route;
use souk_frontend_common::auth::{AuthAction, login, use_auth};
use souk_frontend_common::components::{ErrorBanner, LoadingSpinner};
use souk_frontend_common::services::LoginRequest;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let email = use_state(String::new);
    let password = use_state(String::new);

    // Already signed in; nothing to do here
    if auth.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }

    let oninput_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let oninput_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let auth = auth.clone();
        let email = email.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            login(
                auth.clone(),
                LoginRequest {
                    email: (*email).clone(),
                    password: (*password).clone(),
                },
            );
        })
    };

    let on_dismiss = {
        let auth = auth.clone();
        Callback::from(move |()| auth.dispatch(AuthAction::ClearError))
    };

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex items-center justify-center px-4">
            <div class="max-w-md w-full">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold text-gray-900 dark:text-white">{"Souk Admin"}</h1>
                    <p class="mt-2 text-gray-600 dark:text-gray-400">{"Sign in to manage your marketplace"}</p>
                </div>
                <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-8">
                    if let Some(error) = &auth.error {
                        <ErrorBanner message={error.clone()} on_dismiss={Some(on_dismiss)} />
                    }

                    if auth.is_loading {
                        <LoadingSpinner text={Some("Signing in...".to_string())} />
                    } else {
                        <form onsubmit={onsubmit} class="space-y-4">
                            <div>
                                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300">{"Email"}</label>
                                <input
                                    type="email"
                                    value={(*email).clone()}
                                    oninput={oninput_email}
                                    required=true
                                    class="mt-1 block w-full rounded-md border border-gray-300 dark:border-gray-600 dark:bg-gray-700 px-3 py-2 text-sm"
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300">{"Password"}</label>
                                <input
                                    type="password"
                                    value={(*password).clone()}
                                    oninput={oninput_password}
                                    required=true
                                    class="mt-1 block w-full rounded-md border border-gray-300 dark:border-gray-600 dark:bg-gray-700 px-3 py-2 text-sm"
                                />
                            </div>
                            <button
                                type="submit"
                                class="w-full py-2 px-4 rounded-md text-white bg-blue-600 hover:bg-blue-700 text-sm font-medium"
                            >
                                {"Sign In"}
                            </button>
                        </form>
                    }
                </div>
            </div>
        </div>
    }
}
