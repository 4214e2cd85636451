//! Wallet balance page

use souk_frontend_common::components::{ErrorBanner, LoadingSpinner};
use souk_frontend_common::stores::{FetchAction, fetch_wallet_balance, use_wallet_store};
use yew::prelude::*;

#[function_component(WalletPage)]
pub fn wallet_page() -> Html {
    let store = use_wallet_store();

    {
        let store = store.clone();
        use_effect_with((), move |_| {
            fetch_wallet_balance(store);
        });
    }

    let on_refresh = {
        let store = store.clone();
        Callback::from(move |_| fetch_wallet_balance(store.clone()))
    };

    let on_dismiss = {
        let store = store.clone();
        Callback::from(move |()| store.dispatch(FetchAction::ClearError))
    };

    html! {
        <div>
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-2xl font-bold text-gray-900 dark:text-white">{"Wallet"}</h2>
                <button
                    onclick={on_refresh}
                    disabled={store.loading}
                    class="px-4 py-2 text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50"
                >
                    {"Refresh"}
                </button>
            </div>

            if let Some(error) = &store.error {
                <ErrorBanner message={error.clone()} on_dismiss={Some(on_dismiss)} />
            }

            if store.loading && store.data.is_none() {
                <LoadingSpinner text={Some("Loading balance...".to_string())} />
            } else if let Some(balance) = &store.data {
                <div class="grid grid-cols-1 gap-6 sm:grid-cols-2">
                    <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
                        <p class="text-sm text-gray-500 dark:text-gray-400">{"Available"}</p>
                        <p class="mt-2 text-3xl font-semibold text-gray-900 dark:text-white">
                            {format!("{:.2} {}", balance.available, balance.currency)}
                        </p>
                    </div>
                    <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
                        <p class="text-sm text-gray-500 dark:text-gray-400">{"Pending"}</p>
                        <p class="mt-2 text-3xl font-semibold text-gray-900 dark:text-white">
                            {format!("{:.2} {}", balance.pending, balance.currency)}
                        </p>
                    </div>
                </div>
            } else if store.error.is_none() {
                <p class="text-gray-500 dark:text-gray-400">{"No balance to show."}</p>
            }
        </div>
    }
}
