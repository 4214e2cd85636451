//! Sales and order metrics page

use souk_core::DashboardMetrics;
use souk_frontend_common::components::{ErrorBanner, LoadingSpinner};
use souk_frontend_common::stores::{FetchAction, fetch_dashboard_data, use_dashboard_store};
use yew::prelude::*;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let store = use_dashboard_store();

    {
        let store = store.clone();
        use_effect_with((), move |_| {
            fetch_dashboard_data(store);
        });
    }

    let on_refresh = {
        let store = store.clone();
        Callback::from(move |_| fetch_dashboard_data(store.clone()))
    };

    let on_dismiss = {
        let store = store.clone();
        Callback::from(move |()| store.dispatch(FetchAction::ClearError))
    };

    html! {
        <div>
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-2xl font-bold text-gray-900 dark:text-white">{"Overview"}</h2>
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
                <LoadingSpinner text={Some("Loading metrics...".to_string())} />
            } else if let Some(metrics) = &store.data {
                { render_metrics(metrics) }
            } else if store.error.is_none() {
                <p class="text-gray-500 dark:text-gray-400">{"No metrics yet."}</p>
            }
        </div>
    }
}

fn render_metrics(metrics: &DashboardMetrics) -> Html {
    html! {
        <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-4">
            { stat_card("Total sales", format!("${:.2}", metrics.total_sales)) }
            { stat_card("Orders", metrics.order_count.to_string()) }
            { stat_card("Pending orders", metrics.pending_orders.to_string()) }
            { stat_card("Active listings", metrics.active_listings.to_string()) }
        </div>
    }
}

fn stat_card(label: &str, value: String) -> Html {
    html! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
            <p class="text-sm text-gray-500 dark:text-gray-400">{label}</p>
            <p class="mt-2 text-3xl font-semibold text-gray-900 dark:text-white">{value}</p>
        </div>
    }
}
