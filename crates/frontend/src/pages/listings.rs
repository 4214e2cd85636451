//! Product and service listings page

use souk_core::{ListingKind, ListingSummary};
use souk_frontend_common::components::{ErrorBanner, LoadingSpinner};
use souk_frontend_common::stores::{FetchAction, fetch_listings, use_listings_store};
use yew::prelude::*;

#[function_component(ListingsPage)]
pub fn listings_page() -> Html {
    let store = use_listings_store();

    {
        let store = store.clone();
        use_effect_with((), move |_| {
            fetch_listings(store);
        });
    }

    let on_refresh = {
        let store = store.clone();
        Callback::from(move |_| fetch_listings(store.clone()))
    };

    let on_dismiss = {
        let store = store.clone();
        Callback::from(move |()| store.dispatch(FetchAction::ClearError))
    };

    html! {
        <div>
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-2xl font-bold text-gray-900 dark:text-white">{"Listings"}</h2>
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
                <LoadingSpinner text={Some("Loading listings...".to_string())} />
            } else if let Some(listings) = &store.data {
                if listings.is_empty() {
                    <p class="text-gray-500 dark:text-gray-400">{"No listings yet."}</p>
                } else {
                    <div class="bg-white dark:bg-gray-800 rounded-lg shadow overflow-hidden">
                        <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                            <thead class="bg-gray-50 dark:bg-gray-900/50">
                                <tr>
                                    { header_cell("Title") }
                                    { header_cell("Type") }
                                    { header_cell("Price") }
                                    { header_cell("Status") }
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                                { for listings.iter().map(listing_row) }
                            </tbody>
                        </table>
                    </div>
                }
            }
        </div>
    }
}

fn header_cell(label: &str) -> Html {
    html! {
        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
            {label}
        </th>
    }
}

fn listing_row(listing: &ListingSummary) -> Html {
    let kind = match listing.kind {
        ListingKind::Product => "Product",
        ListingKind::Service => "Service",
    };
    let (status, status_class) = if listing.published {
        ("Published", "text-green-600 dark:text-green-400")
    } else {
        ("Draft", "text-gray-500 dark:text-gray-400")
    };

    html! {
        <tr key={listing.id.clone()}>
            <td class="px-6 py-4 text-sm text-gray-900 dark:text-white">{&listing.title}</td>
            <td class="px-6 py-4 text-sm text-gray-500 dark:text-gray-400">{kind}</td>
            <td class="px-6 py-4 text-sm text-gray-900 dark:text-white">{format!("${:.2}", listing.price)}</td>
            <td class={classes!("px-6", "py-4", "text-sm", status_class)}>{status}</td>
        </tr>
    }
}
