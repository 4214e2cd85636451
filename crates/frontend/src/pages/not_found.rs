//! 404 page

use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex flex-col items-center justify-center">
            <h1 class="text-4xl font-bold text-gray-900 dark:text-white">{"404"}</h1>
            <p class="mt-2 text-gray-600 dark:text-gray-400">{"This page does not exist."}</p>
            <Link<Route> to={Route::Dashboard} classes="mt-4 text-blue-600 hover:text-blue-700 text-sm">
                {"Back to the dashboard"}
            </Link<Route>>
        </div>
    }
}
