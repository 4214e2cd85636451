//! Dismissible error banner

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let on_click = props.on_dismiss.clone().map(|cb| {
        Callback::from(move |_: MouseEvent| {
            cb.emit(());
        })
    });

    html! {
        <div class="flex items-center justify-between p-4 mb-4 rounded-md bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300">
            <span class="text-sm">{&props.message}</span>
            if let Some(on_click) = on_click {
                <button
                    onclick={on_click}
                    class="ml-4 text-sm font-medium hover:text-red-900 dark:hover:text-red-100"
                >
                    {"Dismiss"}
                </button>
            }
        </div>
    }
}
