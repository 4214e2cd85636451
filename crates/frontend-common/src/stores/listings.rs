//! Product and service listings store

use crate::services::listings::ListingsApi;
use crate::stores::fetch::{FetchAction, FetchState};
use souk_core::ListingSummary;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub type ListingsState = FetchState<Vec<ListingSummary>>;
pub type ListingsStore = UseReducerHandle<ListingsState>;

/// Per-page listings store instance
#[hook]
pub fn use_listings_store() -> ListingsStore {
    use_reducer(ListingsState::default)
}

/// Fetch the seller's product and service listings
pub fn fetch_listings(store: ListingsStore) {
    let seq = store.next_seq();
    store.dispatch(FetchAction::Started(seq));
    spawn_local(async move {
        match ListingsApi::new().fetch_listings().await {
            Ok(listings) => store.dispatch(FetchAction::Resolved(seq, listings)),
            Err(message) => store.dispatch(FetchAction::Failed(seq, message)),
        }
    });
}
