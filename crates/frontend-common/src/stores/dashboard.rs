//! Dashboard metrics store

use crate::services::dashboard::DashboardApi;
use crate::stores::fetch::{FetchAction, FetchState};
use souk_core::DashboardMetrics;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub type DashboardState = FetchState<DashboardMetrics>;
pub type DashboardStore = UseReducerHandle<DashboardState>;

/// Per-page dashboard store instance
#[hook]
pub fn use_dashboard_store() -> DashboardStore {
    use_reducer(DashboardState::default)
}

/// Fetch the latest sales/order metrics
///
/// Caller-initiated only; there is no polling and no retry.
pub fn fetch_dashboard_data(store: DashboardStore) {
    let seq = store.next_seq();
    store.dispatch(FetchAction::Started(seq));
    spawn_local(async move {
        match DashboardApi::new().fetch_stats().await {
            Ok(metrics) => store.dispatch(FetchAction::Resolved(seq, metrics)),
            Err(message) => store.dispatch(FetchAction::Failed(seq, message)),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn reduce(state: DashboardState, action: FetchAction<DashboardMetrics>) -> DashboardState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn metrics(orders: u64) -> DashboardMetrics {
        DashboardMetrics {
            order_count: orders,
            ..DashboardMetrics::default()
        }
    }

    #[test]
    fn backend_failure_leaves_metrics_unchanged() {
        let state = reduce(DashboardState::default(), FetchAction::Started(1));
        let state = reduce(state, FetchAction::Resolved(1, metrics(12)));

        // A re-fetch that the backend rejects with {success:false, error:{message:"X"}}
        let state = reduce(state, FetchAction::Started(2));
        let state = reduce(state, FetchAction::Failed(2, "X".to_string()));

        assert_eq!(state.data, Some(metrics(12)));
        assert_eq!(state.error.as_deref(), Some("X"));
        assert!(!state.loading);
    }

    #[test]
    fn successful_fetch_replaces_metrics_wholesale() {
        let state = reduce(DashboardState::default(), FetchAction::Started(1));
        let state = reduce(state, FetchAction::Resolved(1, metrics(12)));
        let state = reduce(state, FetchAction::Started(2));
        let state = reduce(state, FetchAction::Resolved(2, metrics(30)));
        assert_eq!(state.data, Some(metrics(30)));
        assert_eq!(state.error, None);
    }
}
