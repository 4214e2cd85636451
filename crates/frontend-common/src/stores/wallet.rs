//! Wallet balance store

use crate::services::wallet::WalletApi;
use crate::stores::fetch::{FetchAction, FetchState};
use souk_core::WalletBalance;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub type WalletState = FetchState<WalletBalance>;
pub type WalletStore = UseReducerHandle<WalletState>;

/// Per-page wallet store instance
#[hook]
pub fn use_wallet_store() -> WalletStore {
    use_reducer(WalletState::default)
}

/// Fetch the current wallet balance
pub fn fetch_wallet_balance(store: WalletStore) {
    let seq = store.next_seq();
    store.dispatch(FetchAction::Started(seq));
    spawn_local(async move {
        match WalletApi::new().fetch_balance().await {
            Ok(balance) => store.dispatch(FetchAction::Resolved(seq, balance)),
            Err(message) => store.dispatch(FetchAction::Failed(seq, message)),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::TRANSPORT_ERROR_MESSAGE;
    use std::rc::Rc;

    fn reduce(state: WalletState, action: FetchAction<WalletBalance>) -> WalletState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn balance(available: f64) -> WalletBalance {
        WalletBalance {
            available,
            pending: 0.0,
            currency: "USD".to_string(),
        }
    }

    #[test]
    fn transport_error_ends_loading_with_message_and_keeps_balance() {
        let state = reduce(WalletState::default(), FetchAction::Started(1));
        let state = reduce(state, FetchAction::Resolved(1, balance(80.5)));

        // A re-fetch whose request throws at the transport layer
        let state = reduce(state, FetchAction::Started(2));
        let state = reduce(
            state,
            FetchAction::Failed(2, TRANSPORT_ERROR_MESSAGE.to_string()),
        );

        assert!(!state.loading);
        assert!(state.error.as_ref().is_some_and(|e| !e.is_empty()));
        assert_eq!(state.data, Some(balance(80.5)));
    }
}
