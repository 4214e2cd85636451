//! Shared state shape for the read-endpoint stores
//!
//! Every store follows the same lifecycle: mark loading, call one backend
//! read endpoint, then either replace the data wholesale or surface an
//! error while the prior data stays put. Loading and error are never set
//! at the same time, and a failed fetch never clobbers data.

use std::rc::Rc;
use yew::Reducible;

/// State of one fetch-and-cache store
#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    /// Sequence token of the most recently started fetch; completions
    /// carrying an older token are discarded so a slow stale request can
    /// never overwrite fresher data.
    pub seq: u64,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            seq: 0,
        }
    }
}

impl<T> FetchState<T> {
    /// Token for the next fetch to start
    pub fn next_seq(&self) -> u64 {
        self.seq.wrapping_add(1)
    }
}

/// Store actions
pub enum FetchAction<T> {
    /// A fetch with the given token began
    Started(u64),
    /// The fetch with the given token resolved successfully
    Resolved(u64, T),
    /// The fetch with the given token failed with a user-facing message
    Failed(u64, String),
    /// Drop a sticky error without touching the data
    ClearError,
}

impl<T: Clone + PartialEq> Reducible for FetchState<T> {
    type Action = FetchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FetchAction::Started(seq) => Rc::new(Self {
                data: self.data.clone(),
                loading: true,
                error: None,
                seq,
            }),
            FetchAction::Resolved(seq, value) => {
                if seq != self.seq {
                    // Stale completion; a newer fetch owns the state now
                    return self;
                }
                Rc::new(Self {
                    data: Some(value),
                    loading: false,
                    error: None,
                    seq,
                })
            }
            FetchAction::Failed(seq, message) => {
                if seq != self.seq {
                    return self;
                }
                Rc::new(Self {
                    data: self.data.clone(),
                    loading: false,
                    error: Some(message),
                    seq,
                })
            }
            FetchAction::ClearError => Rc::new(Self {
                error: None,
                ..(*self).clone()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: FetchState<u32>, action: FetchAction<u32>) -> FetchState<u32> {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn loaded(value: u32, seq: u64) -> FetchState<u32> {
        FetchState {
            data: Some(value),
            loading: false,
            error: None,
            seq,
        }
    }

    #[test]
    fn start_sets_loading_and_clears_error() {
        let state = FetchState::<u32> {
            error: Some("old".to_string()),
            ..FetchState::default()
        };
        let state = reduce(state, FetchAction::Started(1));
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn loading_and_error_are_never_both_set() {
        let mut state = FetchState::<u32>::default();
        for action in [
            FetchAction::Started(1),
            FetchAction::Failed(1, "x".to_string()),
            FetchAction::Started(2),
            FetchAction::Resolved(2, 7),
        ] {
            state = reduce(state, action);
            assert!(!(state.loading && state.error.is_some()));
        }
    }

    #[test]
    fn failure_keeps_prior_data() {
        let state = reduce(loaded(41, 1), FetchAction::Started(2));
        let state = reduce(state, FetchAction::Failed(2, "backend said no".to_string()));
        assert_eq!(state.data, Some(41));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("backend said no"));
    }

    #[test]
    fn stale_resolution_is_discarded() {
        // Fetch 1 starts, then fetch 2 starts and resolves first
        let state = reduce(FetchState::default(), FetchAction::Started(1));
        let state = reduce(state, FetchAction::Started(2));
        let state = reduce(state, FetchAction::Resolved(2, 20));

        // The slow fetch 1 finally lands and must not win
        let state = reduce(state, FetchAction::Resolved(1, 10));
        assert_eq!(state.data, Some(20));

        // Nor may its failure disturb the fresher data
        let state = reduce(state, FetchAction::Failed(1, "too late".to_string()));
        assert_eq!(state.data, Some(20));
        assert_eq!(state.error, None);
    }

    #[test]
    fn clear_error_preserves_data() {
        let state = reduce(loaded(5, 3), FetchAction::Started(4));
        let state = reduce(state, FetchAction::Failed(4, "x".to_string()));
        let state = reduce(state, FetchAction::ClearError);
        assert_eq!(state.data, Some(5));
        assert_eq!(state.error, None);
    }
}
