//! Fetch-on-mount bookkeeping shared by every view.
//!
//! A slot starts `Idle`, is claimed by the first view that mounts, and is
//! settled exactly once. Responses that arrive after the owning scope was
//! torn down are dropped instead of written.

use crate::dto::{InfectionStats, SurvivorRecord};
use crate::error::FetchError;
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

/// The two reads the views depend on.
#[allow(async_fn_in_trait)]
pub trait SurvivorSource {
    async fn fetch_survivors(&self) -> Result<Vec<SurvivorRecord>, FetchError>;
    async fn fetch_infection_stats(&self) -> Result<InfectionStats, FetchError>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(FetchError),
}

impl<T> FetchState<T> {
    /// Claims an idle slot. Returns whether the caller must issue the request.
    pub fn begin(&mut self) -> bool {
        if matches!(self, FetchState::Idle) {
            *self = FetchState::Loading;
            true
        } else {
            false
        }
    }

    pub fn resolve(&mut self, result: Result<T, FetchError>) {
        *self = match result {
            Ok(value) => FetchState::Ready(value),
            Err(err) => FetchState::Failed(err),
        };
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Lifetime flag of whatever scope launched a request.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Awaits `fut` and hands back its output only if `token` is still live.
pub async fn guarded<F: Future>(token: &CancelToken, fut: F) -> Option<F::Output> {
    let output = fut.await;
    if token.is_cancelled() {
        None
    } else {
        Some(output)
    }
}

/// Somewhere a `FetchState` lives. `modify` returns `None` when the slot is
/// gone (for a reactive signal: disposed with its owner).
pub trait FetchSlot<T> {
    fn modify<O>(&self, f: impl FnOnce(&mut FetchState<T>) -> O) -> Option<O>;
}

impl<T> FetchSlot<T> for RefCell<FetchState<T>> {
    fn modify<O>(&self, f: impl FnOnce(&mut FetchState<T>) -> O) -> Option<O> {
        self.try_borrow_mut().ok().map(|mut state| f(&mut state))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Another caller already claimed the slot.
    Skipped,
    Loaded,
    Failed,
    /// The owner or the slot was torn down, so nothing was stored.
    Discarded,
}

/// One fetch-on-mount cycle: claim the slot, run `fetch`, store the result.
///
/// Failures are logged and kept in the slot; nothing is retried.
pub async fn sync_once<T, S, F, Fut>(
    slot: &S,
    token: &CancelToken,
    what: &str,
    fetch: F,
) -> SyncOutcome
where
    S: FetchSlot<T>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
{
    if token.is_cancelled() {
        return SyncOutcome::Discarded;
    }
    match slot.modify(FetchState::begin) {
        Some(true) => {}
        Some(false) => return SyncOutcome::Skipped,
        None => return SyncOutcome::Discarded,
    }
    log::debug!("{what}: fetching");

    let Some(result) = guarded(token, fetch()).await else {
        log::debug!("{what}: owner torn down, response discarded");
        return SyncOutcome::Discarded;
    };
    let outcome = match &result {
        Ok(_) => SyncOutcome::Loaded,
        Err(err) => {
            log::error!("{what}: {err}");
            SyncOutcome::Failed
        }
    };
    match slot.modify(|state| state.resolve(result)) {
        Some(()) => outcome,
        None => SyncOutcome::Discarded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn begin_claims_only_an_idle_slot() {
        let mut state = FetchState::<u8>::Idle;
        assert!(state.begin());
        assert!(state.is_loading());
        assert!(!state.begin());

        state.resolve(Err(FetchError::Transport("offline".into())));
        assert!(!state.begin(), "a failed slot is never retried");

        let mut loaded = FetchState::Ready(1u8);
        assert!(!loaded.begin());
        assert_eq!(loaded.ready(), Some(&1));
    }

    #[test]
    fn resolve_replaces_wholesale() {
        let mut state = FetchState::Ready(vec![1, 2, 3]);
        state.resolve(Ok(vec![9]));
        assert_eq!(state, FetchState::Ready(vec![9]));

        state.resolve(Err(FetchError::Decode("eof".into())));
        assert_eq!(state.ready(), None);
        assert_eq!(state.error(), Some(&FetchError::Decode("eof".into())));
    }

    #[test]
    fn guarded_drops_output_after_cancel() {
        let token = CancelToken::new();
        assert_eq!(block_on(guarded(&token, async { 5 })), Some(5));

        let clone = token.clone();
        let late = guarded(&token, async move {
            clone.cancel();
            5
        });
        assert_eq!(block_on(late), None);
        assert!(token.is_cancelled());
    }

    #[test]
    fn second_sync_on_the_same_slot_is_skipped() {
        let slot = RefCell::new(FetchState::Idle);
        let token = CancelToken::new();

        let issued = Cell::new(0);
        let fetch = || {
            issued.set(issued.get() + 1);
            async { Ok(1u8) }
        };

        let first = block_on(sync_once(&slot, &token, "stats", fetch));
        let second = block_on(sync_once(&slot, &token, "stats", fetch));

        assert_eq!(first, SyncOutcome::Loaded);
        assert_eq!(second, SyncOutcome::Skipped);
        assert_eq!(issued.get(), 1);
        assert_eq!(slot.borrow().ready(), Some(&1));
    }

    #[test]
    fn cancelled_token_skips_the_request_entirely() {
        let slot = RefCell::new(FetchState::<u8>::Idle);
        let token = CancelToken::new();
        token.cancel();

        let issued = Cell::new(false);
        let outcome = block_on(sync_once(&slot, &token, "survivors", || {
            issued.set(true);
            async { Ok(3u8) }
        }));
        assert_eq!(outcome, SyncOutcome::Discarded);
        assert!(!issued.get());
        assert_eq!(*slot.borrow(), FetchState::Idle);
    }
}
