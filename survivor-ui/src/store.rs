//! Shared data-access layer. Provided once by the shell; every view reads
//! the same slots, so each endpoint is requested at most once per mount of
//! the shell.

use crate::bridge::HttpSource;
use leptos::*;
use survivor_model::sync::{FetchSlot, SyncOutcome};
use survivor_model::{
    sync_once, CancelToken, FetchError, FetchState, InfectionStats, SurvivorRecord,
    SurvivorSource,
};
use wasm_bindgen_futures::spawn_local;

struct SignalSlot<T: 'static>(RwSignal<FetchState<T>>);

impl<T: 'static> FetchSlot<T> for SignalSlot<T> {
    fn modify<O>(&self, f: impl FnOnce(&mut FetchState<T>) -> O) -> Option<O> {
        self.0.try_update(f)
    }
}

#[derive(Clone, Copy)]
pub struct SurvivorStore {
    pub survivors: RwSignal<FetchState<Vec<SurvivorRecord>>>,
    pub stats: RwSignal<FetchState<InfectionStats>>,
    source: StoredValue<HttpSource>,
    alive: StoredValue<CancelToken>,
}

impl SurvivorStore {
    /// Creates the store in the current owner and publishes it as context.
    /// Responses landing after that owner is cleaned up are discarded.
    pub fn provide(source: HttpSource) -> Self {
        let alive = CancelToken::new();
        let store = Self {
            survivors: create_rw_signal(FetchState::Idle),
            stats: create_rw_signal(FetchState::Idle),
            source: store_value(source),
            alive: store_value(alive.clone()),
        };
        on_cleanup(move || alive.cancel());
        provide_context(store);
        store
    }

    pub fn ensure_survivors(&self) {
        let source = self.source.try_get_value();
        let token = self.alive.try_get_value();
        let (Some(source), Some(token)) = (source, token) else {
            return;
        };
        let slot = SignalSlot(self.survivors);
        spawn_local(async move {
            let outcome =
                sync_once(&slot, &token, "survivors", || source.fetch_survivors()).await;
            if outcome == SyncOutcome::Loaded {
                let count = slot.0.try_with_untracked(|s| s.ready().map(Vec::len));
                log::debug!("survivors: {} records", count.flatten().unwrap_or(0));
            }
        });
    }

    pub fn ensure_stats(&self) {
        let source = self.source.try_get_value();
        let token = self.alive.try_get_value();
        let (Some(source), Some(token)) = (source, token) else {
            return;
        };
        let slot = SignalSlot(self.stats);
        spawn_local(async move {
            let fetch = || async move {
                let stats = source.fetch_infection_stats().await?;
                if !stats.is_consistent() {
                    log::warn!(
                        "stats do not add up to 100: infected={} healthy={}",
                        stats.infected_percentage,
                        stats.healthy_percentage
                    );
                }
                Ok::<_, FetchError>(stats)
            };
            sync_once(&slot, &token, "stats", fetch).await;
        });
    }
}

pub fn use_survivor_store() -> SurvivorStore {
    expect_context::<SurvivorStore>()
}
