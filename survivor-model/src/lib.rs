//! Wire types, view models and fetch bookkeeping for the survivors front end.
//!
//! Nothing in here touches browser APIs, so the whole crate is exercised by
//! `cargo test` on the host.

pub mod chart;
pub mod config;
pub mod dto;
pub mod error;
pub mod grid;
pub mod intake;
pub mod sync;

pub use config::{ApiConfig, Panels, UiConfig};
pub use dto::{InfectionStats, SurvivorRecord};
pub use error::FetchError;
pub use sync::{guarded, sync_once, CancelToken, FetchState, SurvivorSource};
