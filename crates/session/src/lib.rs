//! Crux Session
//!
//! Explicit, injectable state around the pure detection core:
//!
//! - [`InMemoryThresholdStore`]: per-boulder thresholds (default 12.0 m/s²)
//! - [`AnalysisCache`]: latest derivation, lock-free reads
//! - [`AnalysisSession`]: re-derives on every series/threshold change and
//!   publishes the result to every subscribed view
//! - [`HistoryEntry`]: frozen analysis snapshots
//! - [`CruxConfig`]: JSON configuration

mod cache;
mod config;
mod history;
mod session;
mod store;

pub use cache::AnalysisCache;
pub use config::CruxConfig;
pub use history::HistoryEntry;
pub use session::AnalysisSession;
pub use store::InMemoryThresholdStore;
