//! Analysis Session - live re-derivation for one boulder
//!
//! The session owns the current series and reads the threshold from an
//! injected [`ThresholdStore`]. Every series or threshold change triggers a
//! full re-derivation through the injected [`MoveAnalyzer`]; no state from the
//! previous derivation is carried over.
//!
//! ```text
//!  load_series ─┐
//!  set_threshold┼──► MoveAnalyzer ──► AnalysisCache (ArcSwap)
//!  set_boulder ─┘                        │
//!                                        ├──► analysis()   (lock-free read)
//!                                        └──► watch channel (3D view, chart, stats)
//! ```
//!
//! Derivations run one at a time, each reading the series and threshold
//! current when it starts. Every series replacement bumps a generation
//! counter, and cached analyses are only served for the generation they were
//! derived from.

use std::sync::Arc;

use crux_clock::SystemClock;
use crux_core::{Analysis, BoulderId, Series, Threshold, ThresholdError};
use crux_detection::MovePipeline;
use crux_ports::{Clock, ConfigResult, MoveAnalyzer, ThresholdStore};
use log::{debug, info};
use parking_lot::{Mutex, RwLock};
use tokio::sync::watch;

use crate::cache::AnalysisCache;
use crate::config::CruxConfig;
use crate::history::HistoryEntry;
use crate::store::InMemoryThresholdStore;

#[derive(Debug, Default)]
struct Loaded {
    generation: u64,
    series: Arc<Series>,
}

/// Live analysis state for one boulder at a time
pub struct AnalysisSession {
    boulder: RwLock<BoulderId>,
    loaded: RwLock<Loaded>,
    store: Arc<dyn ThresholdStore>,
    analyzer: Arc<dyn MoveAnalyzer>,
    clock: Arc<dyn Clock>,
    cache: AnalysisCache,
    derivation: Mutex<()>,
    updates: watch::Sender<Arc<Analysis>>,
    history: Mutex<Vec<HistoryEntry>>,
}

impl AnalysisSession {
    pub fn new(
        boulder: BoulderId,
        store: Arc<dyn ThresholdStore>,
        analyzer: Arc<dyn MoveAnalyzer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let loaded = Loaded::default();
        let initial = Arc::new(analyzer.analyze(&loaded.series, store.get(&boulder)));
        let (updates, _) = watch::channel(Arc::clone(&initial));

        let cache = AnalysisCache::new();
        cache.store(loaded.generation, initial);

        Self {
            boulder: RwLock::new(boulder),
            loaded: RwLock::new(loaded),
            store,
            analyzer,
            clock,
            cache,
            derivation: Mutex::new(()),
            updates,
            history: Mutex::new(Vec::new()),
        }
    }

    /// Session with an in-memory store, the default pipeline and wall-clock time
    pub fn with_defaults(boulder: BoulderId) -> Self {
        Self::new(
            boulder,
            Arc::new(InMemoryThresholdStore::new()),
            Arc::new(MovePipeline::default()),
            Arc::new(SystemClock),
        )
    }

    /// Session built from configuration with its own in-memory store
    pub fn from_config(config: &CruxConfig, boulder: BoulderId) -> ConfigResult<Self> {
        config.validate()?;
        let store = InMemoryThresholdStore::with_default(config.threshold()?);
        let pipeline = MovePipeline::new(config.detection)?;
        Ok(Self::new(
            boulder,
            Arc::new(store),
            Arc::new(pipeline),
            Arc::new(SystemClock),
        ))
    }

    pub fn boulder(&self) -> BoulderId {
        self.boulder.read().clone()
    }

    pub fn series(&self) -> Arc<Series> {
        Arc::clone(&self.loaded.read().series)
    }

    /// Threshold currently in effect for this session's boulder
    pub fn threshold(&self) -> Threshold {
        self.store.get(&self.boulder.read())
    }

    /// Replace the series and re-derive
    pub fn load_series(&self, series: Series) -> Arc<Analysis> {
        info!(
            "Loaded series for {} ({} samples)",
            self.boulder.read(),
            series.len()
        );
        self.replace_series(series);
        self.rederive()
    }

    /// Drop the series; the analysis falls back to the start move only
    pub fn clear_series(&self) -> Arc<Analysis> {
        self.replace_series(Series::default());
        self.rederive()
    }

    /// Store a new threshold for the current boulder and re-derive
    pub fn set_threshold(&self, value: f64) -> Result<Arc<Analysis>, ThresholdError> {
        let threshold = Threshold::new(value)?;
        let boulder = self.boulder();
        info!("Threshold for {} changed to {}", boulder, threshold);
        self.store.set(&boulder, threshold);
        Ok(self.rederive())
    }

    /// Forget the boulder's threshold and re-derive with the store default
    pub fn reset_threshold(&self) -> Arc<Analysis> {
        self.store.reset(&self.boulder());
        self.rederive()
    }

    /// Switch to another boulder, picking up its stored threshold
    pub fn set_boulder(&self, boulder: BoulderId) -> Arc<Analysis> {
        info!("Switching session to boulder {}", boulder);
        *self.boulder.write() = boulder;
        self.rederive()
    }

    /// Current analysis
    ///
    /// Served from the cache while neither the series nor the stored
    /// threshold has changed. If the shared store was changed elsewhere, the
    /// analysis is re-derived first.
    pub fn analysis(&self) -> Arc<Analysis> {
        let generation = self.loaded.read().generation;
        match self.cache.get(generation, self.threshold()) {
            Some(analysis) => analysis,
            None => self.rederive(),
        }
    }

    /// Receive every new analysis as it is derived
    pub fn subscribe(&self) -> watch::Receiver<Arc<Analysis>> {
        self.updates.subscribe()
    }

    /// Force a fresh derivation from the current series and threshold
    pub fn refresh(&self) -> Arc<Analysis> {
        self.rederive()
    }

    /// Snapshot the current analysis into the session history
    pub fn freeze(&self) -> HistoryEntry {
        let analysis = self.analysis();
        let entry = HistoryEntry::new(self.boulder(), (*analysis).clone(), self.clock.now());
        debug!(
            "Froze analysis {} for {} ({} moves)",
            entry.id,
            entry.boulder,
            entry.analysis.moves.len()
        );
        self.history.lock().push(entry.clone());
        entry
    }

    /// History snapshots, oldest first
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.lock().clone()
    }

    pub fn clear_history(&self) {
        self.history.lock().clear();
    }

    fn replace_series(&self, series: Series) {
        let mut loaded = self.loaded.write();
        loaded.generation += 1;
        loaded.series = Arc::new(series);
    }

    fn rederive(&self) -> Arc<Analysis> {
        let _guard = self.derivation.lock();

        let (generation, series) = {
            let loaded = self.loaded.read();
            (loaded.generation, Arc::clone(&loaded.series))
        };
        let threshold = self.threshold();
        let analysis = Arc::new(self.analyzer.analyze(&series, threshold));

        debug!(
            "{} re-derived {} moves at {} for {} (generation {})",
            self.analyzer.name(),
            analysis.moves.len(),
            threshold,
            self.boulder.read(),
            generation
        );

        self.cache.store(generation, Arc::clone(&analysis));
        self.updates.send_replace(Arc::clone(&analysis));
        analysis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crux_clock::FixedClock;

    fn example_series() -> Series {
        Series::new(
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
            vec![9.8, 10.0, 25.0, 9.0, 30.0, 9.0],
        )
        .unwrap()
    }

    #[test]
    fn test_initial_analysis_is_start_only() {
        let session = AnalysisSession::with_defaults(BoulderId::from("b1"));
        let analysis = session.analysis();
        assert_eq!(analysis.moves.len(), 1);
        assert_eq!(analysis.threshold, Threshold::DEFAULT);
    }

    #[test]
    fn test_threshold_change_rederives() {
        let session = AnalysisSession::with_defaults(BoulderId::from("b1"));
        session.load_series(example_series());
        assert_eq!(session.analysis().moves.len(), 3);

        let analysis = session.set_threshold(26.0).unwrap();
        assert_eq!(analysis.moves.len(), 2);
        assert_eq!(session.analysis().moves.detected()[0].time, 4.0);

        let analysis = session.set_threshold(35.0).unwrap();
        assert_eq!(analysis.moves.len(), 1);
    }

    #[test]
    fn test_invalid_threshold_keeps_previous() {
        let session = AnalysisSession::with_defaults(BoulderId::from("b1"));
        session.load_series(example_series());
        assert!(session.set_threshold(-1.0).is_err());
        assert_eq!(session.threshold(), Threshold::DEFAULT);
        assert_eq!(session.analysis().moves.len(), 3);
    }

    #[test]
    fn test_clear_series() {
        let session = AnalysisSession::with_defaults(BoulderId::from("b1"));
        session.load_series(example_series());
        let analysis = session.clear_series();
        assert_eq!(analysis.moves.len(), 1);
        assert_eq!(analysis.stats.sample_count, 0);
    }

    #[test]
    fn test_freeze_is_independent_of_later_changes() {
        let clock = Arc::new(FixedClock::at_epoch());
        let session = AnalysisSession::new(
            BoulderId::from("b1"),
            Arc::new(InMemoryThresholdStore::new()),
            Arc::new(MovePipeline::default()),
            clock.clone(),
        );
        session.load_series(example_series());

        let first = session.freeze();
        clock.advance(Duration::seconds(5));
        session.set_threshold(26.0).unwrap();
        let second = session.freeze();

        assert_eq!(first.climbing_moves(), 2);
        assert_eq!(second.climbing_moves(), 1);
        assert_eq!(first.captured_at.timestamp(), 0);
        assert_eq!(second.captured_at.timestamp(), 5);
        assert_ne!(first.id, second.id);

        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], first);

        session.clear_history();
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_default_session_stamps_wall_clock_time() {
        let session = AnalysisSession::with_defaults(BoulderId::from("b1"));
        let before = chrono::Utc::now();
        let entry = session.freeze();
        let after = chrono::Utc::now();
        assert!(before <= entry.captured_at && entry.captured_at <= after);
    }

    #[test]
    fn test_replaced_series_is_never_served_from_cache() {
        let session = AnalysisSession::with_defaults(BoulderId::from("b1"));
        session.load_series(example_series());
        assert_eq!(session.analysis().stats.sample_count, 6);

        // Same threshold, new series: the old derivation must not be reused
        *session.loaded.write() = Loaded {
            generation: 7,
            series: Arc::new(Series::new(vec![0.0, 1.0, 2.0], vec![9.0, 20.0, 9.0]).unwrap()),
        };
        let analysis = session.analysis();
        assert_eq!(analysis.stats.sample_count, 3);
        assert_eq!(analysis.moves.len(), 2);
    }
}
