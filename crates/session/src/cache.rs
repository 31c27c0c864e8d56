use std::sync::Arc;

use arc_swap::ArcSwapOption;
use crux_core::{Analysis, Threshold};

#[derive(Debug)]
struct Cached {
    generation: u64,
    analysis: Arc<Analysis>,
}

/// Latest analysis, readable without locks
///
/// Holds a single derivation tagged with the series generation it was
/// derived from. A read only hits when both the generation and the threshold
/// match; anything else is a miss and the caller re-derives.
#[derive(Debug, Default)]
pub struct AnalysisCache {
    current: ArcSwapOption<Cached>,
}

impl AnalysisCache {
    pub fn new() -> Self {
        Self {
            current: ArcSwapOption::empty(),
        }
    }

    /// Cached analysis regardless of generation or threshold
    pub fn latest(&self) -> Option<Arc<Analysis>> {
        self.current
            .load_full()
            .map(|cached| Arc::clone(&cached.analysis))
    }

    /// Cached analysis if it was derived from `generation` with `threshold`
    pub fn get(&self, generation: u64, threshold: Threshold) -> Option<Arc<Analysis>> {
        self.current
            .load_full()
            .filter(|cached| {
                cached.generation == generation && cached.analysis.threshold == threshold
            })
            .map(|cached| Arc::clone(&cached.analysis))
    }

    pub fn store(&self, generation: u64, analysis: Arc<Analysis>) {
        self.current.store(Some(Arc::new(Cached {
            generation,
            analysis,
        })));
    }

    pub fn invalidate(&self) {
        self.current.store(None);
    }
}
