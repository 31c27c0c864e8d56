use crux_core::{BoulderId, Threshold};
use crux_ports::ThresholdStore;
use dashmap::DashMap;
use log::debug;

/// Thread-safe in-memory threshold store
///
/// Can be shared across sessions behind an `Arc`; boulders without an entry
/// resolve to the configured default.
#[derive(Debug)]
pub struct InMemoryThresholdStore {
    thresholds: DashMap<BoulderId, Threshold>,
    default: Threshold,
}

impl InMemoryThresholdStore {
    pub fn new() -> Self {
        Self::with_default(Threshold::DEFAULT)
    }

    pub fn with_default(default: Threshold) -> Self {
        Self {
            thresholds: DashMap::new(),
            default,
        }
    }

    /// Whether a boulder has an explicit threshold
    pub fn contains(&self, boulder: &BoulderId) -> bool {
        self.thresholds.contains_key(boulder)
    }

    /// Number of boulders with an explicit threshold
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }
}

impl Default for InMemoryThresholdStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ThresholdStore for InMemoryThresholdStore {
    fn get(&self, boulder: &BoulderId) -> Threshold {
        self.thresholds
            .get(boulder)
            .map(|t| *t)
            .unwrap_or(self.default)
    }

    fn set(&self, boulder: &BoulderId, threshold: Threshold) {
        debug!("Threshold for {} set to {}", boulder, threshold);
        self.thresholds.insert(boulder.clone(), threshold);
    }

    fn reset(&self, boulder: &BoulderId) {
        self.thresholds.remove(boulder);
    }

    fn default_threshold(&self) -> Threshold {
        self.default
    }
}
