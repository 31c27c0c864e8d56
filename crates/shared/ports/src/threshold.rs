use crux_core::{BoulderId, Threshold};

/// Port for per-boulder threshold preferences
///
/// Unset boulders resolve to the store's default. Persistence is left to
/// the implementation; the detection core only ever reads a `Threshold`.
pub trait ThresholdStore: Send + Sync {
    /// Threshold for a boulder, or the default when none was set
    fn get(&self, boulder: &BoulderId) -> Threshold;

    /// Set the threshold for a boulder
    fn set(&self, boulder: &BoulderId, threshold: Threshold);

    /// Forget a boulder's threshold so it falls back to the default
    fn reset(&self, boulder: &BoulderId);

    /// Threshold returned for boulders with no explicit value
    fn default_threshold(&self) -> Threshold {
        Threshold::DEFAULT
    }
}
