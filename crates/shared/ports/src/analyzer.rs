use crux_core::{Analysis, Series, Threshold};

/// Port for deriving moves from a series
///
/// Implementations must be pure: the same `(series, threshold)` pair always
/// yields an identical `Analysis`.
pub trait MoveAnalyzer: Send + Sync {
    fn analyze(&self, series: &Series, threshold: Threshold) -> Analysis;

    /// Get analyzer name for logging
    fn name(&self) -> &str {
        "MoveAnalyzer"
    }
}
