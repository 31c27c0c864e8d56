use crux_core::Timestamp;

/// Port for time abstraction
///
/// Detection never reads the clock. Only history snapshots are stamped,
/// so tests can swap in a fixed clock and stay deterministic.
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> Timestamp;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
