//! Crux Ports
//!
//! Port definitions (traits) for climbing move detection.
//! These define the boundaries between the pure detection core and the
//! collaborators around it (threshold storage, clocks, consumers).

mod analyzer;
mod clock;
mod error;
mod threshold;

pub use analyzer::MoveAnalyzer;
pub use clock::Clock;
pub use error::{ConfigError, ConfigResult};
pub use threshold::ThresholdStore;
