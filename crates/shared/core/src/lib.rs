//! Crux Core Domain
//!
//! Pure domain types for climbing move detection: the acceleration
//! series, detected moves, spans between moves and summary statistics.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    Analysis, Move, MoveSet, MoveSetBuilder, MoveSpan, MoveStats, Series, SeriesError,
};
pub use values::{BoulderId, Dynamics, Threshold, ThresholdError, Timestamp};
