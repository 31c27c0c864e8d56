//! Crux Detection
//!
//! Derives climbing moves from an acceleration magnitude series:
//!
//! ```text
//! Series ──► MoveDetector ──► MoveSet ──┬──► SpanEnricher ──► Vec<MoveSpan>
//!   │            │                      │
//!   │       DynamicsMapper              └──► StatsAggregator ──► MoveStats
//!   │     (dynamics, crux flag)                    ▲
//!   └──────────────────────────────────────────────┘
//! ```
//!
//! [`MovePipeline`] bundles all three steps into one [`crux_core::Analysis`]
//! so every consumer reads the same derivation. Everything here is pure and
//! synchronous; re-running on the same input gives identical output.

mod config;
mod detector;
mod dynamics;
mod pipeline;
mod spans;
mod stats;

pub use config::{CHART_DIVISOR, DetectionConfig, VISUALIZER_DIVISOR};
pub use detector::{MoveDetector, detect_moves};
pub use dynamics::{Classification, DynamicsMapper};
pub use pipeline::MovePipeline;
pub use spans::SpanEnricher;
pub use stats::StatsAggregator;
