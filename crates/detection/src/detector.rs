//! Move detection
//!
//! Turns an acceleration magnitude series into discrete moves using a
//! three-point local-maximum test and a refractory gap:
//!
//! ```text
//!   magnitude
//!      │          ●                ●
//!      │ ─ ─ ─ ─ ╱ ╲ ─ ─ ─ ─ ─ ─ ─╱╲─ ─ threshold
//!      │   ●    ╱   ●            ╱  ●
//!      │  ╱ ╲  ●     ╲   ●──●   ●
//!      │ ●   ●        ●─╱    ╲─╱
//!      └──────────────────────────────── time
//!               move 2          move 3
//! ```
//!
//! A sample is a move when it is finite, strictly above the threshold,
//! strictly above both neighbours, and more than `min_move_gap` seconds after
//! the previous move. The first and last samples are never tested. A
//! synthetic start move at `time = 0` always opens the sequence.

use crux_core::{MoveSet, Series, Threshold};
use log::debug;

use crate::config::DetectionConfig;
use crate::dynamics::DynamicsMapper;

/// Stateless peak detector
///
/// Holds only constants, so a single instance can be shared by every
/// consumer and called on each threshold change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveDetector {
    min_move_gap: f64,
    start_fallback: f64,
    mapper: DynamicsMapper,
}

impl MoveDetector {
    pub fn new(config: DetectionConfig) -> Self {
        Self {
            min_move_gap: config.min_move_gap,
            start_fallback: config.start_fallback,
            mapper: DynamicsMapper::from_config(&config),
        }
    }

    pub fn mapper(&self) -> &DynamicsMapper {
        &self.mapper
    }

    pub fn min_move_gap(&self) -> f64 {
        self.min_move_gap
    }

    /// Detect moves in `series` above `threshold`
    ///
    /// Never fails and never returns an empty set.
    pub fn detect(&self, series: &Series, threshold: Threshold) -> MoveSet {
        let time = series.time();
        let magnitude = series.magnitude();

        let start_accel = magnitude
            .first()
            .copied()
            .filter(|a| a.is_finite())
            .unwrap_or(self.start_fallback);
        let mut moves = MoveSet::builder(start_accel, self.mapper.classify_start().dynamics);

        if magnitude.len() < 3 {
            return moves.build();
        }

        let limit = threshold.value();
        let mut last_move_time: Option<f64> = None;

        for i in 1..magnitude.len() - 1 {
            let a = magnitude[i];
            let t = time[i];

            if !is_peak(a, limit, magnitude[i - 1], magnitude[i + 1]) {
                continue;
            }
            let clear_of_last = last_move_time.is_none_or(|last| t - last > self.min_move_gap);
            if !clear_of_last {
                continue;
            }

            let class = self.mapper.classify(a, threshold);
            moves.push(t, a, class.dynamics, class.is_crux);
            last_move_time = Some(t);
        }

        let moves = moves.build();
        debug!(
            "Detected {} moves in {} samples (threshold {})",
            moves.detected().len(),
            magnitude.len(),
            threshold
        );
        moves
    }
}

impl Default for MoveDetector {
    fn default() -> Self {
        Self::new(DetectionConfig::default())
    }
}

/// Three-point strict local maximum above `limit`
///
/// Every comparison involving NaN is false, so malformed samples never
/// qualify and never let a neighbour qualify.
#[inline]
fn is_peak(a: f64, limit: f64, prev: f64, next: f64) -> bool {
    a.is_finite() && a > limit && a > prev && a > next
}

/// Detect moves with the default configuration, tolerating a missing series
pub fn detect_moves(series: Option<&Series>, threshold: Threshold) -> MoveSet {
    let detector = MoveDetector::default();
    match series {
        Some(series) => detector.detect(series, threshold),
        None => detector.detect(&Series::default(), threshold),
    }
}
