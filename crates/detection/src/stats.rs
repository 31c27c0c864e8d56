//! Attempt statistics
//!
//! Reduces the raw series and the detected moves into the figures shown on
//! the summary cards.

use crux_core::{MoveSet, MoveStats, Series};

/// Computes [`MoveStats`] for one attempt
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsAggregator;

impl StatsAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Summarize a series and its moves
    ///
    /// Non-finite magnitudes are left out of max/avg but still counted in
    /// `sample_count`. `move_count` includes the synthetic start move.
    pub fn summarize(&self, series: &Series, moves: &MoveSet) -> MoveStats {
        let (max, sum, finite) = series
            .magnitude()
            .iter()
            .copied()
            .filter(|a| a.is_finite())
            .fold((f64::NEG_INFINITY, 0.0, 0usize), |(max, sum, n), a| {
                (max.max(a), sum + a, n + 1)
            });

        let (max_acceleration, avg_acceleration) = if finite == 0 {
            (0.0, 0.0)
        } else {
            (max, sum / finite as f64)
        };

        let duration = match (series.first_time(), series.last_time()) {
            (Some(first), Some(last)) if series.len() >= 2 => last - first,
            _ => 0.0,
        };

        MoveStats {
            max_acceleration,
            avg_acceleration,
            move_count: moves.len(),
            crux_count: moves.crux_moves().count(),
            duration,
            sample_count: series.magnitude().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::MoveDetector;
    use crux_core::Threshold;

    #[test]
    fn test_summarize_example() {
        let series = Series::new(
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
            vec![9.8, 10.0, 25.0, 9.0, 30.0, 9.0],
        )
        .unwrap();
        let moves = MoveDetector::default().detect(&series, Threshold::new(15.0).unwrap());
        let stats = StatsAggregator::new().summarize(&series, &moves);

        assert_eq!(stats.max_acceleration, 30.0);
        assert!((stats.avg_acceleration - 92.8 / 6.0).abs() < 1e-12);
        assert_eq!(stats.move_count, 3);
        assert_eq!(stats.crux_count, 2);
        assert_eq!(stats.duration, 5.0);
        assert_eq!(stats.sample_count, 6);
    }

    #[test]
    fn test_empty_series_degrades_to_zero() {
        let series = Series::default();
        let moves = MoveDetector::default().detect(&series, Threshold::DEFAULT);
        let stats = StatsAggregator::new().summarize(&series, &moves);

        assert_eq!(stats.max_acceleration, 0.0);
        assert_eq!(stats.avg_acceleration, 0.0);
        assert_eq!(stats.duration, 0.0);
        assert_eq!(stats.sample_count, 0);
        // start move is still counted
        assert_eq!(stats.move_count, 1);
    }

    #[test]
    fn test_single_sample_has_no_duration() {
        let series = Series::new(vec![3.0], vec![11.0]).unwrap();
        let moves = MoveDetector::default().detect(&series, Threshold::DEFAULT);
        let stats = StatsAggregator::new().summarize(&series, &moves);
        assert_eq!(stats.duration, 0.0);
        assert_eq!(stats.max_acceleration, 11.0);
    }

    #[test]
    fn test_non_finite_samples_skipped() {
        let series = Series::new(vec![0.0, 1.0, 2.0], vec![10.0, f64::NAN, 20.0]).unwrap();
        let moves = MoveDetector::default().detect(&series, Threshold::DEFAULT);
        let stats = StatsAggregator::new().summarize(&series, &moves);
        assert_eq!(stats.max_acceleration, 20.0);
        assert_eq!(stats.avg_acceleration, 15.0);
        assert_eq!(stats.sample_count, 3);
    }
}
