//! Span enrichment
//!
//! Layers interval information on top of detected moves for shaded-region
//! rendering. Each adjacent pair of moves `(m[k], m[k+1])` yields one span
//! covering `[m[k].time, m[k+1].time)`.

use crux_core::{MoveSet, MoveSpan, Series};

/// Builds spans between consecutive moves
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanEnricher;

impl SpanEnricher {
    pub fn new() -> Self {
        Self
    }

    pub fn enrich(&self, series: &Series, moves: &MoveSet) -> Vec<MoveSpan> {
        moves
            .as_slice()
            .windows(2)
            .map(|pair| {
                let (from, to) = (&pair[0], &pair[1]);
                let (avg_acceleration, sample_count) =
                    mean_in_window(series, from.time, to.time);
                MoveSpan {
                    from_index: from.index,
                    to_index: to.index,
                    start_time: from.time,
                    end_time: to.time,
                    avg_acceleration,
                    sample_count,
                }
            })
            .collect()
    }
}

/// Mean of finite magnitudes with `start <= time < end`
fn mean_in_window(series: &Series, start: f64, end: f64) -> (f64, usize) {
    let (sum, count) = series
        .samples()
        .filter(|&(t, a)| t >= start && t < end && a.is_finite())
        .fold((0.0, 0usize), |(sum, count), (_, a)| (sum + a, count + 1));

    if count == 0 {
        (0.0, 0)
    } else {
        (sum / count as f64, count)
    }
}
