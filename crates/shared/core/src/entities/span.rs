use serde::Serialize;

/// Interval between two consecutive moves
///
/// Covers `[start_time, end_time)`; `avg_acceleration` is the mean of the
/// finite magnitude samples inside it, or 0 when there are none.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveSpan {
    /// Index of the move opening the span
    pub from_index: usize,
    /// Index of the move closing the span
    pub to_index: usize,
    pub start_time: f64,
    pub end_time: f64,
    pub avg_acceleration: f64,
    pub sample_count: usize,
}

impl MoveSpan {
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Whether `time` falls inside the half-open interval
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time < self.end_time
    }
}
