use serde::Serialize;

/// Summary figures for one attempt
///
/// Every field is 0 for an empty series. `move_count` counts the synthetic
/// start move as well.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveStats {
    pub max_acceleration: f64,
    pub avg_acceleration: f64,
    pub move_count: usize,
    pub crux_count: usize,
    /// Seconds between the first and last sample
    pub duration: f64,
    pub sample_count: usize,
}
