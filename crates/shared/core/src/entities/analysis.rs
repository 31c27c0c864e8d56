use serde::Serialize;

use super::{MoveSet, MoveSpan, MoveStats};
use crate::values::Threshold;

/// Everything derived from one `(series, threshold)` pair
///
/// Consumers (3D view, chart, stats panel) all read the same value so the
/// move count and markers can never disagree between views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub threshold: Threshold,
    pub moves: MoveSet,
    pub spans: Vec<MoveSpan>,
    pub stats: MoveStats,
}
