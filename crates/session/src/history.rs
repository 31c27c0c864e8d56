use crux_core::{Analysis, BoulderId, Timestamp};
use serde::Serialize;
use uuid::Uuid;

/// Frozen copy of an analysis
///
/// Live analyses are replaced on every threshold change; a history entry
/// owns its own clone and never changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub captured_at: Timestamp,
    pub boulder: BoulderId,
    pub analysis: Analysis,
}

impl HistoryEntry {
    pub fn new(boulder: BoulderId, analysis: Analysis, captured_at: Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            captured_at,
            boulder,
            analysis,
        }
    }

    /// Detected moves excluding the synthetic start
    pub fn climbing_moves(&self) -> usize {
        self.analysis.moves.detected().len()
    }
}
