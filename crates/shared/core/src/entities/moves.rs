use serde::Serialize;

use crate::values::Dynamics;

/// A detected climbing move
///
/// Index 1 is always the synthetic start move anchored at `time = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    /// 1-based position in the move sequence
    pub index: usize,
    /// Series time of the detected peak, in seconds
    pub time: f64,
    /// Acceleration magnitude at the peak
    pub raw_acceleration: f64,
    pub dynamics: Dynamics,
    pub is_crux: bool,
}

impl Move {
    pub fn is_start(&self) -> bool {
        self.index == 1
    }
}

/// Ordered, non-empty sequence of moves
///
/// Built once per derivation through [`MoveSetBuilder`] and never mutated
/// afterwards. Clone it to keep a frozen copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MoveSet {
    moves: Vec<Move>,
}

impl MoveSet {
    /// Start building a set from the synthetic start move (index 1, time 0)
    pub fn builder(raw_acceleration: f64, dynamics: Dynamics) -> MoveSetBuilder {
        MoveSetBuilder::new(raw_acceleration, dynamics)
    }

    /// The synthetic start move
    pub fn start(&self) -> &Move {
        &self.moves[0]
    }

    /// Moves detected from the signal, excluding the synthetic start
    pub fn detected(&self) -> &[Move] {
        &self.moves[1..]
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Number of moves including the synthetic start
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&Move> {
        index.checked_sub(1).and_then(|i| self.moves.get(i))
    }

    pub fn crux_moves(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter().filter(|m| m.is_crux)
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.moves.iter().map(|m| m.time)
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Accumulates moves in scan order, assigning consecutive indices
#[derive(Debug)]
pub struct MoveSetBuilder {
    moves: Vec<Move>,
}

impl MoveSetBuilder {
    fn new(raw_acceleration: f64, dynamics: Dynamics) -> Self {
        Self {
            moves: vec![Move {
                index: 1,
                time: 0.0,
                raw_acceleration,
                dynamics,
                is_crux: false,
            }],
        }
    }

    /// Append a move; its index is the current length plus one
    pub fn push(&mut self, time: f64, raw_acceleration: f64, dynamics: Dynamics, is_crux: bool) {
        let index = self.moves.len() + 1;
        self.moves.push(Move {
            index,
            time,
            raw_acceleration,
            dynamics,
            is_crux,
        });
    }

    pub fn build(self) -> MoveSet {
        MoveSet { moves: self.moves }
    }
}
