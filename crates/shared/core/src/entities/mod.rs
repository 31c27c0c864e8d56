mod analysis;
mod moves;
mod series;
mod span;
mod stats;

pub use analysis::Analysis;
pub use moves::{Move, MoveSet, MoveSetBuilder};
pub use series::{Series, SeriesError};
pub use span::MoveSpan;
pub use stats::MoveStats;
