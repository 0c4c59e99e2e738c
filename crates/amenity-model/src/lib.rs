pub mod analysis;
pub mod group;
pub mod suggestion;

pub use analysis::{AmenityAnalysis, Totals};
pub use group::{Group, UnmatchedGroup};
pub use suggestion::{Direction, Suggestion, TypoCandidate};
