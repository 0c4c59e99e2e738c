//! Error types for match policy validation.

use thiserror::Error;

/// Reasons a [`MatchPolicy`](crate::MatchPolicy) is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolicyError {
    #[error("threshold must be a number between 0 and 1, got {0}")]
    ThresholdOutOfRange(f64),
    #[error("stopwords must not be empty")]
    EmptyStopword,
    #[error("stopword '{0}' must be a single token")]
    MultiTokenStopword(String),
    #[error("alias source must not be empty")]
    EmptyAlias,
    #[error("alias '{from}' -> '{to}' rewrites into another alias source")]
    RecursiveAlias { from: String, to: String },
}
