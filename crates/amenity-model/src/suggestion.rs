use std::fmt;

use serde::{Deserialize, Serialize};

/// Closest match on the opposite catalog for an unmatched group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Normalized key of the matched group.
    pub normalized: String,
    /// Raw spellings of the matched group, first-seen first.
    pub variants: Vec<String>,
    /// Similarity score in `[0, 1]`.
    pub similarity: f64,
}

impl Suggestion {
    pub fn display(&self) -> &str {
        self.variants.first().map(String::as_str).unwrap_or_default()
    }

    /// Similarity as a whole percentage.
    pub fn percent(&self) -> u32 {
        to_percent(self.similarity)
    }
}

/// Which catalog a typo candidate should be corrected against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// A PMG label with a near match on Amber.
    #[serde(rename = "pmg→amber")]
    PmgToAmber,
    /// An Amber label with a near match on PMG.
    #[serde(rename = "amber→pmg")]
    AmberToPmg,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PmgToAmber => "pmg→amber",
            Self::AmberToPmg => "amber→pmg",
        }
    }

    /// Short label used in reports.
    pub fn describe(self) -> &'static str {
        match self {
            Self::PmgToAmber => "PMG missing",
            Self::AmberToPmg => "Amber entry",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cross-catalog pair of raw labels with different keys but close spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypoCandidate {
    pub source: String,
    pub target: String,
    pub direction: Direction,
    pub similarity: f64,
    pub distance: usize,
}

impl TypoCandidate {
    pub fn percent(&self) -> u32 {
        to_percent(self.similarity)
    }
}

pub(crate) fn to_percent(ratio: f64) -> u32 {
    (ratio.clamp(0.0, 1.0) * 100.0).round() as u32
}
