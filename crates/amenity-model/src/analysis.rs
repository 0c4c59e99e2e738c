use serde::{Deserialize, Serialize};

use crate::group::{Group, UnmatchedGroup};
use crate::suggestion::{TypoCandidate, to_percent};

/// Headline counts for one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Raw PMG entries, duplicates included.
    pub pmg_total: usize,
    /// Raw Amber entries, duplicates included.
    pub amber_total: usize,
    /// Distinct normalized PMG keys.
    pub pmg_unique: usize,
    /// Distinct normalized Amber keys.
    pub amber_unique: usize,
    /// Keys present in both catalogs.
    pub overlap: usize,
    /// `overlap / pmg_unique`, or 0 when PMG is empty.
    pub coverage: f64,
}

impl Totals {
    pub fn coverage_ratio(overlap: usize, pmg_unique: usize) -> f64 {
        if pmg_unique == 0 {
            return 0.0;
        }
        (overlap as f64 / pmg_unique as f64).clamp(0.0, 1.0)
    }

    pub fn coverage_percent(&self) -> u32 {
        to_percent(self.coverage)
    }
}

/// Complete reconciliation report for a PMG/Amber pair of catalogs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmenityAnalysis {
    pub totals: Totals,
    /// PMG keys absent from Amber, in PMG first-seen order.
    pub missing_from_amber: Vec<UnmatchedGroup>,
    /// Amber keys absent from PMG, in Amber first-seen order.
    pub unexpected_in_amber: Vec<UnmatchedGroup>,
    pub duplicates_in_pmg: Vec<Group>,
    pub duplicates_in_amber: Vec<Group>,
    /// Near-match pairs, best first.
    pub potential_typos: Vec<TypoCandidate>,
}

impl AmenityAnalysis {
    /// True when both catalogs agree exactly after normalization and neither
    /// carries duplicates.
    pub fn is_in_sync(&self) -> bool {
        self.issue_count() == 0
    }

    /// Number of reconciliation findings. Typo candidates are advisory and
    /// not counted.
    pub fn issue_count(&self) -> usize {
        self.missing_from_amber.len()
            + self.unexpected_in_amber.len()
            + self.duplicates_in_pmg.len()
            + self.duplicates_in_amber.len()
    }
}
