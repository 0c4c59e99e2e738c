//! The reconciliation pipeline.

use amenity_map::{MatchPolicy, Normalizer};
use amenity_model::{AmenityAnalysis, Totals, UnmatchedGroup};
use tracing::debug;

use crate::group::GroupMap;
use crate::parse::parse_labels;
use crate::reconcile::reconcile;
use crate::suggest::{find_potential_typos, suggest};

/// Reconciles two catalogs with the default [`MatchPolicy`].
pub fn analyze_amenities(pmg_raw: &str, amber_raw: &str) -> AmenityAnalysis {
    AmenityAnalyzer::default().analyze(pmg_raw, amber_raw)
}

/// Reconciles two catalogs with a caller-supplied policy.
pub fn analyze_amenities_with(pmg_raw: &str, amber_raw: &str, policy: &MatchPolicy) -> AmenityAnalysis {
    AmenityAnalyzer::new(policy).analyze(pmg_raw, amber_raw)
}

/// Reusable analyzer holding a compiled policy.
///
/// Holds no per-run state: every call to [`analyze`](Self::analyze) builds
/// fresh group maps, so the same inputs always yield the same result.
#[derive(Debug, Clone)]
pub struct AmenityAnalyzer {
    normalizer: Normalizer,
    threshold: f64,
}

impl Default for AmenityAnalyzer {
    fn default() -> Self {
        Self::new(&MatchPolicy::default())
    }
}

impl AmenityAnalyzer {
    pub fn new(policy: &MatchPolicy) -> Self {
        Self {
            normalizer: Normalizer::new(policy),
            threshold: policy.effective_threshold(),
        }
    }

    /// Similarity threshold after clamping.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn analyze(&self, pmg_raw: &str, amber_raw: &str) -> AmenityAnalysis {
        let pmg = GroupMap::build(parse_labels(pmg_raw), &self.normalizer);
        let amber = GroupMap::build(parse_labels(amber_raw), &self.normalizer);
        debug!(
            pmg_total = pmg.total(),
            pmg_unique = pmg.len(),
            amber_total = amber.total(),
            amber_unique = amber.len(),
            "grouped catalogs"
        );

        let reconciliation = reconcile(&pmg, &amber);
        let missing_from_amber = reconciliation
            .missing
            .iter()
            .map(|group| UnmatchedGroup {
                group: (*group).clone(),
                suggestion: suggest(group, &amber, self.threshold),
            })
            .collect::<Vec<_>>();
        let unexpected_in_amber = reconciliation
            .unexpected
            .iter()
            .map(|group| UnmatchedGroup {
                group: (*group).clone(),
                suggestion: suggest(group, &pmg, self.threshold),
            })
            .collect::<Vec<_>>();

        let potential_typos = find_potential_typos(&pmg, &amber, self.threshold);
        debug!(
            overlap = reconciliation.overlap,
            missing = missing_from_amber.len(),
            unexpected = unexpected_in_amber.len(),
            typos = potential_typos.len(),
            "reconciled catalogs"
        );

        AmenityAnalysis {
            totals: Totals {
                pmg_total: pmg.total(),
                amber_total: amber.total(),
                pmg_unique: pmg.len(),
                amber_unique: amber.len(),
                overlap: reconciliation.overlap,
                coverage: Totals::coverage_ratio(reconciliation.overlap, pmg.len()),
            },
            missing_from_amber,
            unexpected_in_amber,
            duplicates_in_pmg: pmg.duplicates(),
            duplicates_in_amber: amber.duplicates(),
            potential_typos,
        }
    }
}
