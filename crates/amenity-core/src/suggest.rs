//! Near-match suggestions and the cross-catalog typo report.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use amenity_map::{best_match, similarity_at_least};
use amenity_model::{Direction, Group, Suggestion, TypoCandidate};
use tracing::trace;

use crate::group::GroupMap;

/// Closest group in `opposite` for an unmatched `group`.
///
/// Scores the normalized form of each group's display spelling, which is
/// the group key itself. Returns `None` when no candidate reaches
/// `threshold`.
pub fn suggest(group: &Group, opposite: &GroupMap, threshold: f64) -> Option<Suggestion> {
    let candidates = opposite.iter().map(|candidate| candidate.normalized.as_str());
    let (position, score) = best_match(&group.normalized, candidates, threshold)?;
    let matched = opposite.iter().nth(position)?;
    trace!(
        key = %group.normalized,
        matched = %matched.normalized,
        similarity = score.similarity,
        "suggestion accepted"
    );
    Some(Suggestion {
        normalized: matched.normalized.clone(),
        variants: matched.variants.clone(),
        similarity: score.similarity,
    })
}

/// Every PMG/Amber pair of raw labels whose keys differ but whose spelling
/// scores at least `threshold`.
///
/// Raw labels are compared as typed, so case and spacing differences count
/// as edits. Each qualifying pair is reported once; its direction points at
/// the side whose key has no exact counterpart. Repeated raw labels do not
/// repeat a candidate. The result is ordered by similarity (highest first),
/// then distance, source, target, and direction.
pub fn find_potential_typos(pmg: &GroupMap, amber: &GroupMap, threshold: f64) -> Vec<TypoCandidate> {
    let mut seen: BTreeSet<(Direction, &str, &str)> = BTreeSet::new();
    let mut candidates = Vec::new();

    for pmg_group in pmg {
        let pmg_on_amber = amber.contains_key(&pmg_group.normalized);
        for amber_group in amber {
            if amber_group.normalized == pmg_group.normalized {
                continue;
            }
            let direction = if pmg_on_amber && !pmg.contains_key(&amber_group.normalized) {
                Direction::AmberToPmg
            } else {
                Direction::PmgToAmber
            };
            for pmg_label in &pmg_group.variants {
                for amber_label in &amber_group.variants {
                    let (source, target) = match direction {
                        Direction::PmgToAmber => (pmg_label.as_str(), amber_label.as_str()),
                        Direction::AmberToPmg => (amber_label.as_str(), pmg_label.as_str()),
                    };
                    if seen.contains(&(direction, source, target)) {
                        continue;
                    }
                    let Some(score) = similarity_at_least(source, target, threshold) else {
                        continue;
                    };
                    seen.insert((direction, source, target));
                    candidates.push(TypoCandidate {
                        source: source.to_string(),
                        target: target.to_string(),
                        direction,
                        similarity: score.similarity,
                        distance: score.distance,
                    });
                }
            }
        }
    }

    candidates.sort_by(compare_candidates);
    candidates
}

fn compare_candidates(a: &TypoCandidate, b: &TypoCandidate) -> Ordering {
    b.similarity
        .total_cmp(&a.similarity)
        .then_with(|| a.distance.cmp(&b.distance))
        .then_with(|| a.source.cmp(&b.source))
        .then_with(|| a.target.cmp(&b.target))
        .then_with(|| a.direction.cmp(&b.direction))
}
