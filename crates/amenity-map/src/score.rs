//! Edit-distance scoring for near-match detection.
//!
//! Distance is the Levenshtein distance over Unicode scalar values (insert,
//! delete, and substitute all cost 1). Similarity is
//! `1 - distance / max(len_a, len_b, 1)`, so identical strings score 1.0 and
//! the score is symmetric in its arguments.

use std::cmp::Ordering;

use rapidfuzz::distance::levenshtein;

/// Accepted similarity between two strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Similarity in `[0, 1]`.
    pub similarity: f64,
    /// Edit distance in characters.
    pub distance: usize,
}

/// Minimum number of single-character edits turning `a` into `b`.
pub fn distance(a: &str, b: &str) -> usize {
    levenshtein::distance(a.chars(), b.chars())
}

/// Normalized similarity in `[0, 1]`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    ratio(distance(a, b), max_len)
}

/// Scores a pair only if it can reach `threshold`.
///
/// The length difference is a lower bound on the edit distance, so pairs
/// whose lengths alone rule out the threshold are rejected without running
/// the full distance computation.
pub fn similarity_at_least(a: &str, b: &str, threshold: f64) -> Option<Score> {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let max_len = len_a.max(len_b);
    if ratio(len_a.abs_diff(len_b), max_len) < threshold {
        return None;
    }
    let distance = distance(a, b);
    let similarity = ratio(distance, max_len);
    (similarity >= threshold).then_some(Score {
        similarity,
        distance,
    })
}

/// Finds the closest candidate to `query` scoring at least `threshold`.
///
/// Ties on similarity go to the candidate whose length is nearest the
/// query's, then to the earliest candidate. Returns the candidate index.
pub fn best_match<'a, I>(query: &str, candidates: I, threshold: f64) -> Option<(usize, Score)>
where
    I: IntoIterator<Item = &'a str>,
{
    let query_len = query.chars().count();
    let mut best: Option<(usize, Score, usize)> = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let Some(score) = similarity_at_least(query, candidate, threshold) else {
            continue;
        };
        let len_diff = query_len.abs_diff(candidate.chars().count());
        let better = match &best {
            None => true,
            Some((_, current, current_diff)) => {
                match score.similarity.total_cmp(&current.similarity) {
                    Ordering::Greater => true,
                    Ordering::Equal => len_diff < *current_diff,
                    Ordering::Less => false,
                }
            }
        };
        if better {
            best = Some((index, score, len_diff));
        }
    }

    best.map(|(index, score, _)| (index, score))
}

fn ratio(distance: usize, max_len: usize) -> f64 {
    (1.0 - distance as f64 / max_len.max(1) as f64).clamp(0.0, 1.0)
}
