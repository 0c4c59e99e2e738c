//! Label normalization.
//!
//! A normalized key is the order-insensitive token set of a label: lower-cased,
//! punctuation stripped, aliases applied, connector words removed, and the
//! remaining tokens sorted. Two labels denote the same amenity iff their keys
//! are byte-equal.
//!
//! Punctuation handling:
//! - `&` and `+` become the token `and` (and are then dropped as a connector)
//! - apostrophes (`'`, `’`, `` ` ``) are deleted so `Owner's` matches `Owners`
//! - every other non-alphanumeric character separates tokens
//!
//! Aliases match whole tokens in any order, so `24/7` never fires inside
//! `124-75` and `gym room` rewrites `Room Gym` as well.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::policy::MatchPolicy;

static DEFAULT_NORMALIZER: LazyLock<Normalizer> =
    LazyLock::new(|| Normalizer::new(&MatchPolicy::default()));

/// Normalizes a label with the default policy.
pub fn normalize(label: &str) -> String {
    DEFAULT_NORMALIZER.normalize(label)
}

/// Upper bound on alias passes; a validated policy settles well before it.
const MAX_ALIAS_ROUNDS: usize = 16;

/// Label normalizer compiled from a [`MatchPolicy`].
#[derive(Debug, Clone)]
pub struct Normalizer {
    aliases: Vec<(Vec<String>, Vec<String>)>,
    stopwords: BTreeSet<String>,
    fold_plurals: bool,
}

impl Normalizer {
    pub fn new(policy: &MatchPolicy) -> Self {
        let fold = |tokens: Vec<String>| -> Vec<String> {
            if policy.fold_plurals {
                tokens.iter().map(|token| fold_plural(token).to_string()).collect()
            } else {
                tokens
            }
        };
        let mut aliases: Vec<(Vec<String>, Vec<String>)> = policy
            .aliases
            .iter()
            .map(|alias| (fold(tokenize(&alias.from)), fold(tokenize(&alias.to))))
            .filter(|(from, to)| !from.is_empty() && !contains_tokens(to, from))
            .map(|(mut from, to)| {
                from.sort();
                (from, to)
            })
            .collect();
        // Longest source first so "24 x 7" wins over the shorter "24 7".
        aliases.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        aliases.dedup_by(|a, b| a.0 == b.0);

        let stopwords = policy
            .stopwords
            .iter()
            .map(|word| word.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            aliases,
            stopwords,
            fold_plurals: policy.fold_plurals,
        }
    }

    /// Maps a raw label to its canonical comparison key. Never fails; a label
    /// made only of punctuation yields the empty key.
    pub fn normalize(&self, label: &str) -> String {
        let mut tokens: Vec<String> = tokenize(label)
            .into_iter()
            .map(|token| {
                if self.fold_plurals {
                    fold_plural(&token).to_string()
                } else {
                    token
                }
            })
            .collect();
        self.apply_aliases(&mut tokens);

        if tokens.iter().any(|token| !self.stopwords.contains(token)) {
            tokens.retain(|token| !self.stopwords.contains(token));
        }
        tokens.sort();
        tokens.join(" ")
    }

    /// Rewrites alias sources until no source is left among the tokens.
    fn apply_aliases(&self, tokens: &mut Vec<String>) {
        for _ in 0..MAX_ALIAS_ROUNDS {
            let mut changed = false;
            for (from, to) in &self.aliases {
                while take_tokens(tokens, from) {
                    tokens.extend(to.iter().cloned());
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&MatchPolicy::default())
    }
}

/// Lower-cases, strips punctuation and splits into tokens.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    strip_punctuation(&text.to_lowercase())
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// True when every token of `needle` occurs in `haystack` at least as often.
pub(crate) fn contains_tokens(haystack: &[String], needle: &[String]) -> bool {
    let count = |tokens: &[String], token: &String| tokens.iter().filter(|t| *t == token).count();
    needle
        .iter()
        .all(|token| count(needle, token) <= count(haystack, token))
}

fn take_tokens(tokens: &mut Vec<String>, wanted: &[String]) -> bool {
    if !contains_tokens(tokens, wanted) {
        return false;
    }
    for token in wanted {
        if let Some(position) = tokens.iter().position(|t| t == token) {
            tokens.remove(position);
        }
    }
    true
}

fn strip_punctuation(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' | '+' => cleaned.push_str(" and "),
            '\'' | '’' | '`' => {}
            c if c.is_alphanumeric() => cleaned.push(c),
            _ => cleaned.push(' '),
        }
    }
    cleaned
}

/// Drops one trailing `s` from tokens longer than three characters, leaving
/// `ss` endings ("glass", "fitness") alone.
fn fold_plural(token: &str) -> &str {
    if token.chars().count() > 3 && token.ends_with('s') && !token.ends_with("ss") {
        &token[..token.len() - 1]
    } else {
        token
    }
}
