//! Tunable matching policy.
//!
//! The defaults mirror what the reconciliation reports have always used: a
//! 0.6 similarity threshold, `the`/`and` as connector words, and the common
//! spellings of round-the-clock service folded into `24x7`.

use serde::{Deserialize, Serialize};

use crate::error::PolicyError;
use crate::normalize::{contains_tokens, tokenize};

/// Default similarity a near match must reach to be reported.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

const DEFAULT_STOPWORDS: &[&str] = &["the", "and"];

const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("24/7", "24x7"),
    ("24 / 7", "24x7"),
    ("24-7", "24x7"),
    ("24 x 7", "24x7"),
    ("24×7", "24x7"),
];

/// Token rewrite: when every token of `from` appears in a label, in any
/// order, those tokens are replaced by the tokens of `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    pub from: String,
    pub to: String,
}

impl Alias {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Normalization and acceptance settings shared by both catalogs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchPolicy {
    /// Minimum similarity (inclusive) for suggestions and typo candidates.
    pub threshold: f64,
    /// Connector tokens dropped from normalized keys.
    pub stopwords: Vec<String>,
    /// Token rewrites applied before connector words are dropped.
    pub aliases: Vec<Alias>,
    /// Strip a single trailing `s` from longer tokens.
    pub fold_plurals: bool,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| (*s).to_string()).collect(),
            aliases: DEFAULT_ALIASES
                .iter()
                .map(|(from, to)| Alias::new(*from, *to))
                .collect(),
            fold_plurals: false,
        }
    }
}

impl MatchPolicy {
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_stopwords<I, S>(mut self, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = stopwords.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_fold_plurals(mut self, enable: bool) -> Self {
        self.fold_plurals = enable;
        self
    }

    /// Threshold actually applied during matching.
    ///
    /// Out-of-range values are clamped to `[0, 1]`; a non-finite threshold
    /// falls back to [`DEFAULT_THRESHOLD`].
    pub fn effective_threshold(&self) -> f64 {
        if self.threshold.is_finite() {
            self.threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_THRESHOLD
        }
    }

    /// Checks the policy before it is handed to the engine.
    ///
    /// # Errors
    ///
    /// Returns the first [`PolicyError`] found.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(PolicyError::ThresholdOutOfRange(self.threshold));
        }
        for stopword in &self.stopwords {
            let trimmed = stopword.trim();
            if trimmed.is_empty() {
                return Err(PolicyError::EmptyStopword);
            }
            if trimmed.split_whitespace().count() > 1 {
                return Err(PolicyError::MultiTokenStopword(stopword.clone()));
            }
        }
        for alias in &self.aliases {
            if tokenize(&alias.from).is_empty() {
                return Err(PolicyError::EmptyAlias);
            }
        }
        for alias in self.aliases.iter().filter(|alias| !is_identity(alias)) {
            let to = tokenize(&alias.to);
            let rewrites_again = self.aliases.iter().any(|other| {
                let from = tokenize(&other.from);
                !is_identity(other) && contains_tokens(&to, &from)
            });
            if rewrites_again {
                return Err(PolicyError::RecursiveAlias {
                    from: alias.from.clone(),
                    to: alias.to.clone(),
                });
            }
        }
        Ok(())
    }
}

fn is_identity(alias: &Alias) -> bool {
    let mut from = tokenize(&alias.from);
    let mut to = tokenize(&alias.to);
    from.sort();
    to.sort();
    from == to
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_valid() {
        assert_eq!(MatchPolicy::default().validate(), Ok(()));
    }

    #[test]
    fn threshold_out_of_range_rejected() {
        let policy = MatchPolicy::default().with_threshold(1.5);
        assert_eq!(
            policy.validate(),
            Err(PolicyError::ThresholdOutOfRange(1.5))
        );
        assert_eq!(policy.effective_threshold(), 1.0);

        let policy = MatchPolicy::default().with_threshold(f64::NAN);
        assert!(policy.validate().is_err());
        assert_eq!(policy.effective_threshold(), DEFAULT_THRESHOLD);
    }

    #[test]
    fn multi_token_stopword_rejected() {
        let policy = MatchPolicy::default().with_stopwords(["of the"]);
        assert_eq!(
            policy.validate(),
            Err(PolicyError::MultiTokenStopword("of the".to_string()))
        );
    }

    #[test]
    fn recursive_alias_rejected() {
        let mut policy = MatchPolicy::default();
        policy.aliases.push(Alias::new("wifi", "wifi 24/7"));
        assert!(matches!(
            policy.validate(),
            Err(PolicyError::RecursiveAlias { .. })
        ));
    }

    #[test]
    fn self_feeding_alias_rejected() {
        let mut policy = MatchPolicy::default();
        policy.aliases.push(Alias::new("pool", "Pool Deck"));
        assert!(matches!(
            policy.validate(),
            Err(PolicyError::RecursiveAlias { .. })
        ));
    }

    #[test]
    fn reordered_identity_alias_accepted() {
        let mut policy = MatchPolicy::default();
        policy.aliases.push(Alias::new("gym room", "Room Gym"));
        policy.aliases.push(Alias::new("Gym Room", "fitness"));
        assert_eq!(policy.validate(), Ok(()));
    }

    #[test]
    fn punctuation_only_alias_source_rejected() {
        let mut policy = MatchPolicy::default();
        policy.aliases.push(Alias::new("--", "dash"));
        assert_eq!(policy.validate(), Err(PolicyError::EmptyAlias));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let policy: MatchPolicy =
            serde_json::from_str(r#"{"threshold": 0.8}"#).expect("parse policy");
        assert_eq!(policy.threshold, 0.8);
        assert_eq!(policy.stopwords, vec!["the", "and"]);
        assert_eq!(policy.aliases.len(), DEFAULT_ALIASES.len());
        assert!(!policy.fold_plurals);
    }
}
