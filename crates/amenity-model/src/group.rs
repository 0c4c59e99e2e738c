use serde::{Deserialize, Serialize};

/// Every raw spelling of one amenity within a single catalog.
///
/// All entries in `variants` normalize to `normalized`, and
/// `variants.len() == count` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Normalized comparison key shared by every variant.
    pub normalized: String,
    /// Raw labels in first-seen order.
    pub variants: Vec<String>,
    /// Number of raw occurrences.
    pub count: usize,
}

impl Group {
    pub fn new(normalized: impl Into<String>, first_variant: impl Into<String>) -> Self {
        Self {
            normalized: normalized.into(),
            variants: vec![first_variant.into()],
            count: 1,
        }
    }

    pub fn push_variant(&mut self, variant: impl Into<String>) {
        self.variants.push(variant.into());
        self.count += 1;
    }

    /// Spelling shown to users: the first variant seen.
    pub fn display(&self) -> &str {
        self.variants.first().map(String::as_str).unwrap_or_default()
    }

    pub fn is_duplicate(&self) -> bool {
        self.count > 1
    }
}

/// A group with no exact counterpart on the other side, plus the closest
/// near match if one cleared the acceptance threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmatchedGroup {
    #[serde(flatten)]
    pub group: Group,
    pub suggestion: Option<crate::Suggestion>,
}

impl UnmatchedGroup {
    pub fn normalized(&self) -> &str {
        &self.group.normalized
    }

    pub fn display(&self) -> &str {
        self.group.display()
    }
}
