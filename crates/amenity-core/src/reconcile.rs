//! Key-set reconciliation between the two catalogs.

use amenity_model::Group;

use crate::group::GroupMap;

/// Keys found on only one side, plus the size of the shared key set.
#[derive(Debug, Clone)]
pub struct Reconciliation<'a> {
    /// PMG groups with no Amber counterpart, in PMG order.
    pub missing: Vec<&'a Group>,
    /// Amber groups with no PMG counterpart, in Amber order.
    pub unexpected: Vec<&'a Group>,
    /// Keys present in both catalogs.
    pub overlap: usize,
}

pub fn reconcile<'a>(pmg: &'a GroupMap, amber: &'a GroupMap) -> Reconciliation<'a> {
    let mut missing = Vec::new();
    let mut overlap = 0usize;
    for group in pmg {
        if amber.contains_key(&group.normalized) {
            overlap += 1;
        } else {
            missing.push(group);
        }
    }
    let unexpected = amber
        .iter()
        .filter(|group| !pmg.contains_key(&group.normalized))
        .collect();

    Reconciliation {
        missing,
        unexpected,
        overlap,
    }
}
