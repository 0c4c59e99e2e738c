//! Grouping raw labels by normalized key.

use std::collections::BTreeMap;

use amenity_map::Normalizer;
use amenity_model::Group;

/// Insertion-ordered map from normalized key to [`Group`] for one catalog.
///
/// Iteration follows the order in which keys were first seen.
#[derive(Debug, Clone, Default)]
pub struct GroupMap {
    groups: Vec<Group>,
    index: BTreeMap<String, usize>,
    total: usize,
}

impl GroupMap {
    /// Groups `labels` in order; the first label seen for a key becomes its
    /// display spelling.
    pub fn build<I, S>(labels: I, normalizer: &Normalizer) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::default();
        for label in labels {
            let label = label.as_ref();
            map.insert(normalizer.normalize(label), label);
        }
        map
    }

    fn insert(&mut self, key: String, label: &str) {
        self.total += 1;
        match self.index.get(&key) {
            Some(&position) => self.groups[position].push_variant(label),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push(Group::new(key, label));
            }
        }
    }

    /// Group for a normalized key.
    pub fn get(&self, key: &str) -> Option<&Group> {
        self.index.get(key).map(|&position| &self.groups[position])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of raw labels grouped, duplicates included.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Groups seen more than once, in first-seen order.
    pub fn duplicates(&self) -> Vec<Group> {
        self.groups
            .iter()
            .filter(|group| group.is_duplicate())
            .cloned()
            .collect()
    }
}

impl<'a> IntoIterator for &'a GroupMap {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Groups labels with the default normalizer.
pub fn group(labels: &[String]) -> GroupMap {
    GroupMap::build(labels, &Normalizer::default())
}
