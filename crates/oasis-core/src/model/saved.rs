// ── Saved-resource set ──

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::resource::Resource;

/// The set of resource ids a signed-in user has bookmarked.
///
/// The set is fetched once per invocation and treated as a snapshot;
/// add/remove go through the auth service and the caller refetches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedSet {
    ids: HashSet<String>,
}

impl SavedSet {
    /// Membership test by resource id. Ids absent from the current
    /// resource list are retained but simply never match.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Restrict a resource list to the saved subset, preserving the
    /// input order.
    pub fn filter<'a>(&self, resources: &'a [Resource]) -> Vec<&'a Resource> {
        resources.iter().filter(|r| self.contains(&r.id)).collect()
    }
}

impl From<Vec<String>> for SavedSet {
    fn from(ids: Vec<String>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SavedSet {
    type Item = &'a String;
    type IntoIter = std::collections::hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_ids_collapse() {
        let set = SavedSet::from(vec!["a".into(), "b".into(), "a".into()]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("a"));
        assert!(!set.contains("c"));
    }
}
