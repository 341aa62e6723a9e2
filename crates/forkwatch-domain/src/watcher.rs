//! Watcher module - the observing side of the interest graph

use crate::{RepositoryId, WatcherId};
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

/// An observer of repositories
///
/// Equality and hashing use the id only. The `repositories` set is the inverse
/// of [`Repository::watchers`](crate::Repository::watchers) and is maintained
/// by [`RepositoryGraph::associate`](crate::RepositoryGraph::associate).
#[derive(Debug, Clone)]
pub struct Watcher {
    /// Unique identifier
    pub id: WatcherId,

    pub(crate) repositories: BTreeSet<RepositoryId>,
}

impl Watcher {
    /// Create a watcher that observes nothing yet
    pub fn new(id: impl Into<WatcherId>) -> Self {
        Self {
            id: id.into(),
            repositories: BTreeSet::new(),
        }
    }

    /// Repositories this watcher observes
    pub fn repositories(&self) -> &BTreeSet<RepositoryId> {
        &self.repositories
    }

    /// Whether this watcher observes the given repository
    pub fn watches(&self, repository: &RepositoryId) -> bool {
        self.repositories.contains(repository)
    }
}

impl PartialEq for Watcher {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Watcher {}

impl Hash for Watcher {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_id_only() {
        let a = Watcher::new("1");
        let mut b = Watcher::new("1");
        b.repositories.insert(RepositoryId::from("1234"));

        assert_eq!(a, b);
        assert_ne!(a, Watcher::new("2"));
    }

    #[test]
    fn test_watches() {
        let mut watcher = Watcher::new("1");
        watcher.repositories.insert(RepositoryId::from("1234"));

        assert!(watcher.watches(&RepositoryId::from("1234")));
        assert!(!watcher.watches(&RepositoryId::from("2345")));
    }
}
