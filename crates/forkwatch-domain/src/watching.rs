//! Watching module - one (repository, watcher) observation

use crate::{RepositoryId, WatcherId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A single observation: `watcher_id` watches `repository_id`
///
/// This is the atomic unit of a dataset. The repository id is the class
/// label used for stratification.
///
/// Watchings order by watcher first, then repository, which is the order a
/// dataset iterates in.
///
/// # Examples
///
/// ```
/// use forkwatch_domain::Watching;
///
/// let watching = Watching::new("1234", "1");
/// assert_eq!(watching.to_string(), "1:1234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Watching {
    /// Watched repository (the class label)
    pub repository_id: RepositoryId,

    /// Observing watcher
    pub watcher_id: WatcherId,
}

impl Watching {
    /// Create a watching
    pub fn new(repository_id: impl Into<RepositoryId>, watcher_id: impl Into<WatcherId>) -> Self {
        Self {
            repository_id: repository_id.into(),
            watcher_id: watcher_id.into(),
        }
    }
}

impl Ord for Watching {
    fn cmp(&self, other: &Self) -> Ordering {
        self.watcher_id
            .cmp(&other.watcher_id)
            .then_with(|| self.repository_id.cmp(&other.repository_id))
    }
}

impl PartialOrd for Watching {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Watching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.watcher_id, self.repository_id)
    }
}
