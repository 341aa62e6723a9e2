//! DataSet - a deduplicated collection of watchings

use crate::DataSetError;
use forkwatch_domain::{Repository, RepositoryGraph, RepositoryId, Watcher, WatcherId, Watching};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::debug;

/// A set of watchings plus the repository graph they were loaded from
///
/// Two datasets are equal when they hold the same watchings; the source
/// graph is shared context and does not take part in equality.
///
/// # Examples
///
/// ```
/// use forkwatch_dataset::DataSet;
/// use forkwatch_domain::Watching;
///
/// let mut data_set = DataSet::new();
/// assert!(data_set.add(Watching::new("1234", "1")));
/// assert!(!data_set.add(Watching::new("1234", "1")));
/// assert_eq!(data_set.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    watchings: BTreeSet<Watching>,
    source: Arc<RepositoryGraph>,
}

impl DataSet {
    /// Create an empty dataset with an empty source graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty dataset backed by a loaded repository graph
    pub fn with_source(source: Arc<RepositoryGraph>) -> Self {
        Self {
            watchings: BTreeSet::new(),
            source,
        }
    }

    /// Repository graph the watchings refer to
    pub fn source(&self) -> &Arc<RepositoryGraph> {
        &self.source
    }

    /// Add a watching, returning `false` if it was already present
    pub fn add(&mut self, watching: Watching) -> bool {
        self.watchings.insert(watching)
    }

    /// Whether the dataset holds this watching
    pub fn contains(&self, watching: &Watching) -> bool {
        self.watchings.contains(watching)
    }

    /// Number of watchings
    pub fn len(&self) -> usize {
        self.watchings.len()
    }

    /// Whether the dataset has no watchings
    pub fn is_empty(&self) -> bool {
        self.watchings.is_empty()
    }

    /// Watchings ordered by watcher, then repository
    pub fn iter(&self) -> impl Iterator<Item = &Watching> {
        self.watchings.iter()
    }

    /// Number of watchings per repository (class)
    pub fn class_counts(&self) -> BTreeMap<RepositoryId, usize> {
        let mut counts = BTreeMap::new();
        for watching in &self.watchings {
            *counts.entry(watching.repository_id.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Rebuild the watcher/repository graph covered by this dataset
    ///
    /// Every watching is replayed through [`RepositoryGraph::associate`].
    /// Repository attributes come from the source graph; repositories the
    /// source does not know become placeholders with empty attributes. Fork
    /// links are replayed when both ends are part of the projection.
    pub fn projection(&self) -> Result<RepositoryGraph, DataSetError> {
        let mut graph = RepositoryGraph::new();

        for watching in &self.watchings {
            if !graph.contains_repository(&watching.repository_id) {
                match self.source.repository(&watching.repository_id) {
                    Some(repository) => {
                        graph.insert_repository(repository.clone())?;
                        graph.set_region(&repository.id, repository.region().cloned())?;
                    }
                    None => {
                        debug!("Repository {} missing from source, using placeholder", watching.repository_id);
                        graph.insert_repository(Repository::new(watching.repository_id.clone(), "", "", ""))?;
                    }
                }
            }
            graph.associate(&watching.repository_id, &watching.watcher_id)?;
        }

        let links: Vec<(RepositoryId, RepositoryId)> = graph
            .repositories()
            .filter_map(|repository| {
                let parent = self.source.repository(&repository.id)?.parent()?;
                graph
                    .contains_repository(parent)
                    .then(|| (repository.id.clone(), parent.clone()))
            })
            .collect();

        for (child, parent) in links {
            graph.set_parent(&child, Some(&parent))?;
        }

        Ok(graph)
    }

    /// Watchers keyed by id, each bearing the repositories it watches
    pub fn watchers(&self) -> Result<HashMap<WatcherId, Watcher>, DataSetError> {
        Ok(self.projection()?.into_parts().1)
    }

    /// Repositories keyed by id, with watchers and fork links reconstructed
    pub fn repositories(&self) -> Result<HashMap<RepositoryId, Repository>, DataSetError> {
        Ok(self.projection()?.into_parts().0)
    }

    /// Empty dataset sharing this dataset's source graph
    pub(crate) fn empty_like(&self) -> Self {
        Self::with_source(Arc::clone(&self.source))
    }
}

impl PartialEq for DataSet {
    fn eq(&self, other: &Self) -> bool {
        self.watchings == other.watchings
    }
}

impl Eq for DataSet {}

impl Hash for DataSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.watchings.hash(state);
    }
}

impl FromIterator<Watching> for DataSet {
    fn from_iter<I: IntoIterator<Item = Watching>>(iter: I) -> Self {
        Self {
            watchings: iter.into_iter().collect(),
            source: Arc::default(),
        }
    }
}

impl Extend<Watching> for DataSet {
    fn extend<I: IntoIterator<Item = Watching>>(&mut self, iter: I) {
        self.watchings.extend(iter);
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a Watching;
    type IntoIter = std::collections::btree_set::Iter<'a, Watching>;

    fn into_iter(self) -> Self::IntoIter {
        self.watchings.iter()
    }
}
