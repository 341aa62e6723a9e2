//! Repository graph - fork trees and watcher associations
//!
//! The graph is an arena keyed by identifier. Repositories and watchers refer
//! to each other by id, and every mutation updates both sides of a relation in
//! the same call:
//!
//! - `parent` / `children` via [`RepositoryGraph::set_parent`]
//! - `watchers` / `repositories` via [`RepositoryGraph::associate`]

use crate::traits::Classifier;
use crate::{DomainError, NeighborRegion, Repository, RepositoryId, Watcher, WatcherId};
use std::collections::{HashMap, VecDeque};
use tracing::debug;

/// Forest of repositories plus the watchers observing them
///
/// # Examples
///
/// ```
/// use forkwatch_domain::{Repository, RepositoryGraph, RepositoryId};
///
/// # fn main() -> Result<(), forkwatch_domain::DomainError> {
/// let mut graph = RepositoryGraph::new();
/// graph.insert_repository(Repository::new("1234", "user_a", "yo", "2009-02-26"))?;
/// graph.insert_repository(Repository::new("2345", "user_b", "yo", "2009-03-16"))?;
///
/// let parent = RepositoryId::from("1234");
/// let child = RepositoryId::from("2345");
/// graph.set_parent(&child, Some(&parent))?;
///
/// assert!(graph.is_related(&parent, &child)?);
/// assert_eq!(graph.repository(&child).unwrap().to_string(), "2345:user_b/yo,2009-03-16,1234");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RepositoryGraph {
    repositories: HashMap<RepositoryId, Repository>,
    watchers: HashMap<WatcherId, Watcher>,
}

impl RepositoryGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a repository with no relations
    ///
    /// Any relations carried by `repository` are dropped; links are only
    /// created through [`set_parent`](Self::set_parent) and
    /// [`associate`](Self::associate). Inserting a repository equal to the
    /// one already stored is a no-op.
    ///
    /// # Errors
    /// Returns [`DomainError::DuplicateRepository`] when a different
    /// repository already uses the same id.
    pub fn insert_repository(&mut self, repository: Repository) -> Result<(), DomainError> {
        if let Some(existing) = self.repositories.get(&repository.id) {
            if *existing == repository {
                return Ok(());
            }
            return Err(DomainError::DuplicateRepository(repository.id));
        }

        let repository = repository.detached();
        self.repositories.insert(repository.id.clone(), repository);
        Ok(())
    }

    /// Add a watcher if it is not already present
    pub fn insert_watcher(&mut self, id: impl Into<WatcherId>) {
        let id = id.into();
        self.watchers
            .entry(id.clone())
            .or_insert_with(|| Watcher::new(id));
    }

    /// Look up a repository
    pub fn repository(&self, id: &RepositoryId) -> Option<&Repository> {
        self.repositories.get(id)
    }

    /// Look up a watcher
    pub fn watcher(&self, id: &WatcherId) -> Option<&Watcher> {
        self.watchers.get(id)
    }

    /// Whether a repository is present
    pub fn contains_repository(&self, id: &RepositoryId) -> bool {
        self.repositories.contains_key(id)
    }

    /// All repositories, in no particular order
    pub fn repositories(&self) -> impl Iterator<Item = &Repository> {
        self.repositories.values()
    }

    /// All watchers, in no particular order
    pub fn watchers(&self) -> impl Iterator<Item = &Watcher> {
        self.watchers.values()
    }

    /// Number of repositories
    pub fn repository_count(&self) -> usize {
        self.repositories.len()
    }

    /// Number of watchers
    pub fn watcher_count(&self) -> usize {
        self.watchers.len()
    }

    /// Split the graph into its repository and watcher tables
    pub fn into_parts(self) -> (HashMap<RepositoryId, Repository>, HashMap<WatcherId, Watcher>) {
        (self.repositories, self.watchers)
    }

    /// Set or clear the fork source of `child`
    ///
    /// The child is added to the new parent's children and removed from the
    /// children of its previous parent, if it had one.
    ///
    /// # Errors
    /// - [`DomainError::UnknownRepository`] if either id is not in the graph
    /// - [`DomainError::ForkCycle`] if `parent` is `child` or one of its descendants
    pub fn set_parent(
        &mut self,
        child: &RepositoryId,
        parent: Option<&RepositoryId>,
    ) -> Result<(), DomainError> {
        if let Some(parent) = parent {
            if !self.contains_repository(parent) {
                return Err(DomainError::UnknownRepository(parent.clone()));
            }
            if self.ancestors(parent).any(|ancestor| ancestor == child) {
                return Err(DomainError::ForkCycle {
                    child: child.clone(),
                    parent: parent.clone(),
                });
            }
        }

        let node = self
            .repositories
            .get_mut(child)
            .ok_or_else(|| DomainError::UnknownRepository(child.clone()))?;
        let previous = std::mem::replace(&mut node.parent, parent.cloned());

        if let Some(previous) = previous {
            if let Some(old_parent) = self.repositories.get_mut(&previous) {
                old_parent.children.remove(child);
            }
            debug!("Detached {} from previous parent {}", child, previous);
        }

        if let Some(parent) = parent {
            if let Some(new_parent) = self.repositories.get_mut(parent) {
                new_parent.children.insert(child.clone());
            }
        }

        Ok(())
    }

    /// Walk from `id` up to its forest root, starting with `id` itself
    ///
    /// Yields nothing when `id` is not in the graph.
    pub fn ancestors<'a>(&'a self, id: &RepositoryId) -> impl Iterator<Item = &'a RepositoryId> + 'a {
        let start = self.repositories.get(id).map(|repository| &repository.id);
        std::iter::successors(start, move |current| {
            self.repositories
                .get(*current)
                .and_then(|repository| repository.parent.as_ref())
        })
    }

    /// Root of the fork tree containing `id`
    ///
    /// # Errors
    /// Returns [`DomainError::UnknownRepository`] if `id` is not in the graph.
    pub fn root_of(&self, id: &RepositoryId) -> Result<&RepositoryId, DomainError> {
        self.ancestors(id)
            .last()
            .ok_or_else(|| DomainError::UnknownRepository(id.clone()))
    }

    /// Every repository in the fork tree containing `id`, breadth first from the root
    ///
    /// # Errors
    /// Returns [`DomainError::UnknownRepository`] if `id` is not in the graph.
    pub fn fork_tree(&self, id: &RepositoryId) -> Result<Vec<RepositoryId>, DomainError> {
        let root = self.root_of(id)?;
        let mut tree = Vec::new();
        let mut queue = VecDeque::from([root]);

        while let Some(current) = queue.pop_front() {
            tree.push(current.clone());
            if let Some(repository) = self.repositories.get(current) {
                queue.extend(repository.children.iter());
            }
        }

        Ok(tree)
    }

    /// Whether `other` lies in the same fork tree as `id`
    ///
    /// Ancestors, descendants and siblings at any depth are all related. The
    /// search walks to the root of `id` and then breadth-first through the
    /// root's descendants, stopping at the first match.
    ///
    /// # Errors
    /// Returns [`DomainError::UnknownRepository`] if `id` is not in the graph.
    /// An unknown `other` is simply unrelated.
    pub fn is_related(&self, id: &RepositoryId, other: &RepositoryId) -> Result<bool, DomainError> {
        let root = self.root_of(id)?;
        let mut queue = VecDeque::from([root]);

        while let Some(current) = queue.pop_front() {
            if current == other {
                return Ok(true);
            }
            if let Some(repository) = self.repositories.get(current) {
                queue.extend(repository.children.iter());
            }
        }

        Ok(false)
    }

    /// Record that `watcher` observes `repository`, on both sides
    ///
    /// The watcher is created if it is not yet in the graph.
    ///
    /// # Errors
    /// Returns [`DomainError::UnknownRepository`] if the repository is missing.
    pub fn associate(&mut self, repository: &RepositoryId, watcher: &WatcherId) -> Result<(), DomainError> {
        let node = self
            .repositories
            .get_mut(repository)
            .ok_or_else(|| DomainError::UnknownRepository(repository.clone()))?;
        node.watchers.insert(watcher.clone());

        self.watchers
            .entry(watcher.clone())
            .or_insert_with(|| Watcher::new(watcher.clone()))
            .repositories
            .insert(repository.clone());

        Ok(())
    }

    /// Attach (or clear) the neighbor region of a repository
    ///
    /// # Errors
    /// Returns [`DomainError::UnknownRepository`] if the repository is missing.
    pub fn set_region(
        &mut self,
        repository: &RepositoryId,
        region: Option<NeighborRegion>,
    ) -> Result<(), DomainError> {
        let node = self
            .repositories
            .get_mut(repository)
            .ok_or_else(|| DomainError::UnknownRepository(repository.clone()))?;
        node.region = region;
        Ok(())
    }

    /// Run a classifier over every repository and store the regions it returns
    ///
    /// All regions are computed against the graph as it was before the call.
    /// Returns the number of repositories that received a region.
    pub fn assign_regions<C: Classifier>(&mut self, classifier: &C) -> Result<usize, C::Error> {
        let mut ids: Vec<&RepositoryId> = self.repositories.keys().collect();
        ids.sort();

        let mut regions = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(repository) = self.repositories.get(id) {
                regions.push((id.clone(), classifier.classify(self, repository)?));
            }
        }

        let mut assigned = 0;
        for (id, region) in regions {
            if let Some(repository) = self.repositories.get_mut(&id) {
                assigned += usize::from(region.is_some());
                repository.region = region;
            }
        }

        debug!("Assigned regions to {} repositories", assigned);
        Ok(assigned)
    }
}
