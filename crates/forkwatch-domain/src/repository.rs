//! Repository module - a node in a fork tree

use crate::{DomainError, NeighborRegion, RepositoryId, WatcherId};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A repository that may fork from another one
///
/// Identity is the `(id, owner, name, created_at)` tuple. Parent, children,
/// watchers and region are relations, excluded from equality and hashing.
/// Relations are only changed through [`RepositoryGraph`](crate::RepositoryGraph),
/// which keeps both sides of every link in sync.
#[derive(Debug, Clone)]
pub struct Repository {
    /// Unique identifier
    pub id: RepositoryId,

    /// Owning account
    pub owner: String,

    /// Repository name
    pub name: String,

    /// Creation date as supplied by the loader (compared, never parsed)
    pub created_at: String,

    pub(crate) parent: Option<RepositoryId>,
    pub(crate) children: BTreeSet<RepositoryId>,
    pub(crate) watchers: BTreeSet<WatcherId>,
    pub(crate) region: Option<NeighborRegion>,
}

impl Repository {
    /// Create a repository without any relations
    pub fn new(
        id: impl Into<RepositoryId>,
        owner: impl Into<String>,
        name: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
            name: name.into(),
            created_at: created_at.into(),
            parent: None,
            children: BTreeSet::new(),
            watchers: BTreeSet::new(),
            region: None,
        }
    }

    /// Create a repository from a combined `owner/name` string
    ///
    /// The name is split on the first `/`.
    ///
    /// # Errors
    /// Returns [`DomainError::MalformedName`] when there is no separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use forkwatch_domain::Repository;
    ///
    /// let repo = Repository::from_combined_name("1234", "user_a/yo", "2009-02-26").unwrap();
    /// assert_eq!(repo.owner, "user_a");
    /// assert_eq!(repo.name, "yo");
    /// ```
    pub fn from_combined_name(
        id: impl Into<RepositoryId>,
        combined_name: &str,
        created_at: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let (owner, name) = combined_name
            .split_once('/')
            .ok_or_else(|| DomainError::MalformedName(combined_name.to_string()))?;

        Ok(Self::new(id, owner, name, created_at))
    }

    /// Fork source, if any
    pub fn parent(&self) -> Option<&RepositoryId> {
        self.parent.as_ref()
    }

    /// Repositories forked directly from this one
    pub fn children(&self) -> &BTreeSet<RepositoryId> {
        &self.children
    }

    /// Watchers observing this repository
    pub fn watchers(&self) -> &BTreeSet<WatcherId> {
        &self.watchers
    }

    /// Region assigned by a classifier
    pub fn region(&self) -> Option<&NeighborRegion> {
        self.region.as_ref()
    }

    /// Copy of this repository with every relation cleared
    pub(crate) fn detached(&self) -> Self {
        Self::new(
            self.id.clone(),
            self.owner.clone(),
            self.name.clone(),
            self.created_at.clone(),
        )
    }
}

impl PartialEq for Repository {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.owner == other.owner
            && self.name == other.name
            && self.created_at == other.created_at
    }
}

impl Eq for Repository {}

impl Hash for Repository {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.owner.hash(state);
        self.name.hash(state);
        self.created_at.hash(state);
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}/{},{}", self.id, self.owner, self.name, self.created_at)?;

        if let Some(parent) = &self.parent {
            write!(f, ",{}", parent)?;
        }

        Ok(())
    }
}
