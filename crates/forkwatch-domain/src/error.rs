//! Error types for domain operations

use crate::RepositoryId;
use thiserror::Error;

/// Errors raised while building or querying the repository graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Combined name without an `owner/name` separator
    #[error("Malformed repository name '{0}': expected 'owner/name'")]
    MalformedName(String),

    /// Repository id not present in the graph
    #[error("Unknown repository: {0}")]
    UnknownRepository(RepositoryId),

    /// A different repository is already registered under this id
    #[error("Repository {0} already exists with different attributes")]
    DuplicateRepository(RepositoryId),

    /// The requested fork link would close a cycle
    #[error("Setting parent of {child} to {parent} would create a fork cycle")]
    ForkCycle {
        /// Repository being re-parented
        child: RepositoryId,
        /// Requested parent
        parent: RepositoryId,
    },
}
