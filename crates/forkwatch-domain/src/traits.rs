//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the domain model and the
//! collaborators that consume it. Implementations live outside this crate.

use crate::{NeighborRegion, Repository, RepositoryGraph};

/// Trait for assigning neighbor regions to repositories
///
/// Implemented by whatever model consumes the graph. The domain only stores
/// the returned payload; see [`RepositoryGraph::assign_regions`].
pub trait Classifier {
    /// Error type for classification
    type Error;

    /// Compute the region of a repository, or `None` to leave it unassigned
    fn classify(
        &self,
        graph: &RepositoryGraph,
        repository: &Repository,
    ) -> Result<Option<NeighborRegion>, Self::Error>;
}
