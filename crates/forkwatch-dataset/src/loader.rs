//! Data loader boundary
//!
//! Loading raw watcher and repository records is left to implementors; this
//! crate only fixes what a loaded dataset must look like.

use crate::DataSet;

/// Trait for producing a fully populated dataset
///
/// An implementation must:
/// - add every watching to the returned [`DataSet`]
/// - build the source graph with every fork link established through
///   [`RepositoryGraph::set_parent`](forkwatch_domain::RepositoryGraph::set_parent)
/// - record every association through
///   [`RepositoryGraph::associate`](forkwatch_domain::RepositoryGraph::associate)
pub trait DataLoader {
    /// Error type for load operations
    type Error;

    /// Load the dataset from whatever backing storage the loader manages
    fn load(&self) -> Result<DataSet, Self::Error>;
}
