//! Forkwatch Domain Layer
//!
//! This crate contains the domain model for Forkwatch: repositories linked into
//! fork trees, the watchers observing them, and the watchings pairing the two.
//! Everything here is a pure in-memory structure with no I/O.
//!
//! ## Key Concepts
//!
//! - **Repository**: A trackable project that may fork from another one
//! - **Fork tree**: Repositories connected through parent/child links
//! - **Watcher**: An observer associated with one or more repositories
//! - **Watching**: One (repository, watcher) observation
//! - **NeighborRegion**: Opaque payload assigned by an external classifier
//!
//! ## Architecture
//!
//! Relations between repositories and watchers live in a [`RepositoryGraph`],
//! an arena keyed by identifier. Every relation is updated on both sides in a
//! single call, so `children` is always the inverse of `parent` and
//! `Watcher::repositories` is always the inverse of `Repository::watchers`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod graph;
pub mod id;
pub mod region;
pub mod repository;
pub mod traits;
pub mod watcher;
pub mod watching;

// Re-exports for convenience
pub use error::DomainError;
pub use graph::RepositoryGraph;
pub use id::{RepositoryId, WatcherId};
pub use region::NeighborRegion;
pub use repository::Repository;
pub use watcher::Watcher;
pub use watching::Watching;
