//! Forkwatch DataSet
//!
//! Stratified cross-validation over watcher/repository observations.
//!
//! # Overview
//!
//! A [`DataSet`] is a set of [`Watching`](forkwatch_domain::Watching) values,
//! backed by the [`RepositoryGraph`](forkwatch_domain::RepositoryGraph) they
//! were loaded from. The repository id of each watching is its class, and
//! splitting preserves the class distribution in every fold:
//!
//! - **Stratify**: `DataSet::stratify(n)` deals each class evenly over `n` folds
//! - **Combine**: `DataSet::combine(folds)` is the exact inverse
//! - **Cross-validation**: `DataSet::cross_validation(n)` pairs each fold with
//!   the union of the others
//! - **Projection**: `DataSet::watchers()` and `DataSet::repositories()` rebuild
//!   the bidirectional watcher/repository views
//!
//! # Usage
//!
//! ```
//! use forkwatch_dataset::DataSet;
//! use forkwatch_domain::Watching;
//!
//! # fn main() -> Result<(), forkwatch_dataset::DataSetError> {
//! let mut data_set = DataSet::new();
//! data_set.add(Watching::new("1234", "1"));
//! data_set.add(Watching::new("1234", "2"));
//! data_set.add(Watching::new("2345", "1"));
//!
//! let folds = data_set.stratify(2)?;
//! assert_eq!(DataSet::combine(&folds), data_set);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! The [`Stratifier`] service can be configured via TOML:
//!
//! ```toml
//! folds = 10
//! warn_sparse_classes = true
//! ```

#![warn(missing_docs)]

mod config;
mod dataset;
mod error;
mod loader;
mod report;
mod stratifier;
mod stratify;

pub use config::StratifyConfig;
pub use dataset::DataSet;
pub use error::DataSetError;
pub use loader::DataLoader;
pub use report::FoldReport;
pub use stratifier::Stratifier;
pub use stratify::FoldSplit;
