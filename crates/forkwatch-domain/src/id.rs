//! Identifier types for repositories and watchers
//!
//! Identifiers are opaque strings handed over by the data loader. They are
//! never validated here: empty values pass through unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a repository
///
/// The repository id is also the class label used when stratifying a dataset.
///
/// # Examples
///
/// ```
/// use forkwatch_domain::RepositoryId;
///
/// let id = RepositoryId::from("1234");
/// assert_eq!(id.as_str(), "1234");
/// assert_eq!(id.to_string(), "1234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryId(String);

impl RepositoryId {
    /// Create a repository id from any string-like value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RepositoryId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RepositoryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Stable identifier of a watcher
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WatcherId(String);

impl WatcherId {
    /// Create a watcher id from any string-like value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WatcherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WatcherId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for WatcherId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
