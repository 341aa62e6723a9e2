//! Neighbor region payload attached to repositories by a classifier

use serde::{Deserialize, Serialize};

/// Opaque classification payload
///
/// Produced by an external [`Classifier`](crate::traits::Classifier) and held
/// on a repository. The domain never interprets its contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NeighborRegion(serde_json::Value);

impl NeighborRegion {
    /// Wrap a classifier payload
    pub fn new(payload: serde_json::Value) -> Self {
        Self(payload)
    }

    /// Borrow the payload
    pub fn payload(&self) -> &serde_json::Value {
        &self.0
    }

    /// Take the payload back
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}
