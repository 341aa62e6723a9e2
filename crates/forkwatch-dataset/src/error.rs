//! Error types for dataset operations

use forkwatch_domain::DomainError;
use thiserror::Error;

/// Errors that can occur while splitting or projecting a dataset
#[derive(Error, Debug)]
pub enum DataSetError {
    /// Stratification needs at least one fold
    #[error("Fold count must be at least 1")]
    ZeroFolds,

    /// Graph error while rebuilding watchers or repositories
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for DataSetError {
    fn from(e: toml::de::Error) -> Self {
        DataSetError::Config(e.to_string())
    }
}
