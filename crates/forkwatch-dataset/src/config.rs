//! Configuration for stratified splitting

use crate::DataSetError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for the [`Stratifier`](crate::Stratifier)
///
/// # Examples
///
/// ```
/// use forkwatch_dataset::StratifyConfig;
///
/// let config = StratifyConfig::default();
/// assert_eq!(config.folds, 10);
///
/// let config = StratifyConfig::from_toml("folds = 5").unwrap();
/// assert_eq!(config.folds, 5);
/// assert!(config.warn_sparse_classes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StratifyConfig {
    /// Number of folds to split into
    /// Default: 10
    #[serde(default = "default_folds")]
    pub folds: usize,

    /// Log a warning for classes with fewer members than folds
    /// Default: true
    #[serde(default = "default_true")]
    pub warn_sparse_classes: bool,
}

fn default_folds() -> usize {
    10
}

fn default_true() -> bool {
    true
}

impl Default for StratifyConfig {
    fn default() -> Self {
        Self {
            folds: default_folds(),
            warn_sparse_classes: true,
        }
    }
}

impl StratifyConfig {
    /// Quick preset: 3 folds, for smoke runs on small samples
    pub fn quick() -> Self {
        Self {
            folds: 3,
            ..Self::default()
        }
    }

    /// Thorough preset: 20 folds
    pub fn thorough() -> Self {
        Self {
            folds: 20,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), DataSetError> {
        if self.folds == 0 {
            return Err(DataSetError::Config("folds must be greater than 0".to_string()));
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, DataSetError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataSetError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = StratifyConfig::default();
        assert_eq!(config.folds, 10);
        assert!(config.warn_sparse_classes);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(StratifyConfig::quick().folds, 3);
        assert_eq!(StratifyConfig::thorough().folds, 20);
    }

    #[test]
    fn test_from_toml() {
        let config = StratifyConfig::from_toml("folds = 4\nwarn_sparse_classes = false").unwrap();
        assert_eq!(config.folds, 4);
        assert!(!config.warn_sparse_classes);

        let config = StratifyConfig::from_toml("").unwrap();
        assert_eq!(config, StratifyConfig::default());
    }

    #[test]
    fn test_zero_folds_rejected() {
        let result = StratifyConfig::from_toml("folds = 0");
        assert!(matches!(result, Err(DataSetError::Config(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let result = StratifyConfig::from_toml("folds = \"many\"");
        assert!(matches!(result, Err(DataSetError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "folds = 7").unwrap();

        let config = StratifyConfig::load(file.path()).unwrap();
        assert_eq!(config.folds, 7);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = StratifyConfig::load(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(DataSetError::Io(_))));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = StratifyConfig::thorough();
        let serialized = toml::to_string(&config).unwrap();
        assert_eq!(StratifyConfig::from_toml(&serialized).unwrap(), config);
    }
}
