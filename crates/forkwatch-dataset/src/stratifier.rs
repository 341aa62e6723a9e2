//! Configured stratification service

use crate::{DataSet, DataSetError, FoldReport, FoldSplit, StratifyConfig};
use tracing::{info, warn};

/// Splits datasets according to a [`StratifyConfig`] and reports the result
///
/// # Examples
///
/// ```
/// use forkwatch_dataset::{DataSet, Stratifier, StratifyConfig};
/// use forkwatch_domain::Watching;
///
/// # fn main() -> Result<(), forkwatch_dataset::DataSetError> {
/// let data_set: DataSet = (0..6).map(|w| Watching::new("1234", w.to_string())).collect();
///
/// let mut stratifier = Stratifier::new(StratifyConfig::quick())?;
/// let folds = stratifier.split(&data_set)?;
///
/// assert_eq!(folds.len(), 3);
/// assert!(stratifier.report().is_balanced());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Stratifier {
    config: StratifyConfig,
    report: FoldReport,
}

impl Stratifier {
    /// Create a stratifier, validating the configuration
    pub fn new(config: StratifyConfig) -> Result<Self, DataSetError> {
        config.validate()?;
        Ok(Self {
            config,
            report: FoldReport::new(),
        })
    }

    /// Create a stratifier with default configuration
    pub fn default_config() -> Self {
        Self {
            config: StratifyConfig::default(),
            report: FoldReport::new(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &StratifyConfig {
        &self.config
    }

    /// Report of the most recent split
    pub fn report(&self) -> &FoldReport {
        &self.report
    }

    /// Split a dataset into the configured number of folds
    pub fn split(&mut self, data_set: &DataSet) -> Result<Vec<DataSet>, DataSetError> {
        let folds = data_set.stratify(self.config.folds)?;
        self.record(&folds);
        Ok(folds)
    }

    /// Build train/test splits over the configured number of folds
    pub fn cross_validate(&mut self, data_set: &DataSet) -> Result<Vec<FoldSplit>, DataSetError> {
        let splits = data_set.cross_validation(self.config.folds)?;
        let folds: Vec<DataSet> = splits.iter().map(|split| split.test.clone()).collect();
        self.record(&folds);
        Ok(splits)
    }

    fn record(&mut self, folds: &[DataSet]) {
        self.report = FoldReport::from_folds(folds);

        info!(
            folds = self.report.fold_count(),
            watchings = self.report.total(),
            classes = self.report.class_count(),
            "Stratified dataset"
        );

        if self.config.warn_sparse_classes {
            let sparse = self.report.sparse_classes();
            if !sparse.is_empty() {
                warn!(
                    "{} of {} classes have fewer than {} watchings and will be missing from some folds",
                    sparse.len(),
                    self.report.class_count(),
                    self.report.fold_count()
                );
            }
        }
    }
}
