//! Fold balance report

use crate::DataSet;
use forkwatch_domain::RepositoryId;
use std::collections::BTreeMap;

/// Class distribution across a set of folds
///
/// Tracks fold sizes and, per class, how many watchings each fold received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldReport {
    /// Number of watchings per fold
    pub fold_sizes: Vec<usize>,

    /// Per class, the count in each fold (indexed like `fold_sizes`)
    pub class_counts: BTreeMap<RepositoryId, Vec<usize>>,
}

impl FoldReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a report from stratified folds
    pub fn from_folds(folds: &[DataSet]) -> Self {
        let mut report = Self {
            fold_sizes: folds.iter().map(DataSet::len).collect(),
            class_counts: BTreeMap::new(),
        };

        for (index, fold) in folds.iter().enumerate() {
            for (class, count) in fold.class_counts() {
                report
                    .class_counts
                    .entry(class)
                    .or_insert_with(|| vec![0; folds.len()])[index] = count;
            }
        }

        report
    }

    /// Number of folds
    pub fn fold_count(&self) -> usize {
        self.fold_sizes.len()
    }

    /// Total watchings across all folds
    pub fn total(&self) -> usize {
        self.fold_sizes.iter().sum()
    }

    /// Number of distinct classes
    pub fn class_count(&self) -> usize {
        self.class_counts.len()
    }

    /// Whether every class is split as evenly as integer division allows
    pub fn is_balanced(&self) -> bool {
        let folds = self.fold_count();
        if folds == 0 {
            return self.class_counts.is_empty();
        }

        self.class_counts.values().all(|counts| {
            let total: usize = counts.iter().sum();
            let (low, high) = (total / folds, total.div_ceil(folds));
            counts.iter().all(|&count| count == low || count == high)
        })
    }

    /// Classes with fewer members than folds (some folds miss them)
    pub fn sparse_classes(&self) -> Vec<&RepositoryId> {
        let folds = self.fold_count();
        self.class_counts
            .iter()
            .filter(|(_, counts)| counts.iter().sum::<usize>() < folds)
            .map(|(class, _)| class)
            .collect()
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Fold Report".to_string(),
            "===========".to_string(),
            format!("Folds: {}", self.fold_count()),
            format!("Watchings: {}", self.total()),
            format!("Classes: {}", self.class_count()),
            format!("Balanced: {}", if self.is_balanced() { "yes" } else { "no" }),
            String::new(),
        ];

        if !self.fold_sizes.is_empty() {
            lines.push("Fold sizes:".to_string());
            for (index, size) in self.fold_sizes.iter().enumerate() {
                lines.push(format!("  #{}: {}", index, size));
            }
        }

        let sparse = self.sparse_classes();
        if !sparse.is_empty() {
            lines.push(String::new());
            lines.push(format!("Sparse classes ({}):", sparse.len()));
            for class in sparse {
                lines.push(format!("  {}", class));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forkwatch_domain::Watching;

    fn folds() -> Vec<DataSet> {
        let data_set: DataSet = [
            Watching::new("a", "1"),
            Watching::new("a", "2"),
            Watching::new("a", "3"),
            Watching::new("b", "1"),
        ]
        .into_iter()
        .collect();
        data_set.stratify(2).unwrap()
    }

    #[test]
    fn test_report_creation() {
        let report = FoldReport::new();
        assert_eq!(report.fold_count(), 0);
        assert_eq!(report.total(), 0);
        assert!(report.is_balanced());
    }

    #[test]
    fn test_from_folds() {
        let report = FoldReport::from_folds(&folds());

        assert_eq!(report.fold_count(), 2);
        assert_eq!(report.total(), 4);
        assert_eq!(report.class_count(), 2);
        assert_eq!(report.class_counts[&RepositoryId::from("a")].iter().sum::<usize>(), 3);
        assert!(report.is_balanced());
    }

    #[test]
    fn test_unbalanced_folds() {
        let crowded: DataSet = [Watching::new("a", "1"), Watching::new("a", "2")].into_iter().collect();
        let report = FoldReport::from_folds(&[crowded, DataSet::new()]);

        assert_eq!(report.class_counts[&RepositoryId::from("a")], vec![2, 0]);
        assert!(!report.is_balanced());
    }

    #[test]
    fn test_sparse_classes() {
        let report = FoldReport::from_folds(&folds());
        assert_eq!(report.sparse_classes(), vec![&RepositoryId::from("b")]);
    }

    #[test]
    fn test_summary() {
        let summary = FoldReport::from_folds(&folds()).summary();

        assert!(summary.contains("Folds: 2"));
        assert!(summary.contains("Watchings: 4"));
        assert!(summary.contains("Balanced: yes"));
        assert!(summary.contains("  #0: 2"));
        assert!(summary.contains("Sparse classes (1):"));
    }
}
