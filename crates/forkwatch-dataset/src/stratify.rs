//! Stratified partitioning of a dataset into folds, and its inverse
//!
//! The repository id of a watching is its class. Splitting keeps each class
//! spread evenly over the folds: a class with `m` members contributes
//! `floor(m/n)` or `ceil(m/n)` watchings to every one of the `n` folds.

use crate::{DataSet, DataSetError};
use forkwatch_domain::{RepositoryId, Watching};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// One round of cross-validation: a held-out fold and the rest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldSplit {
    /// Index of the held-out fold
    pub index: usize,

    /// Union of every other fold
    pub training: DataSet,

    /// The held-out fold
    pub test: DataSet,
}

impl DataSet {
    /// Split into `folds` datasets preserving the class distribution
    ///
    /// Watchings are taken in canonical order, gathered so that each class
    /// forms one contiguous run, then dealt round-robin: position `k` goes to
    /// fold `k % folds`. Classes smaller than `folds` therefore land in
    /// distinct folds, and more folds than watchings leaves some folds empty.
    /// Every fold shares this dataset's source graph.
    ///
    /// # Errors
    /// Returns [`DataSetError::ZeroFolds`] when `folds` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use forkwatch_dataset::DataSet;
    /// use forkwatch_domain::Watching;
    ///
    /// # fn main() -> Result<(), forkwatch_dataset::DataSetError> {
    /// let data_set: DataSet = [
    ///     Watching::new("a", "1"),
    ///     Watching::new("a", "2"),
    ///     Watching::new("b", "1"),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let folds = data_set.stratify(2)?;
    /// assert_eq!(folds.len(), 2);
    /// assert_eq!(DataSet::combine(&folds), data_set);
    /// # Ok(())
    /// # }
    /// ```
    pub fn stratify(&self, folds: usize) -> Result<Vec<DataSet>, DataSetError> {
        if folds == 0 {
            return Err(DataSetError::ZeroFolds);
        }

        let (ordered, classes) = gather_classes(self.iter().cloned().collect());
        let mut result: Vec<DataSet> = (0..folds).map(|_| self.empty_like()).collect();

        for (position, watching) in ordered.into_iter().enumerate() {
            result[position % folds].add(watching);
        }

        debug!(
            "Stratified {} watchings ({} classes) into {} folds",
            self.len(),
            classes,
            folds
        );

        Ok(result)
    }

    /// Union of every watching in `folds`
    ///
    /// The inverse of [`stratify`](Self::stratify): `combine(stratify(d, n)) == d`.
    /// The result keeps the source graph of the first fold.
    pub fn combine<'a>(folds: impl IntoIterator<Item = &'a DataSet>) -> DataSet {
        let mut folds = folds.into_iter();
        let Some(first) = folds.next() else {
            return DataSet::new();
        };

        let mut combined = first.clone();
        for fold in folds {
            combined.extend(fold.iter().cloned());
        }
        combined
    }

    /// Build one train/test split per stratified fold
    ///
    /// # Errors
    /// Returns [`DataSetError::ZeroFolds`] when `folds` is 0.
    pub fn cross_validation(&self, folds: usize) -> Result<Vec<FoldSplit>, DataSetError> {
        let parts = self.stratify(folds)?;

        let splits = (0..parts.len())
            .map(|index| {
                let mut training = DataSet::combine(
                    parts
                        .iter()
                        .enumerate()
                        .filter(|(other, _)| *other != index)
                        .map(|(_, fold)| fold),
                );
                if training.is_empty() {
                    training = self.empty_like();
                }

                FoldSplit {
                    index,
                    training,
                    test: parts[index].clone(),
                }
            })
            .collect();

        Ok(splits)
    }
}

/// Reorder so that each class forms one contiguous run
///
/// Scanning left to right, every later watching with the same class as the
/// element just before the scan position is swapped forward into place.
/// Positions are indexed per class, so only matching watchings are visited.
/// Returns the reordered watchings and the number of distinct classes.
fn gather_classes(mut watchings: Vec<Watching>) -> (Vec<Watching>, usize) {
    let mut positions: BTreeMap<RepositoryId, BTreeSet<usize>> = BTreeMap::new();
    for (position, watching) in watchings.iter().enumerate() {
        positions
            .entry(watching.repository_id.clone())
            .or_default()
            .insert(position);
    }
    let classes = positions.len();

    let mut index = 1;
    while index < watchings.len() {
        let class = watchings[index - 1].repository_id.clone();
        let matches: Vec<usize> = positions
            .get(&class)
            .map(|members| members.range(index..).copied().collect())
            .unwrap_or_default();

        for candidate in matches {
            if candidate != index {
                // The displaced watching was already scanned past
                let displaced = watchings[index].repository_id.clone();
                if let Some(members) = positions.get_mut(&displaced) {
                    members.remove(&index);
                    members.insert(candidate);
                }
                if let Some(members) = positions.get_mut(&class) {
                    members.remove(&candidate);
                    members.insert(index);
                }
                watchings.swap(index, candidate);
            }
            index += 1;
        }
        index += 1;
    }

    (watchings, classes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use forkwatch_domain::RepositoryId;
    use std::collections::BTreeSet;

    fn sample() -> DataSet {
        let mut data_set = DataSet::new();
        data_set.add(Watching::new("a", "1"));
        data_set.add(Watching::new("a", "2"));
        data_set.add(Watching::new("d", "3"));
        data_set.add(Watching::new("e", "4"));
        data_set.add(Watching::new("f", "5"));
        data_set.add(Watching::new("b", "1"));
        data_set.add(Watching::new("q", "6"));
        data_set.add(Watching::new("r", "7"));
        data_set.add(Watching::new("c", "1"));
        data_set
    }

    fn classes(data_set: &DataSet) -> BTreeSet<String> {
        data_set
            .iter()
            .map(|watching| watching.repository_id.as_str().to_string())
            .collect()
    }

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_stratify() {
        let folds = sample().stratify(3).unwrap();

        // Which watcher lands where is not important, only the class grouping
        assert_eq!(folds.len(), 3);
        assert_eq!(classes(&folds[0]), set(&["a", "b", "f"]));
        assert_eq!(classes(&folds[1]), set(&["a", "d", "q"]));
        assert_eq!(classes(&folds[2]), set(&["c", "e", "r"]));
    }

    #[test]
    fn test_combine() {
        let data_set = sample();
        let folds = data_set.stratify(3).unwrap();

        assert_eq!(DataSet::combine(&folds), data_set);
    }

    #[test]
    fn test_combine_nothing() {
        let folds: Vec<DataSet> = Vec::new();
        assert!(DataSet::combine(&folds).is_empty());
    }

    #[test]
    fn test_zero_folds() {
        assert!(matches!(sample().stratify(0), Err(DataSetError::ZeroFolds)));
        assert!(matches!(sample().cross_validation(0), Err(DataSetError::ZeroFolds)));
    }

    #[test]
    fn test_single_fold_is_whole_dataset() {
        let data_set = sample();
        assert_eq!(data_set.stratify(1).unwrap(), vec![data_set]);
    }

    #[test]
    fn test_more_folds_than_watchings() {
        let data_set: DataSet = [Watching::new("a", "1"), Watching::new("b", "1")].into_iter().collect();
        let folds = data_set.stratify(5).unwrap();

        assert_eq!(folds.len(), 5);
        assert_eq!(folds.iter().filter(|fold| fold.is_empty()).count(), 3);
        assert_eq!(DataSet::combine(&folds), data_set);
    }

    #[test]
    fn test_small_class_spreads_over_distinct_folds() {
        let data_set: DataSet = (0..3).map(|watcher| Watching::new("x", watcher.to_string())).collect();
        let folds = data_set.stratify(4).unwrap();

        let sizes: Vec<usize> = folds.iter().map(DataSet::len).collect();
        assert_eq!(sizes, vec![1, 1, 1, 0]);
    }

    #[test]
    fn test_folds_are_independent() {
        let data_set = sample();
        let mut folds = data_set.stratify(3).unwrap();
        let sibling = folds[1].clone();

        folds[0].add(Watching::new("z", "99"));

        assert_eq!(data_set, sample());
        assert_eq!(folds[1], sibling);
        assert!(!data_set.contains(&Watching::new("z", "99")));
    }

    #[test]
    fn test_gather_classes() {
        let (ordered, classes) = gather_classes(sample().iter().cloned().collect());
        let labels: Vec<&str> = ordered.iter().map(|w| w.repository_id.as_str()).collect();

        assert_eq!(labels, vec!["a", "a", "c", "b", "d", "e", "f", "q", "r"]);
        assert_eq!(classes, 8);
    }

    #[test]
    fn test_gather_classes_empty() {
        let (ordered, classes) = gather_classes(Vec::new());

        assert!(ordered.is_empty());
        assert_eq!(classes, 0);
    }

    #[test]
    fn test_stratify_many_distinct_classes() {
        // 40k classes of two watchings each
        let data_set: DataSet = (0..40_000)
            .flat_map(|class| {
                [
                    Watching::new(format!("r{class}"), format!("w{}", class % 97)),
                    Watching::new(format!("r{class}"), format!("w{}", class % 89 + 100)),
                ]
            })
            .collect();
        let folds = data_set.stratify(10).unwrap();

        assert_eq!(folds.iter().map(DataSet::len).collect::<Vec<_>>(), vec![8_000; 10]);
        for fold in &folds {
            assert!(fold.class_counts().values().all(|&count| count == 1));
        }
        assert_eq!(DataSet::combine(&folds), data_set);
    }

    #[test]
    fn test_cross_validation() {
        let data_set = sample();
        let splits = data_set.cross_validation(3).unwrap();

        assert_eq!(splits.len(), 3);
        for split in &splits {
            assert_eq!(split.training.len() + split.test.len(), data_set.len());
            assert!(split.test.iter().all(|watching| !split.training.contains(watching)));

            let mut rebuilt = split.training.clone();
            rebuilt.extend(split.test.iter().cloned());
            assert_eq!(rebuilt, data_set);
        }
        assert_eq!(splits[2].index, 2);
        assert!(splits[0].test.contains(&Watching::new("f", "5")));
        assert!(splits[0].training.class_counts().contains_key(&RepositoryId::from("a")));
    }
}
