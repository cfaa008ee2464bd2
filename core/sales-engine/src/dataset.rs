//! FILENAME: core/sales-engine/src/dataset.rs
//! PURPOSE: Immutable snapshot of the loaded transaction dataset.
//! CONTEXT: The dataset is built once by the loader and never mutated
//! afterwards, so it can be shared freely across threads and report
//! invocations without locking.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::Transaction;

/// The full, pre-validated sequence of transaction records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Transaction>,
}

impl Dataset {
    /// Creates a dataset from pre-validated records.
    pub fn new(records: Vec<Transaction>) -> Self {
        Dataset { records }
    }

    /// Creates an empty dataset.
    pub fn empty() -> Self {
        Dataset::default()
    }

    /// Number of records in the dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over all records.
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.records.iter()
    }

    /// Borrows the underlying record slice.
    pub fn records(&self) -> &[Transaction] {
        &self.records
    }

    /// Distinct state values in ascending order.
    ///
    /// Feeds the state selection control of the dashboard shell.
    pub fn states(&self) -> Vec<String> {
        let mut states: Vec<String> = self.records.iter().map(|r| r.state.clone()).collect();
        states.sort();
        states.dedup();
        states
    }

    /// Earliest and latest transaction dates, or `None` for an empty dataset.
    ///
    /// Feeds the default bounds of the date-range picker.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.records.iter().map(|r| r.date).min()?;
        let max = self.records.iter().map(|r| r.date).max()?;
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Dataset {
        Dataset::new(vec![
            Transaction::new(date(2023, 3, 5), 100.0, "NY", "X", "Delivered", "A"),
            Transaction::new(date(2023, 1, 1), 50.0, "CA", "Y", "Pending", "B"),
            Transaction::new(date(2023, 2, 10), 75.0, "CA", "X", "Delivered", "C"),
        ])
    }

    #[test]
    fn test_states_sorted_and_distinct() {
        assert_eq!(sample().states(), vec!["CA".to_string(), "NY".to_string()]);
    }

    #[test]
    fn test_date_bounds() {
        let bounds = sample().date_bounds().unwrap();
        assert_eq!(bounds, (date(2023, 1, 1), date(2023, 3, 5)));
    }

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::empty();
        assert!(ds.is_empty());
        assert!(ds.states().is_empty());
        assert_eq!(ds.date_bounds(), None);
    }
}
