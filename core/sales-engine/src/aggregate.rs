//! FILENAME: core/sales-engine/src/aggregate.rs
//! Group-by-sum machinery shared by the report derivations.
//!
//! Grouping partitions records by equality of one categorical field and
//! reduces each partition by summing `total_amount`. Results come back in a
//! deterministic order so that identical inputs always yield identical
//! reports.

use rustc_hash::FxHashMap;

use crate::record::Transaction;
use crate::report::GroupTotal;

/// Groups records by a categorical field and sums `total_amount` per group.
///
/// Returns one row per distinct label, ascending by label.
pub fn sum_by<'a, I, F>(records: I, label_of: F) -> Vec<GroupTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
    F: Fn(&Transaction) -> &str,
{
    let mut sums: FxHashMap<String, f64> = FxHashMap::default();
    for record in records {
        *sums.entry(label_of(record).to_string()).or_insert(0.0) += record.total_amount;
    }

    let mut totals: Vec<GroupTotal> = sums
        .into_iter()
        .map(|(label, total)| GroupTotal { label, total })
        .collect();
    totals.sort_by(|a, b| a.label.cmp(&b.label));
    totals
}

/// Sorts grouped totals descending by sum and truncates to `limit` rows.
///
/// Equal sums are broken by ascending label, so truncation is deterministic.
pub fn top_n(mut totals: Vec<GroupTotal>, limit: usize) -> Vec<GroupTotal> {
    totals.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.label.cmp(&b.label))
    });
    totals.truncate(limit);
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(state: &str, amount: f64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            amount,
            state,
            "X",
            "Delivered",
            "A",
        )
    }

    #[test]
    fn test_sum_by_groups_and_sums() {
        let records = vec![record("CA", 100.0), record("NY", 200.0), record("CA", 50.0)];
        let totals = sum_by(&records, |r| r.state.as_str());

        assert_eq!(
            totals,
            vec![GroupTotal::new("CA", 150.0), GroupTotal::new("NY", 200.0)]
        );
    }

    #[test]
    fn test_sum_by_empty_input() {
        let records: Vec<Transaction> = Vec::new();
        let totals = sum_by(&records, |r| r.state.as_str());
        assert!(totals.is_empty());
    }

    #[test]
    fn test_top_n_orders_descending_and_truncates() {
        let totals = vec![
            GroupTotal::new("A", 10.0),
            GroupTotal::new("B", 30.0),
            GroupTotal::new("C", 20.0),
        ];
        let top = top_n(totals, 2);

        assert_eq!(top, vec![GroupTotal::new("B", 30.0), GroupTotal::new("C", 20.0)]);
    }

    #[test]
    fn test_top_n_ties_break_by_label() {
        let totals = vec![
            GroupTotal::new("Zebra", 10.0),
            GroupTotal::new("Apple", 10.0),
            GroupTotal::new("Mango", 10.0),
        ];
        let top = top_n(totals, 2);

        assert_eq!(top[0].label, "Apple");
        assert_eq!(top[1].label, "Mango");
    }
}
