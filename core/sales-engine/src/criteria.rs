//! FILENAME: core/sales-engine/src/criteria.rs
//! Filter Criteria - The serializable report configuration.
//!
//! This module contains the types that DESCRIBE a report request.
//! These structures are designed to be:
//! - Serializable (sent from the dashboard shell on every control change)
//! - Immutable snapshots of user intent
//! - Tolerant of partially-filled controls (a defined degenerate input,
//!   not an error)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// FILTER CRITERIA
// ============================================================================

/// The active date-range and state selection.
///
/// All three fields are required for a report to be computed; any missing
/// field short-circuits the engine into six empty results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Inclusive lower date bound.
    pub start_date: Option<NaiveDate>,

    /// Inclusive upper date bound. May precede `start_date`; that yields an
    /// empty filtered set rather than an error.
    pub end_date: Option<NaiveDate>,

    /// Exact-match state selection.
    pub state: Option<String>,
}

impl FilterCriteria {
    /// Creates fully-specified criteria.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, state: impl Into<String>) -> Self {
        FilterCriteria {
            start_date: Some(start_date),
            end_date: Some(end_date),
            state: Some(state.into()),
        }
    }

    /// Criteria with no selections made (all controls blank).
    pub fn unset() -> Self {
        FilterCriteria::default()
    }

    /// Whether all three inputs are present.
    ///
    /// An empty state string counts as missing, matching how a cleared
    /// dropdown arrives from the shell.
    pub fn is_complete(&self) -> bool {
        self.start_date.is_some()
            && self.end_date.is_some()
            && self.state.as_deref().map_or(false, |s| !s.is_empty())
    }
}

// ============================================================================
// REPORT OPTIONS
// ============================================================================

/// Which records the state-totals panel aggregates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StateTotalsScope {
    /// The entire dataset, ignoring the active filter. This is the
    /// dashboard's one global-context panel; the other five panels all
    /// respect the filter.
    #[default]
    FullDataset,

    /// The date-range/state filtered set, like every other panel.
    FilteredSet,
}

/// Tunable knobs for report derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Maximum number of entries in the top-products result.
    pub top_product_limit: usize,

    /// Suggested bucket count passed through to the rating histogram.
    pub rating_bucket_hint: usize,

    /// Scope of the state-totals panel.
    pub state_totals_scope: StateTotalsScope,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            top_product_limit: 10,
            rating_bucket_hint: 10,
            state_totals_scope: StateTotalsScope::FullDataset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_complete_criteria() {
        let c = FilterCriteria::new(date(2023, 1, 1), date(2023, 1, 31), "CA");
        assert!(c.is_complete());
    }

    #[test]
    fn test_unset_criteria_incomplete() {
        assert!(!FilterCriteria::unset().is_complete());
    }

    #[test]
    fn test_empty_state_string_counts_as_missing() {
        let c = FilterCriteria::new(date(2023, 1, 1), date(2023, 1, 31), "");
        assert!(!c.is_complete());
    }

    #[test]
    fn test_partial_criteria_incomplete() {
        let c = FilterCriteria {
            start_date: Some(date(2023, 1, 1)),
            end_date: None,
            state: Some("CA".to_string()),
        };
        assert!(!c.is_complete());
    }

    #[test]
    fn test_default_options() {
        let opts = ReportOptions::default();
        assert_eq!(opts.top_product_limit, 10);
        assert_eq!(opts.rating_bucket_hint, 10);
        assert_eq!(opts.state_totals_scope, StateTotalsScope::FullDataset);
    }
}
