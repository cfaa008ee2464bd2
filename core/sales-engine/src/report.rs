//! FILENAME: core/sales-engine/src/report.rs
//! Dashboard Report - Chart-ready result sets.
//!
//! This module defines the six derived datasets the engine produces for the
//! dashboard shell. Each is a plain, serializable table; the shell binds
//! them to its chart widgets without further computation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// RESULT ROW TYPES
// ============================================================================

/// One point of the daily sales trend: a single transaction, unaggregated.
/// Multiple transactions on the same date appear as distinct points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub amount: f64,
}

/// One row of a grouped-and-summed result (category, state, delivery
/// status, or product totals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTotal {
    pub label: String,
    pub total: f64,
}

impl GroupTotal {
    pub fn new(label: impl Into<String>, total: f64) -> Self {
        GroupTotal {
            label: label.into(),
            total,
        }
    }
}

/// The raw customer ratings of the filtered set, for histogram rendering.
///
/// Binning is a rendering-time concern; the sample only carries the
/// suggested bucket count along for the chart layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSample {
    /// Non-null ratings, in filtered-set order.
    pub values: Vec<f64>,

    /// Suggested number of equal-width histogram buckets.
    pub bucket_hint: usize,
}

impl RatingSample {
    pub fn new(values: Vec<f64>, bucket_hint: usize) -> Self {
        RatingSample {
            values,
            bucket_hint,
        }
    }

    /// An empty sample (no rated transactions in the filtered set).
    pub fn empty(bucket_hint: usize) -> Self {
        RatingSample::new(Vec::new(), bucket_hint)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ============================================================================
// MAIN REPORT STRUCT
// ============================================================================

/// The six chart-ready result sets of one report invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Per-transaction trend points, ascending by date.
    pub trend: Vec<TrendPoint>,

    /// Summed `total_amount` per subcategory of the filtered set.
    pub category_totals: Vec<GroupTotal>,

    /// Summed `total_amount` per state. With the default scope this covers
    /// the entire dataset regardless of the active filter.
    pub state_totals: Vec<GroupTotal>,

    /// Summed `total_amount` per delivery status of the filtered set.
    pub delivery_totals: Vec<GroupTotal>,

    /// Highest-grossing products of the filtered set, descending by total.
    pub top_products: Vec<GroupTotal>,

    /// Raw customer ratings of the filtered set.
    pub ratings: RatingSample,
}

impl DashboardReport {
    /// The degenerate report: six empty result sets.
    ///
    /// Returned without computation when the filter criteria are incomplete.
    pub fn empty(rating_bucket_hint: usize) -> Self {
        DashboardReport {
            trend: Vec::new(),
            category_totals: Vec::new(),
            state_totals: Vec::new(),
            delivery_totals: Vec::new(),
            top_products: Vec::new(),
            ratings: RatingSample::empty(rating_bucket_hint),
        }
    }

    /// Whether every result set is empty.
    pub fn is_empty(&self) -> bool {
        self.trend.is_empty()
            && self.category_totals.is_empty()
            && self.state_totals.is_empty()
            && self.delivery_totals.is_empty()
            && self.top_products.is_empty()
            && self.ratings.is_empty()
    }
}
