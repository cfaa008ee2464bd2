//! FILENAME: core/sales-engine/src/engine.rs
//! Report Engine - The calculation core that turns transactions into a
//! renderable dashboard report.
//!
//! This module takes a Dataset (data) and FilterCriteria (configuration)
//! and produces a DashboardReport (six chart-ready result sets).
//!
//! Algorithm:
//! 1. Short-circuit on incomplete criteria (six empty results)
//! 2. Filter records to the inclusive date range and selected state
//! 3. Derive the five filter-dependent results from the filtered set
//! 4. Derive state totals from the scope chosen in ReportOptions
//!    (the full dataset by default - the one panel that ignores the filter)
//!
//! The engine is a pure function of its inputs: no internal state, no side
//! effects, safe to run concurrently over a shared Dataset.

use chrono::NaiveDate;

use crate::aggregate::{sum_by, top_n};
use crate::criteria::{FilterCriteria, ReportOptions, StateTotalsScope};
use crate::dataset::Dataset;
use crate::record::Transaction;
use crate::report::{DashboardReport, RatingSample, TrendPoint};

/// Computes the six chart-ready result sets for the given criteria.
pub fn build_report(
    dataset: &Dataset,
    criteria: &FilterCriteria,
    options: &ReportOptions,
) -> DashboardReport {
    if !criteria.is_complete() {
        return DashboardReport::empty(options.rating_bucket_hint);
    }

    // is_complete() guarantees all three are present.
    let start = criteria.start_date.unwrap_or(NaiveDate::MIN);
    let end = criteria.end_date.unwrap_or(NaiveDate::MAX);
    let state = criteria.state.as_deref().unwrap_or_default();

    let filtered: Vec<&Transaction> = dataset
        .iter()
        .filter(|r| r.date >= start && r.date <= end && r.state == state)
        .collect();

    let state_totals = match options.state_totals_scope {
        StateTotalsScope::FullDataset => sum_by(dataset.iter(), |r| r.state.as_str()),
        StateTotalsScope::FilteredSet => sum_by(filtered.iter().copied(), |r| r.state.as_str()),
    };

    DashboardReport {
        trend: trend_points(&filtered),
        category_totals: sum_by(filtered.iter().copied(), |r| r.sub_category.as_str()),
        state_totals,
        delivery_totals: sum_by(filtered.iter().copied(), |r| r.delivery_status.as_str()),
        top_products: top_n(
            sum_by(filtered.iter().copied(), |r| r.product_name.as_str()),
            options.top_product_limit,
        ),
        ratings: rating_sample(&filtered, options.rating_bucket_hint),
    }
}

/// Emits one unaggregated point per filtered record, ascending by date.
///
/// The sort is stable, so records sharing a date keep their dataset order.
fn trend_points(filtered: &[&Transaction]) -> Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = filtered
        .iter()
        .map(|r| TrendPoint {
            date: r.date,
            amount: r.total_amount,
        })
        .collect();
    points.sort_by_key(|p| p.date);
    points
}

/// Collects the non-null ratings of the filtered set.
fn rating_sample(filtered: &[&Transaction], bucket_hint: usize) -> RatingSample {
    let values: Vec<f64> = filtered.iter().filter_map(|r| r.customer_rating).collect();
    RatingSample::new(values, bucket_hint)
}
