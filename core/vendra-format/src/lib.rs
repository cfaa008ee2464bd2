//! FILENAME: core/vendra-format/src/lib.rs
//! Vendra Chart Payload Format
//!
//! The serializable boundary between the report engine and whatever shell
//! renders the dashboard. Each of the six report result sets becomes one
//! chart payload carrying its panel title and drawable data; the shell only
//! binds payloads to widgets.

mod histogram;

pub use histogram::{bin_values, HistogramBucket};

use sales_engine::DashboardReport;
use serde::{Deserialize, Serialize};

// ============================================================================
// PANEL TITLES
// ============================================================================

pub const TITLE_SALES_TREND: &str = "Daily Sales Trend";
pub const TITLE_CATEGORY_PIE: &str = "Sales by SubCategory";
pub const TITLE_STATE_BAR: &str = "Total Sales by State";
pub const TITLE_DELIVERY_STATUS: &str = "Delivery Status Overview";
pub const TITLE_TOP_PRODUCTS: &str = "Top 10 Products by Sales";
pub const TITLE_CUSTOMER_RATINGS: &str = "Customer Ratings Distribution";

// ============================================================================
// CHART PAYLOADS
// ============================================================================

/// One x/y point of a line series. Dates are rendered as ISO-8601 strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub x: String,
    pub y: f64,
}

/// A labeled value, used by both pie slices and bar chart bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub title: String,
    pub points: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<LabeledValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<LabeledValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub title: String,
    pub buckets: Vec<HistogramBucket>,
}

/// All six dashboard panels, in layout order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardCharts {
    pub sales_trend: LineSeries,
    pub category_pie: PieChart,
    pub state_bar: BarChart,
    pub delivery_status: BarChart,
    pub top_products: BarChart,
    pub customer_ratings: Histogram,
}

impl DashboardCharts {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }
}

// ============================================================================
// PAYLOAD CONSTRUCTION
// ============================================================================

/// Turns a report into the six chart payloads.
///
/// An empty report (incomplete criteria or no matching records) produces
/// empty payloads; the shell renders blank charts, never an error.
pub fn build_charts(report: &DashboardReport) -> DashboardCharts {
    DashboardCharts {
        sales_trend: LineSeries {
            title: TITLE_SALES_TREND.to_string(),
            points: report
                .trend
                .iter()
                .map(|p| SeriesPoint {
                    x: p.date.to_string(),
                    y: p.amount,
                })
                .collect(),
        },
        category_pie: PieChart {
            title: TITLE_CATEGORY_PIE.to_string(),
            slices: labeled_values(&report.category_totals),
        },
        state_bar: BarChart {
            title: TITLE_STATE_BAR.to_string(),
            bars: labeled_values(&report.state_totals),
        },
        delivery_status: BarChart {
            title: TITLE_DELIVERY_STATUS.to_string(),
            bars: labeled_values(&report.delivery_totals),
        },
        top_products: BarChart {
            title: TITLE_TOP_PRODUCTS.to_string(),
            bars: labeled_values(&report.top_products),
        },
        customer_ratings: Histogram {
            title: TITLE_CUSTOMER_RATINGS.to_string(),
            buckets: bin_values(&report.ratings.values, report.ratings.bucket_hint),
        },
    }
}

fn labeled_values(totals: &[sales_engine::GroupTotal]) -> Vec<LabeledValue> {
    totals
        .iter()
        .map(|g| LabeledValue {
            label: g.label.clone(),
            value: g.total,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_engine::{
        build_report, Dataset, FilterCriteria, NaiveDate, ReportOptions, Transaction,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_report() -> DashboardReport {
        let dataset = Dataset::new(vec![
            Transaction::new(date(2023, 1, 1), 100.0, "CA", "X", "Delivered", "Shoes")
                .with_rating(4.0),
            Transaction::new(date(2023, 1, 2), 50.0, "CA", "Y", "Pending", "Socks")
                .with_rating(2.0),
            Transaction::new(date(2023, 1, 1), 200.0, "NY", "X", "Delivered", "Shoes"),
        ]);
        let criteria = FilterCriteria::new(date(2023, 1, 1), date(2023, 1, 2), "CA");
        build_report(&dataset, &criteria, &ReportOptions::default())
    }

    #[test]
    fn test_build_charts_carries_titles_and_data() {
        let charts = build_charts(&sample_report());

        assert_eq!(charts.sales_trend.title, TITLE_SALES_TREND);
        assert_eq!(charts.sales_trend.points.len(), 2);
        assert_eq!(charts.sales_trend.points[0].x, "2023-01-01");

        assert_eq!(charts.category_pie.slices.len(), 2);
        assert_eq!(charts.state_bar.bars.len(), 2);
        assert_eq!(charts.top_products.title, TITLE_TOP_PRODUCTS);
    }

    #[test]
    fn test_ratings_binned_with_report_hint() {
        let charts = build_charts(&sample_report());

        let total: usize = charts.customer_ratings.buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, 2);
        assert_eq!(charts.customer_ratings.buckets.len(), 10);
    }

    #[test]
    fn test_empty_report_yields_blank_charts() {
        let charts = build_charts(&DashboardReport::empty(10));

        assert!(charts.sales_trend.points.is_empty());
        assert!(charts.category_pie.slices.is_empty());
        assert!(charts.customer_ratings.buckets.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let charts = build_charts(&sample_report());
        let json = charts.to_json();
        let back = DashboardCharts::from_json(&json).unwrap();
        assert_eq!(back, charts);
    }
}
