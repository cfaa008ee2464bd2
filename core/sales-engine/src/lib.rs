//! FILENAME: core/sales-engine/src/lib.rs
//! Transaction aggregation subsystem for Vendra.
//!
//! This crate provides the dashboard's calculation core as a standalone
//! library, independent of any UI shell. It owns no I/O: the loader hands
//! it an immutable `Dataset`, the shell hands it `FilterCriteria`, and it
//! answers with a `DashboardReport`.
//!
//! Layers:
//! - `record` / `dataset`: Immutable source data (WHAT we analyze)
//! - `criteria`: Serializable filter configuration (what the user asked for)
//! - `aggregate`: Group-by-sum machinery (HOW we reduce)
//! - `report`: Chart-ready result sets (WHAT we display)
//! - `engine`: Derivation logic (HOW we calculate)

pub mod aggregate;
pub mod criteria;
pub mod dataset;
pub mod engine;
pub mod record;
pub mod report;

// Re-export commonly used types at the crate root
pub use criteria::{FilterCriteria, ReportOptions, StateTotalsScope};
pub use dataset::Dataset;
pub use engine::build_report;
pub use record::Transaction;
pub use report::{DashboardReport, GroupTotal, RatingSample, TrendPoint};

// The date type of the public API, re-exported so downstream crates don't
// need their own chrono pin to construct criteria.
pub use chrono::NaiveDate;
