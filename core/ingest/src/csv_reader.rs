//! FILENAME: core/ingest/src/csv_reader.rs
//! CSV dataset loader.
//!
//! Reads a retail transaction export, locates the known columns by header
//! name, and produces a pre-validated `Dataset`. Rows with unparseable
//! dates or amounts are dropped and counted, so everything downstream can
//! rely on every record carrying a real calendar date and a numeric amount.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;
use sales_engine::{Dataset, Transaction};

use crate::IngestError;

// ============================================================================
// COLUMN NAMES (as exported by the retail system)
// ============================================================================

const COL_DATE: &str = "TransactionDate";
const COL_AMOUNT: &str = "TotalAmount";
const COL_STATE: &str = "State";
const COL_SUB_CATEGORY: &str = "SubCategory";
const COL_DELIVERY_STATUS: &str = "DeliveryStatus";
const COL_PRODUCT_NAME: &str = "ProductName";
const COL_RATING: &str = "CustomerRating";

/// Date layouts accepted in the `TransactionDate` column. Timestamped
/// layouts are truncated to their calendar date.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y", "%m/%d/%Y"];

// ============================================================================
// COLUMN MAP
// ============================================================================

/// Resolved header positions for the known columns.
/// Unknown extra columns are simply ignored.
struct ColumnMap {
    date: usize,
    amount: usize,
    state: usize,
    sub_category: usize,
    delivery_status: usize,
    product_name: usize,
    /// The rating column is optional; an export without it yields a dataset
    /// with no ratings (and a blank ratings histogram), not an error.
    rating: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self, IngestError> {
        let find = |name: &str| -> Result<usize, IngestError> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| IngestError::MissingColumn(name.to_string()))
        };

        Ok(ColumnMap {
            date: find(COL_DATE)?,
            amount: find(COL_AMOUNT)?,
            state: find(COL_STATE)?,
            sub_category: find(COL_SUB_CATEGORY)?,
            delivery_status: find(COL_DELIVERY_STATUS)?,
            product_name: find(COL_PRODUCT_NAME)?,
            rating: headers.iter().position(|h| h.trim() == COL_RATING),
        })
    }
}

// ============================================================================
// LOADING
// ============================================================================

/// Loads a transaction dataset from a CSV file on disk.
pub fn load_csv(path: &Path) -> Result<Dataset, IngestError> {
    let file = File::open(path)?;
    read_csv(file)
}

/// Reads a transaction dataset from any CSV source.
pub fn read_csv<R: Read>(reader: R) -> Result<Dataset, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(csv_reader.headers()?)?;

    let mut records = Vec::new();
    let mut dropped_dates = 0usize;
    let mut dropped_amounts = 0usize;

    for row in csv_reader.records() {
        let row = row?;

        let date = match row.get(columns.date).and_then(parse_transaction_date) {
            Some(d) => d,
            None => {
                dropped_dates += 1;
                continue;
            }
        };
        let total_amount = match row.get(columns.amount).and_then(parse_number) {
            Some(a) => a,
            None => {
                dropped_amounts += 1;
                continue;
            }
        };

        let mut record = Transaction::new(
            date,
            total_amount,
            row.get(columns.state).unwrap_or_default(),
            row.get(columns.sub_category).unwrap_or_default(),
            row.get(columns.delivery_status).unwrap_or_default(),
            row.get(columns.product_name).unwrap_or_default(),
        );
        if let Some(rating) = columns
            .rating
            .and_then(|idx| row.get(idx))
            .and_then(parse_number)
        {
            record = record.with_rating(rating);
        }
        records.push(record);
    }

    if dropped_dates > 0 {
        log::warn!("dropped {} row(s) with unparseable dates", dropped_dates);
    }
    if dropped_amounts > 0 {
        log::warn!("dropped {} row(s) with unparseable amounts", dropped_amounts);
    }
    if records.is_empty() {
        return Err(IngestError::EmptyDataset);
    }
    log::debug!(
        "loaded {} transaction(s), dropped {}",
        records.len(),
        dropped_dates + dropped_amounts
    );

    Ok(Dataset::new(records))
}

// ============================================================================
// FIELD PARSING
// ============================================================================

/// Parses a date cell, trying timestamped layouts first.
fn parse_transaction_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(raw, format) {
            return Some(d);
        }
    }
    None
}

/// Parses a numeric cell; empty cells are absent, not zero.
fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok()
}
