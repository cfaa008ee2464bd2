//! FILENAME: core/sales-engine/src/record.rs
//! PURPOSE: Defines the fundamental data structure for a single retail transaction.
//! CONTEXT: This file contains the `Transaction` struct, the atomic unit of the
//! source dataset. Records are pre-validated by the loader: the date is always
//! a real calendar date, and only the customer rating may be absent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single retail transaction from the source dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date of the transaction (time-of-day is truncated at load).
    pub date: NaiveDate,

    /// Monetary value of the transaction.
    pub total_amount: f64,

    /// Geographic region of the transaction (exact-match filter key).
    pub state: String,

    /// Product subcategory.
    pub sub_category: String,

    /// Fulfillment status (e.g., "Delivered", "In Transit").
    pub delivery_status: String,

    /// Product display name.
    pub product_name: String,

    /// Optional customer rating; `None` when the source row had no rating.
    pub customer_rating: Option<f64>,
}

impl Transaction {
    /// Creates a transaction without a customer rating.
    pub fn new(
        date: NaiveDate,
        total_amount: f64,
        state: impl Into<String>,
        sub_category: impl Into<String>,
        delivery_status: impl Into<String>,
        product_name: impl Into<String>,
    ) -> Self {
        Transaction {
            date,
            total_amount,
            state: state.into(),
            sub_category: sub_category.into(),
            delivery_status: delivery_status.into(),
            product_name: product_name.into(),
            customer_rating: None,
        }
    }

    /// Attaches a customer rating to the transaction.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.customer_rating = Some(rating);
        self
    }
}
