//! FILENAME: core/vendra-format/src/histogram.rs
//! Equal-width histogram binning for the customer ratings panel.
//!
//! Binning happens at rendering time: the report engine hands over the raw
//! rating sample plus a suggested bucket count, and this module turns it
//! into drawable buckets.

use serde::{Deserialize, Serialize};

/// One histogram bar: a half-open value range `[start, end)` and the number
/// of samples falling into it. The final bucket is closed at `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Bins samples into `bucket_count` equal-width buckets spanning the
/// observed min..max.
///
/// An empty sample or a zero bucket count yields no buckets. A sample with
/// a single distinct value yields one bucket holding everything.
pub fn bin_values(values: &[f64], bucket_count: usize) -> Vec<HistogramBucket> {
    if values.is_empty() || bucket_count == 0 {
        return Vec::new();
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return vec![HistogramBucket {
            start: min,
            end: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / bucket_count as f64;
    let mut buckets: Vec<HistogramBucket> = (0..bucket_count)
        .map(|i| HistogramBucket {
            start: min + width * i as f64,
            end: min + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for &value in values {
        let index = (((value - min) / width) as usize).min(bucket_count - 1);
        buckets[index].count += 1;
    }
    buckets
}
