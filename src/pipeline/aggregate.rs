//! Hourly aggregation
//!
//! Buckets food events by clock hour and sums one nutrient per bucket.

use chrono::{NaiveDateTime, Timelike};

use crate::models::{FoodEvent, HourBucket, Nutrient};

/// Zero out minutes, seconds and sub-seconds.
fn truncate_to_hour(ts: NaiveDateTime) -> NaiveDateTime {
    ts.date().and_hms_opt(ts.hour(), 0, 0).unwrap_or(ts)
}

/// Sum one nutrient dimension into per-hour buckets.
///
/// The bucket key is the event timestamp truncated to the hour; totals sum
/// within a key. Buckets appear in first-occurrence order of their key and
/// the input is not assumed sorted.
pub fn aggregate_by_hour(events: &[FoodEvent], nutrient: Nutrient) -> Vec<HourBucket> {
    // A day holds at most 24 distinct keys
    let mut buckets: Vec<HourBucket> = Vec::new();

    for event in events {
        let hour_start = truncate_to_hour(event.timestamp);
        let amount = event.nutrient(nutrient);

        match buckets.iter_mut().find(|b| b.hour_start == hour_start) {
            Some(bucket) => bucket.total += amount,
            None => buckets.push(HourBucket { hour_start, total: amount }),
        }
    }

    buckets
}
