//! Exponential smoothing
//!
//! Single-exponential filter over the day's glucose readings. CGM traces
//! are noisy; the smoothed line is what the chart shows by default.

use crate::models::{GlucoseReading, SmoothedPoint};

/// Smooth glucose readings with a fixed-alpha exponential filter.
///
/// The running value seeds with the first reading's glucose value, then
/// every reading in order, the first included, passes through
/// `running = alpha * value + (1 - alpha) * running`. The first output
/// therefore equals the first raw value. One point per reading, same
/// order; an empty day smooths to an empty series.
pub fn exponential_smooth(readings: &[GlucoseReading], alpha: f64) -> Vec<SmoothedPoint> {
    let Some(first) = readings.first() else {
        return Vec::new();
    };

    let mut running = first.glucose_value;
    let mut smoothed = Vec::with_capacity(readings.len());
    for reading in readings {
        running = alpha * reading.glucose_value + (1.0 - alpha) * running;
        smoothed.push(SmoothedPoint {
            timestamp: reading.timestamp,
            smoothed_value: running,
        });
    }
    smoothed
}
