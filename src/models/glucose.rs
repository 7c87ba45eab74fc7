//! Glucose reading model
//!
//! Represents one row of a CGM export: a wall-clock timestamp and a glucose
//! value in mg/dL.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::input::RawRow;

use super::fields::{numeric_field, timestamp_field};

/// Export column holding the reading timestamp.
pub const GLUCOSE_TIMESTAMP_COLUMN: &str = "Timestamp (YYYY-MM-DDThh:mm:ss)";
/// Export column holding the glucose value.
pub const GLUCOSE_VALUE_COLUMN: &str = "Glucose Value (mg/dL)";

/// A single CGM reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlucoseReading {
    pub timestamp: NaiveDateTime,
    /// mg/dL; 0.0 when the export row had no usable value
    pub glucose_value: f64,
}

impl GlucoseReading {
    /// Create from a CSV row
    pub fn from_row(row: &RawRow) -> Self {
        Self {
            timestamp: timestamp_field(row, GLUCOSE_TIMESTAMP_COLUMN),
            glucose_value: numeric_field(row, GLUCOSE_VALUE_COLUMN),
        }
    }
}

/// Parse every export row into a reading, preserving row order.
///
/// Never fails: bad cells degrade per field instead of rejecting the file.
pub fn parse_glucose(rows: &[RawRow]) -> Vec<GlucoseReading> {
    rows.iter().map(GlucoseReading::from_row).collect()
}
