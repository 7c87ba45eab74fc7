//! Row field coercion
//!
//! CGM exports and food logs are messy. Field parsing here never fails:
//! numeric fields degrade to 0.0 and timestamps degrade to a sentinel
//! instant that no day range contains, so a bad cell costs one value,
//! never the whole file.

use chrono::NaiveDateTime;

use crate::input::RawRow;

/// Sentinel for timestamps that could not be parsed.
///
/// Sorts below any real day start, so day filtering drops the row without
/// special-casing.
pub const INVALID_TIMESTAMP: NaiveDateTime = NaiveDateTime::MIN;

/// Accepted timestamp layouts, tried in order.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp field, degrading to [`INVALID_TIMESTAMP`] when the
/// field is missing, empty, or matches no accepted layout.
pub fn timestamp_field(row: &RawRow, column: &str) -> NaiveDateTime {
    let Some(raw) = row.get(column) else {
        return INVALID_TIMESTAMP;
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return INVALID_TIMESTAMP;
    }

    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, format) {
            return ts;
        }
    }

    tracing::warn!("Unparseable {} '{}', row falls outside any day", column, raw);
    INVALID_TIMESTAMP
}

/// Parse a numeric field, degrading to 0.0 when the field is missing,
/// empty, non-numeric or non-finite.
pub fn numeric_field(row: &RawRow, column: &str) -> f64 {
    let Some(raw) = row.get(column) else {
        return 0.0;
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            tracing::warn!("Non-numeric {} '{}', using 0.0", column, raw);
            0.0
        }
    }
}
