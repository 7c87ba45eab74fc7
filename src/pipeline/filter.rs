//! Day filtering
//!
//! Restricts parsed records to one closed day interval.

use chrono::NaiveDateTime;

use crate::models::{FoodEvent, GlucoseReading};

/// Anything carrying a wall-clock instant
pub trait Timestamped {
    fn timestamp(&self) -> NaiveDateTime;
}

impl Timestamped for GlucoseReading {
    fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }
}

impl Timestamped for FoodEvent {
    fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }
}

/// Keep records inside the closed interval `[day_start, day_end]`.
///
/// Preserves relative order and never assumes the input is sorted. Rows
/// whose timestamp failed to parse carry the invalid sentinel and fall
/// below any day start. An empty result is a day with no records, not an
/// error.
pub fn filter_to_day<T: Timestamped>(
    mut items: Vec<T>,
    day_start: NaiveDateTime,
    day_end: NaiveDateTime,
) -> Vec<T> {
    items.retain(|item| {
        let ts = item.timestamp();
        ts >= day_start && ts <= day_end
    });
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;
    use crate::models::INVALID_TIMESTAMP;

    fn reading(ts: &str, value: f64) -> GlucoseReading {
        GlucoseReading {
            timestamp: NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S").unwrap(),
            glucose_value: value,
        }
    }

    fn default_bounds() -> (NaiveDateTime, NaiveDateTime) {
        ChartConfig::default().day_bounds()
    }

    #[test]
    fn test_bounds_are_inclusive_on_both_ends() {
        let (start, end) = default_bounds();
        let readings = vec![
            reading("2020-02-13T23:59:59", 90.0),
            reading("2020-02-14T00:00:00", 100.0),
            reading("2020-02-14T23:59:59", 110.0),
            reading("2020-02-15T00:00:00", 120.0),
        ];

        let kept = filter_to_day(readings, start, end);
        assert_eq!(kept.len(), 2);
        assert!((kept[0].glucose_value - 100.0).abs() < 0.001);
        assert!((kept[1].glucose_value - 110.0).abs() < 0.001);
    }

    #[test]
    fn test_preserves_input_order() {
        let (start, end) = default_bounds();
        let readings = vec![
            reading("2020-02-14T12:00:00", 3.0),
            reading("2020-02-14T08:00:00", 1.0),
            reading("2020-02-14T10:00:00", 2.0),
        ];

        let kept = filter_to_day(readings, start, end);
        let values: Vec<f64> = kept.iter().map(|r| r.glucose_value).collect();
        assert_eq!(values, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_idempotent_for_fixed_bounds() {
        let (start, end) = default_bounds();
        let readings = vec![
            reading("2020-02-14T08:00:00", 100.0),
            reading("2020-02-16T08:00:00", 140.0),
            reading("2020-02-14T09:00:00", 105.0),
        ];

        let once = filter_to_day(readings, start, end);
        let twice = filter_to_day(once.clone(), start, end);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_invalid_sentinel_is_excluded() {
        let (start, end) = default_bounds();
        let readings = vec![
            GlucoseReading {
                timestamp: INVALID_TIMESTAMP,
                glucose_value: 117.0,
            },
            reading("2020-02-14T08:00:00", 100.0),
        ];

        let kept = filter_to_day(readings, start, end);
        assert_eq!(kept.len(), 1);
        assert!((kept[0].glucose_value - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let (start, end) = default_bounds();
        let kept = filter_to_day(Vec::<GlucoseReading>::new(), start, end);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_filters_food_events_too() {
        let (start, end) = default_bounds();
        let events = vec![
            FoodEvent {
                timestamp: NaiveDateTime::parse_from_str(
                    "2020-02-14 12:30:00",
                    "%Y-%m-%d %H:%M:%S",
                )
                .unwrap(),
                calories: 450.0,
                protein: 20.0,
                carb: 50.0,
                sugar: 10.0,
            },
            FoodEvent {
                timestamp: NaiveDateTime::parse_from_str(
                    "2020-03-01 12:30:00",
                    "%Y-%m-%d %H:%M:%S",
                )
                .unwrap(),
                calories: 300.0,
                protein: 10.0,
                carb: 30.0,
                sugar: 5.0,
            },
        ];

        let kept = filter_to_day(events, start, end);
        assert_eq!(kept.len(), 1);
        assert!((kept[0].calories - 450.0).abs() < 0.001);
    }
}
