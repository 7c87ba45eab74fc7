//! Chart data preparation pipeline
//!
//! One-shot assembly of the daily chart bundle: day filtering, exponential
//! smoothing and hourly nutrient aggregation over already parsed records.

pub mod aggregate;
pub mod filter;
pub mod smooth;

pub use aggregate::aggregate_by_hour;
pub use filter::{filter_to_day, Timestamped};
pub use smooth::exponential_smooth;

use crate::config::ChartConfig;
use crate::models::{
    DayChart, FoodEvent, GlucoseReading, HourlyNutrients, Nutrient, GLUCOSE_AXIS_LABEL,
    SERIES_TABLE, X_AXIS_LABEL,
};

/// Prepare the full chart bundle for the configured day.
///
/// Filters both record sets to the day, smooths the glucose series and
/// buckets each nutrient by hour. Empty day-filtered sets produce empty
/// series and a warning, never an error.
pub fn prepare_day_chart(
    glucose: Vec<GlucoseReading>,
    food: Vec<FoodEvent>,
    config: &ChartConfig,
) -> DayChart {
    let (day_start, day_end) = config.day_bounds();

    let glucose = filter_to_day(glucose, day_start, day_end);
    if glucose.is_empty() {
        tracing::warn!(
            "No glucose data found for {}",
            config.target_date.format("%B %-d, %Y")
        );
    }

    let food = filter_to_day(food, day_start, day_end);
    if food.is_empty() {
        tracing::warn!(
            "No food data found for {}",
            config.target_date.format("%B %-d, %Y")
        );
    }

    let smoothed = exponential_smooth(&glucose, config.smoothing_alpha);

    let hourly = HourlyNutrients {
        calories: aggregate_by_hour(&food, Nutrient::Calories),
        protein: aggregate_by_hour(&food, Nutrient::Protein),
        carb: aggregate_by_hour(&food, Nutrient::Carb),
        sugar: aggregate_by_hour(&food, Nutrient::Sugar),
    };

    tracing::debug!(
        "Prepared chart for {}: {} glucose readings, {} food events",
        config.target_date,
        glucose.len(),
        food.len()
    );

    DayChart {
        day_start,
        day_end,
        smoothing_alpha: config.smoothing_alpha,
        glucose,
        smoothed,
        food,
        hourly,
        series: SERIES_TABLE,
        x_axis_label: X_AXIS_LABEL,
        glucose_axis_label: GLUCOSE_AXIS_LABEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn reading(ts: &str, value: f64) -> GlucoseReading {
        GlucoseReading {
            timestamp: NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S").unwrap(),
            glucose_value: value,
        }
    }

    fn meal(ts: &str, calories: f64) -> FoodEvent {
        FoodEvent {
            timestamp: NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap(),
            calories,
            protein: 5.0,
            carb: 20.0,
            sugar: 8.0,
        }
    }

    #[test]
    fn test_prepare_filters_and_derives() {
        let glucose = vec![
            reading("2020-02-14T08:00:00", 100.0),
            reading("2020-02-14T08:15:00", 120.0),
            reading("2020-02-15T08:00:00", 140.0), // next day, dropped
        ];
        let food = vec![
            meal("2020-02-14 08:10:00", 50.0),
            meal("2020-02-14 08:50:00", 30.0),
            meal("2020-01-31 12:00:00", 999.0), // other day, dropped
        ];

        let chart = prepare_day_chart(glucose, food, &ChartConfig::default());

        assert_eq!(chart.glucose.len(), 2);
        assert_eq!(chart.smoothed.len(), 2);
        assert_eq!(chart.food.len(), 2);
        assert_eq!(chart.hourly.calories.len(), 1);
        assert!((chart.hourly.calories[0].total - 80.0).abs() < 0.001);
        assert!((chart.smoothing_alpha - 0.3).abs() < 0.001);
        assert_eq!(chart.day_start.to_string(), "2020-02-14 00:00:00");
        assert_eq!(chart.day_end.to_string(), "2020-02-14 23:59:59");
    }

    #[test]
    fn test_empty_day_is_not_an_error() {
        let glucose = vec![reading("2021-06-01T08:00:00", 100.0)];
        let chart = prepare_day_chart(glucose, Vec::new(), &ChartConfig::default());

        assert!(chart.glucose.is_empty());
        assert!(chart.smoothed.is_empty());
        assert!(chart.food.is_empty());
        assert!(chart.hourly.calories.is_empty());
        assert!(chart.hourly.protein.is_empty());
        assert!(chart.hourly.carb.is_empty());
        assert!(chart.hourly.sugar.is_empty());
    }

    #[test]
    fn test_bundle_carries_series_table_and_labels() {
        let chart = prepare_day_chart(Vec::new(), Vec::new(), &ChartConfig::default());
        assert_eq!(chart.series.len(), 6);
        assert_eq!(chart.x_axis_label, "Time of Day");
        assert_eq!(chart.glucose_axis_label, "Glucose (mg/dL)");
    }

    #[test]
    fn test_bundle_serializes_to_json() {
        let glucose = vec![reading("2020-02-14T08:00:00", 100.0)];
        let food = vec![meal("2020-02-14 08:10:00", 50.0)];
        let chart = prepare_day_chart(glucose, food, &ChartConfig::default());

        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["series"][0]["id"], "smoothed_glucose");
        assert_eq!(json["series"][0]["visible_by_default"], true);
        assert_eq!(json["hourly"]["calories"][0]["total"], 50.0);
    }

    #[test]
    fn test_hourly_aggregation_runs_all_four_dimensions() {
        let food = vec![
            meal("2020-02-14 12:10:00", 400.0),
            meal("2020-02-14 12:40:00", 200.0),
        ];
        let chart = prepare_day_chart(Vec::new(), food, &ChartConfig::default());

        assert!((chart.hourly.calories[0].total - 600.0).abs() < 0.001);
        assert!((chart.hourly.protein[0].total - 10.0).abs() < 0.001);
        assert!((chart.hourly.carb[0].total - 40.0).abs() < 0.001);
        assert!((chart.hourly.sugar[0].total - 16.0).abs() < 0.001);

        for nutrient in Nutrient::ALL {
            assert_eq!(chart.hourly.for_nutrient(nutrient).len(), 1);
        }
    }
}
