//! Chart series models
//!
//! Derived series handed to the renderer, plus the declarative table that
//! tells it which axis, color, legend text and initial visibility each
//! series gets. The pipeline fills these; drawing them is the renderer's
//! job.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::food::{FoodEvent, Nutrient};
use super::glucose::GlucoseReading;

/// X axis caption for the daily chart.
pub const X_AXIS_LABEL: &str = "Time of Day";
/// Left (glucose) axis caption.
pub const GLUCOSE_AXIS_LABEL: &str = "Glucose (mg/dL)";

/// One exponentially smoothed glucose point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmoothedPoint {
    pub timestamp: NaiveDateTime,
    pub smoothed_value: f64,
}

/// Total of one nutrient over one clock hour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourBucket {
    /// Start of the hour (minutes and seconds zeroed)
    pub hour_start: NaiveDateTime,
    pub total: f64,
}

/// Which vertical axis a series is plotted against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisSide {
    /// Glucose axis
    Left,
    /// Nutrient axis
    Right,
}

/// Identifier for each renderable series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesId {
    SmoothedGlucose,
    RawGlucose,
    Calories,
    Protein,
    Carb,
    Sugar,
}

impl SeriesId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesId::SmoothedGlucose => "smoothed_glucose",
            SeriesId::RawGlucose => "raw_glucose",
            SeriesId::Calories => "calories",
            SeriesId::Protein => "protein",
            SeriesId::Carb => "carb",
            SeriesId::Sugar => "sugar",
        }
    }
}

/// Rendering configuration for one series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesSpec {
    pub id: SeriesId,
    pub axis: AxisSide,
    /// CSS color keyword
    pub color: &'static str,
    pub legend_label: &'static str,
    /// Whether the series starts visible before any toggling
    pub visible_by_default: bool,
}

/// The daily chart's fixed series layout.
///
/// Only the smoothed glucose line starts visible; every other series waits
/// behind its toggle.
pub const SERIES_TABLE: [SeriesSpec; 6] = [
    SeriesSpec {
        id: SeriesId::SmoothedGlucose,
        axis: AxisSide::Left,
        color: "blue",
        legend_label: "Smoothed Glucose",
        visible_by_default: true,
    },
    SeriesSpec {
        id: SeriesId::RawGlucose,
        axis: AxisSide::Left,
        color: "red",
        legend_label: "Raw Glucose",
        visible_by_default: false,
    },
    SeriesSpec {
        id: SeriesId::Calories,
        axis: AxisSide::Right,
        color: "orange",
        legend_label: "Calories (Kcal)",
        visible_by_default: false,
    },
    SeriesSpec {
        id: SeriesId::Protein,
        axis: AxisSide::Right,
        color: "green",
        legend_label: "Protein (g)",
        visible_by_default: false,
    },
    SeriesSpec {
        id: SeriesId::Carb,
        axis: AxisSide::Right,
        color: "green",
        legend_label: "Carb (g)",
        visible_by_default: false,
    },
    SeriesSpec {
        id: SeriesId::Sugar,
        axis: AxisSide::Right,
        color: "green",
        legend_label: "Sugar (g)",
        visible_by_default: false,
    },
];

/// Hour-bucketed totals for each charted nutrient
#[derive(Debug, Clone, Serialize)]
pub struct HourlyNutrients {
    pub calories: Vec<HourBucket>,
    pub protein: Vec<HourBucket>,
    pub carb: Vec<HourBucket>,
    pub sugar: Vec<HourBucket>,
}

impl HourlyNutrients {
    /// Buckets for one nutrient dimension
    pub fn for_nutrient(&self, nutrient: Nutrient) -> &[HourBucket] {
        match nutrient {
            Nutrient::Calories => &self.calories,
            Nutrient::Protein => &self.protein,
            Nutrient::Carb => &self.carb,
            Nutrient::Sugar => &self.sugar,
        }
    }
}

/// Everything the renderer needs for one day
#[derive(Debug, Clone, Serialize)]
pub struct DayChart {
    /// First instant of the chart day (00:00:00)
    pub day_start: NaiveDateTime,
    /// Last instant of the chart day (23:59:59)
    pub day_end: NaiveDateTime,
    /// Alpha used for the smoothed series
    pub smoothing_alpha: f64,
    /// Raw glucose readings inside the day
    pub glucose: Vec<GlucoseReading>,
    /// Smoothed glucose series, one point per reading
    pub smoothed: Vec<SmoothedPoint>,
    /// Food events inside the day
    pub food: Vec<FoodEvent>,
    /// Per-hour nutrient totals
    pub hourly: HourlyNutrients,
    /// Axis/color/legend/visibility table for the renderer
    pub series: [SeriesSpec; 6],
    pub x_axis_label: &'static str,
    pub glucose_axis_label: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_table_layout() {
        assert_eq!(SERIES_TABLE.len(), 6);

        // Only the smoothed glucose line starts visible
        let visible: Vec<_> = SERIES_TABLE
            .iter()
            .filter(|s| s.visible_by_default)
            .map(|s| s.id)
            .collect();
        assert_eq!(visible, vec![SeriesId::SmoothedGlucose]);

        // Glucose lines on the left axis, nutrient bars on the right
        for spec in &SERIES_TABLE {
            match spec.id {
                SeriesId::SmoothedGlucose | SeriesId::RawGlucose => {
                    assert_eq!(spec.axis, AxisSide::Left)
                }
                _ => assert_eq!(spec.axis, AxisSide::Right),
            }
        }
    }

    #[test]
    fn test_series_table_colors() {
        let color_of = |id: SeriesId| {
            SERIES_TABLE
                .iter()
                .find(|s| s.id == id)
                .map(|s| s.color)
                .unwrap_or("")
        };
        assert_eq!(color_of(SeriesId::SmoothedGlucose), "blue");
        assert_eq!(color_of(SeriesId::RawGlucose), "red");
        assert_eq!(color_of(SeriesId::Calories), "orange");
        assert_eq!(color_of(SeriesId::Protein), "green");
        assert_eq!(color_of(SeriesId::Carb), "green");
        assert_eq!(color_of(SeriesId::Sugar), "green");
    }

    #[test]
    fn test_nutrient_legend_labels_match_table() {
        for nutrient in Nutrient::ALL {
            let spec = SERIES_TABLE
                .iter()
                .find(|s| s.legend_label == nutrient.legend_label());
            assert!(spec.is_some(), "{} missing from series table", nutrient.as_str());
        }
    }

    #[test]
    fn test_series_id_serializes_snake_case() {
        let json = serde_json::to_string(&SeriesId::SmoothedGlucose).unwrap();
        assert_eq!(json, "\"smoothed_glucose\"");
    }
}
