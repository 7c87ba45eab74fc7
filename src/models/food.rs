//! Food event model
//!
//! Represents one row of a food log: when the eating began and the nutrient
//! amounts the chart plots as hourly bars.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::input::RawRow;

use super::fields::{numeric_field, timestamp_field};

/// Log column holding the eating start time.
pub const FOOD_TIMESTAMP_COLUMN: &str = "time_begin";
/// Log column holding calories in Kcal.
pub const FOOD_CALORIE_COLUMN: &str = "calorie";
/// Log column holding protein in grams.
pub const FOOD_PROTEIN_COLUMN: &str = "protein";
/// Log column holding total carbohydrate in grams.
pub const FOOD_CARB_COLUMN: &str = "total_carb";
/// Log column holding sugar in grams.
pub const FOOD_SUGAR_COLUMN: &str = "sugar";

/// Nutrient dimensions charted as hourly bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Calories,
    Protein,
    Carb,
    Sugar,
}

impl Nutrient {
    /// All charted nutrients, in chart order
    pub const ALL: [Nutrient; 4] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carb,
        Nutrient::Sugar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Protein => "protein",
            Nutrient::Carb => "carb",
            Nutrient::Sugar => "sugar",
        }
    }

    /// Legend text shown next to this nutrient's axis
    pub fn legend_label(&self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories (Kcal)",
            Nutrient::Protein => "Protein (g)",
            Nutrient::Carb => "Carb (g)",
            Nutrient::Sugar => "Sugar (g)",
        }
    }
}

/// A single food log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEvent {
    pub timestamp: NaiveDateTime,
    /// Kcal; 0.0 when the log row had no usable value
    pub calories: f64,
    /// Grams; 0.0 when the log row had no usable value
    pub protein: f64,
    /// Grams; 0.0 when the log row had no usable value
    pub carb: f64,
    /// Grams; 0.0 when the log row had no usable value
    pub sugar: f64,
}

impl FoodEvent {
    /// Create from a CSV row
    pub fn from_row(row: &RawRow) -> Self {
        Self {
            timestamp: timestamp_field(row, FOOD_TIMESTAMP_COLUMN),
            calories: numeric_field(row, FOOD_CALORIE_COLUMN),
            protein: numeric_field(row, FOOD_PROTEIN_COLUMN),
            carb: numeric_field(row, FOOD_CARB_COLUMN),
            sugar: numeric_field(row, FOOD_SUGAR_COLUMN),
        }
    }

    /// Amount of one nutrient dimension
    pub fn nutrient(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carb => self.carb,
            Nutrient::Sugar => self.sugar,
        }
    }
}

/// Parse every log row into a food event, preserving row order.
///
/// Never fails: bad cells degrade per field instead of rejecting the file.
pub fn parse_food(rows: &[RawRow]) -> Vec<FoodEvent> {
    rows.iter().map(FoodEvent::from_row).collect()
}
