//! Data models
//!
//! Rust structs for export rows and the derived chart series.

mod fields;
mod food;
mod glucose;
mod series;

pub use fields::{numeric_field, timestamp_field, INVALID_TIMESTAMP};
pub use food::{
    parse_food, FoodEvent, Nutrient, FOOD_CALORIE_COLUMN, FOOD_CARB_COLUMN,
    FOOD_PROTEIN_COLUMN, FOOD_SUGAR_COLUMN, FOOD_TIMESTAMP_COLUMN,
};
pub use glucose::{
    parse_glucose, GlucoseReading, GLUCOSE_TIMESTAMP_COLUMN, GLUCOSE_VALUE_COLUMN,
};
pub use series::{
    AxisSide, DayChart, HourBucket, HourlyNutrients, SeriesId, SeriesSpec, SmoothedPoint,
    GLUCOSE_AXIS_LABEL, SERIES_TABLE, X_AXIS_LABEL,
};
