//! cgmday Library
//!
//! Turns a CGM glucose export and a food log into the data a single-day
//! chart needs: parsed readings, a smoothed glucose series, hourly
//! nutrient totals and the series table the renderer consumes.

pub mod build_info;
pub mod config;
pub mod input;
pub mod models;
pub mod pipeline;
