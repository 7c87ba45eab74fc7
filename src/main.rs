//! cgmday
//!
//! Prepares single-day glucose/food chart data from CSV exports and hands
//! the bundle to the renderer as JSON on stdout.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use cgmday::config::ChartConfig;
use cgmday::models::{parse_food, parse_glucose};
use cgmday::{build_info, input, pipeline};

/// Get the glucose export path from environment or use default
fn get_glucose_path() -> PathBuf {
    std::env::var("CGMDAY_GLUCOSE_CSV")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("Glucose.csv"))
}

/// Get the food log path from environment or use default
fn get_food_path() -> PathBuf {
    std::env::var("CGMDAY_FOOD_CSV")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("Food.csv"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to keep stdout clean for the JSON bundle)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("cgmday=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();

    // Resolve configuration
    let config = ChartConfig::from_env()?;
    eprintln!(
        "Target day: {} (alpha {})",
        config.target_date, config.smoothing_alpha
    );

    // Load both exports
    let glucose_path = get_glucose_path();
    let food_path = get_food_path();
    eprintln!("Glucose export: {}", glucose_path.display());
    eprintln!("Food log: {}", food_path.display());

    let glucose_rows = input::read_rows(&glucose_path)?;
    let food_rows = input::read_rows(&food_path)?;

    // Parse and prepare
    let glucose = parse_glucose(&glucose_rows);
    let food = parse_food(&food_rows);
    let chart = pipeline::prepare_day_chart(glucose, food, &config);

    // Hand the bundle over as JSON
    let json = serde_json::to_string_pretty(&chart)?;
    match std::env::var("CGMDAY_OUTPUT") {
        Ok(path) => {
            std::fs::write(&path, json)?;
            eprintln!("Chart data written to {}", path);
        }
        Err(_) => println!("{}", json),
    }

    Ok(())
}
