//! Chart configuration
//!
//! Target day and smoothing strength, resolvable from the environment.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming the target day (YYYY-MM-DD).
pub const TARGET_DATE_ENV: &str = "CGMDAY_TARGET_DATE";
/// Environment variable overriding the smoothing alpha.
pub const SMOOTHING_ALPHA_ENV: &str = "CGMDAY_SMOOTHING_ALPHA";

/// Default smoothing strength.
pub const DEFAULT_SMOOTHING_ALPHA: f64 = 0.3;

/// Day the bundled sample exports cover.
fn default_target_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 2, 14).unwrap_or(NaiveDate::MIN)
}

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid smoothing alpha '{0}': must be a number in (0, 1]")]
    InvalidAlpha(String),

    #[error("Invalid target date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Configuration for one day's chart preparation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Day the chart covers
    pub target_date: NaiveDate,
    /// Exponential smoothing strength, in (0, 1]
    pub smoothing_alpha: f64,
}

impl ChartConfig {
    /// Create a validated configuration.
    pub fn new(target_date: NaiveDate, smoothing_alpha: f64) -> Result<Self, ConfigError> {
        if !smoothing_alpha.is_finite() || smoothing_alpha <= 0.0 || smoothing_alpha > 1.0 {
            return Err(ConfigError::InvalidAlpha(smoothing_alpha.to_string()));
        }
        Ok(Self {
            target_date,
            smoothing_alpha,
        })
    }

    /// Load configuration from the environment, with defaults for unset vars.
    pub fn from_env() -> Result<Self, ConfigError> {
        let target_date = match std::env::var(TARGET_DATE_ENV) {
            Ok(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map_err(|_| ConfigError::InvalidDate(raw.clone()))?,
            Err(_) => default_target_date(),
        };

        let smoothing_alpha = match std::env::var(SMOOTHING_ALPHA_ENV) {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidAlpha(raw.clone()))?,
            Err(_) => DEFAULT_SMOOTHING_ALPHA,
        };

        Self::new(target_date, smoothing_alpha)
    }

    /// Inclusive bounds of the target day: midnight through 23:59:59.
    pub fn day_bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        let day_start = self.target_date.and_time(NaiveTime::MIN);
        let day_end = day_start + Duration::seconds(86_399);
        (day_start, day_end)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            target_date: default_target_date(),
            smoothing_alpha: DEFAULT_SMOOTHING_ALPHA,
        }
    }
}
