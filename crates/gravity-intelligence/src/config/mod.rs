// ABOUTME: Trend projection configuration with environment overrides
// ABOUTME: Safety horizon, maximum projection length, and minimum window size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Trend projection configuration.
//!
//! Defaults reproduce the dashboard's historical behaviour; every value can be
//! overridden through a `GRAVITY_TREND_*` environment variable.

use gravity_core::constants::trend::{AWAY_HORIZON_DAYS, MAX_HORIZON_WEEKS, MIN_WINDOW_POINTS};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Tuning for [`crate::TrendEstimator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Days projected when the trend moves away from the target
    pub away_horizon_days: u32,
    /// Longest projection toward the target, in weeks
    pub max_horizon_weeks: u32,
    /// Minimum samples inside the window for a fit (never below 2)
    pub min_window_points: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            away_horizon_days: AWAY_HORIZON_DAYS,
            max_horizon_weeks: MAX_HORIZON_WEEKS,
            min_window_points: MIN_WINDOW_POINTS,
        }
    }
}

impl TrendConfig {
    /// Load trend configuration from environment, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for a variable that is set but not a
    /// number, and `ConfigError::ValueOutOfRange` when validation fails.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            away_horizon_days: env_or("GRAVITY_TREND_AWAY_HORIZON_DAYS", AWAY_HORIZON_DAYS)?,
            max_horizon_weeks: env_or("GRAVITY_TREND_MAX_HORIZON_WEEKS", MAX_HORIZON_WEEKS)?,
            min_window_points: env_or("GRAVITY_TREND_MIN_WINDOW_POINTS", MIN_WINDOW_POINTS)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the values are usable for a projection
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a zero horizon or a
    /// minimum window below two points.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.away_horizon_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "away_horizon_days must be at least 1",
            ));
        }
        if self.max_horizon_weeks == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_horizon_weeks must be at least 1",
            ));
        }
        if self.min_window_points < MIN_WINDOW_POINTS {
            return Err(ConfigError::ValueOutOfRange(
                "min_window_points must be at least 2",
            ));
        }
        Ok(())
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            warn!(variable = key, value = %raw, "Invalid trend configuration value");
            ConfigError::Parse(format!("{key}={raw} is not a valid number"))
        }),
        Err(_) => Ok(default),
    }
}
