// ABOUTME: Tests for trend configuration loading from environment variables
// ABOUTME: Validates defaults, overrides, parse failures, and range checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use gravity_intelligence::{ConfigError, TrendConfig};
use serial_test::serial;
use std::env;

const VARS: [&str; 3] = [
    "GRAVITY_TREND_AWAY_HORIZON_DAYS",
    "GRAVITY_TREND_MAX_HORIZON_WEEKS",
    "GRAVITY_TREND_MIN_WINDOW_POINTS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    let config = TrendConfig::from_env().unwrap();
    assert_eq!(config, TrendConfig::default());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    env::set_var("GRAVITY_TREND_AWAY_HORIZON_DAYS", "14");
    env::set_var("GRAVITY_TREND_MAX_HORIZON_WEEKS", " 26 ");
    env::set_var("GRAVITY_TREND_MIN_WINDOW_POINTS", "3");

    let config = TrendConfig::from_env().unwrap();
    assert_eq!(config.away_horizon_days, 14);
    assert_eq!(config.max_horizon_weeks, 26);
    assert_eq!(config.min_window_points, 3);
    clear_env();
}

#[test]
#[serial]
fn test_from_env_rejects_garbage() {
    clear_env();
    env::set_var("GRAVITY_TREND_MAX_HORIZON_WEEKS", "a year");
    let result = TrendConfig::from_env();
    assert!(matches!(result, Err(ConfigError::Parse(_))));
    clear_env();
}

#[test]
#[serial]
fn test_from_env_rejects_single_point_window() {
    clear_env();
    env::set_var("GRAVITY_TREND_MIN_WINDOW_POINTS", "1");
    let result = TrendConfig::from_env();
    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
    clear_env();
}

#[test]
fn test_zero_horizons_are_invalid() {
    let no_away = TrendConfig {
        away_horizon_days: 0,
        ..TrendConfig::default()
    };
    assert!(no_away.validate().is_err());

    let no_max = TrendConfig {
        max_horizon_weeks: 0,
        ..TrendConfig::default()
    };
    assert!(no_max.validate().is_err());
}
