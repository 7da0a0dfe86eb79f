// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates parsing of log level, environment, database URL, and trend overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use gravity_log::config::{AppConfig, DatabaseUrl, Environment, LogLevel, TrendConfig};
use gravity_log::errors::ErrorCode;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const TREND_VARS: [&str; 3] = [
    "GRAVITY_TREND_AWAY_HORIZON_DAYS",
    "GRAVITY_TREND_MAX_HORIZON_WEEKS",
    "GRAVITY_TREND_MIN_WINDOW_POINTS",
];

fn clear_env() {
    for key in ["DATABASE_URL", "ENVIRONMENT", "RUST_LOG"]
        .iter()
        .chain(TREND_VARS.iter())
    {
        env::remove_var(key);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("warning"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info);
    assert_eq!(LogLevel::Debug.to_string(), "debug");
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
    assert_eq!(
        Environment::from_str_or_default("anything"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
    assert!(Environment::Testing.is_testing());
}

#[test]
fn test_database_url_parsing() {
    let file = DatabaseUrl::parse_url("sqlite:./data/gravity.db").unwrap();
    assert_eq!(
        file,
        DatabaseUrl::SQLite {
            path: PathBuf::from("./data/gravity.db")
        }
    );
    assert_eq!(file.to_connection_string(), "sqlite:./data/gravity.db");

    let with_options = DatabaseUrl::parse_url("sqlite://weights.db?mode=rwc").unwrap();
    assert_eq!(
        with_options,
        DatabaseUrl::SQLite {
            path: PathBuf::from("weights.db")
        }
    );

    assert!(DatabaseUrl::parse_url("sqlite::memory:").unwrap().is_memory());

    let bare = DatabaseUrl::parse_url("/tmp/gravity.db").unwrap();
    assert!(!bare.is_memory());

    let err = DatabaseUrl::parse_url("postgresql://localhost/db").unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(DatabaseUrl::parse_url("   ").is_err());
}

#[test]
fn test_default_database_path_ends_with_file_name() {
    match DatabaseUrl::default() {
        DatabaseUrl::SQLite { path } => {
            assert!(path.ends_with("gravity.db"));
        }
        DatabaseUrl::Memory => panic!("default database must be a file"),
    }
}

#[test]
#[serial]
fn test_app_config_defaults() {
    clear_env();
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.database_url, DatabaseUrl::default());
    assert_eq!(config.trend, TrendConfig::default());
}

#[test]
#[serial]
fn test_app_config_reads_environment() {
    clear_env();
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("RUST_LOG", "debug");
    env::set_var("GRAVITY_TREND_AWAY_HORIZON_DAYS", "14");
    env::set_var("GRAVITY_TREND_MAX_HORIZON_WEEKS", "26");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert!(config.database_url.is_memory());
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.trend.away_horizon_days, 14);
    assert_eq!(config.trend.max_horizon_weeks, 26);
    assert!(config.summary().contains("away_horizon_days=14"));
}

#[test]
#[serial]
fn test_app_config_rejects_bad_trend_values() {
    clear_env();
    env::set_var("GRAVITY_TREND_MAX_HORIZON_WEEKS", "soon");
    let err = AppConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);

    env::set_var("GRAVITY_TREND_MAX_HORIZON_WEEKS", "0");
    let err = AppConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    clear_env();
}

#[test]
#[serial]
fn test_database_override() {
    clear_env();
    let config = AppConfig::from_env()
        .unwrap()
        .with_database_override(Some("sqlite:/tmp/override.db"))
        .unwrap();
    assert_eq!(config.database_url.to_string(), "sqlite:/tmp/override.db");

    let unchanged = config.clone().with_database_override(None).unwrap();
    assert_eq!(unchanged, config);

    assert!(config.with_database_override(Some("mysql://db")).is_err());
}
