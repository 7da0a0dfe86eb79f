// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, database setup, and measurement fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `gravity_log`

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use gravity_log::database::Database;
use gravity_log::database_plugins::ProfileStore;
use gravity_log::models::{Measurement, NewUser, UserProfile};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fresh in-memory SQLite database with migrations applied
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:").await?)
}

/// Calendar day shorthand
pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// User creation request with typical values
pub fn new_user(name: &str, target_weight: f64) -> NewUser {
    NewUser {
        name: name.to_owned(),
        height_cm: 175,
        target_weight,
    }
}

/// Create a user in any profile store
pub async fn create_user<S: ProfileStore>(
    store: &S,
    name: &str,
    target_weight: f64,
) -> Result<UserProfile> {
    Ok(store.create_user(new_user(name, target_weight)).await?)
}

/// Measurement with fixed composition values
pub fn measurement(date: NaiveDate, weight: f64) -> Measurement {
    Measurement::new(date, weight, 25.0, 50.0, 25.0)
}

/// One measurement per day starting on `start`, changing by `per_day` kg
pub fn linear_history(start: NaiveDate, days: i64, first_weight: f64, per_day: f64) -> Vec<Measurement> {
    (0..days)
        .map(|i| measurement(start + Duration::days(i), (i as f64).mul_add(per_day, first_weight)))
        .collect()
}
