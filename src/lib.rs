// ABOUTME: Main library entry point for the GravityLog body-metrics tracker
// ABOUTME: Storage, configuration, logging, and dashboard views around the trend engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # GravityLog
//!
//! Per-user weight and body-composition tracking with a linear trend
//! projected toward a target weight.
//!
//! ## Architecture
//!
//! - **`gravity-core`**: errors, constants and domain models
//! - **`gravity-intelligence`**: regression and the trend estimator
//! - **Database**: SQLite store via sqlx, plus an in-memory store
//! - **Dashboard**: chart series, rates and the target annotation
//! - **Binaries**: `gravity-cli` and `seed-demo-data`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gravity_log::dashboard::DashboardService;
//! use gravity_log::database::Database;
//! use gravity_log::database_plugins::ProfileStore;
//! use gravity_log::errors::AppResult;
//! use gravity_log::intelligence::TrendEstimator;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let database = Database::new("sqlite::memory:").await?;
//!     let service = DashboardService::new(database, TrendEstimator::default());
//!     if let Some(user) = service.store().get_user_by_name("mock").await? {
//!         let today = chrono::Utc::now().date_naive();
//!         let overview = service.trend_overview(user.id, today).await?;
//!         println!("{overview:?}");
//!     }
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Constants shared across the workspace
pub mod constants;

/// Chart data, rates and entry defaults
pub mod dashboard;

/// SQLite persistence
pub mod database;

/// Store traits and the in-memory store
pub mod database_plugins;

/// Error types
pub mod errors;

/// Trend engine re-exports
pub mod intelligence;

/// Logging setup
pub mod logging;

/// Domain models
pub mod models;
