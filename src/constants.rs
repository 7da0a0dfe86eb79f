// ABOUTME: Application constants re-exported from gravity-core
// ABOUTME: Trend limits, validation ranges, entry defaults, and unit conversion factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded defaults shared across the workspace. Environment overrides are
//! read by [`crate::config::environment::AppConfig`].

pub use gravity_core::constants::*;

/// Environment variable names read by the host
pub mod env_vars {
    /// Database connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// Storage locations
pub mod storage {
    /// Directory created under the platform data directory
    pub const DATA_DIR_NAME: &str = "gravitylog";
    /// Database file name
    pub const DATABASE_FILE: &str = "gravity.db";
    /// Fallback directory when the platform has no data directory
    pub const FALLBACK_DATA_DIR: &str = "./data";
}
