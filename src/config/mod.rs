// ABOUTME: Configuration management module for GravityLog host settings
// ABOUTME: Environment-only configuration for storage, logging, and trend projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for GravityLog
//!
//! - **Environment**: typed settings read from environment variables
//! - **Trend**: projection tuning re-exported from the intelligence crate

/// Environment configuration
pub mod environment;

pub use environment::{AppConfig, DatabaseUrl, Environment, LogLevel};
pub use gravity_intelligence::TrendConfig;
