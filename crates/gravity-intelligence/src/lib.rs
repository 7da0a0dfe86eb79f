// ABOUTME: Trend estimation engine for GravityLog
// ABOUTME: Extracted from the main crate so the pure math builds and tests on its own
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Gravity Intelligence
//!
//! Pure, synchronous analysis of a user's weight history: an ordinary least
//! squares fit over a selected window and a daily projection toward the
//! user's target weight.

/// Trend projection tuning (horizons, minimum window size)
pub mod config;

/// Linear regression and related statistics
pub mod statistical_analysis;

/// Window selection, direction check, and target projection
pub mod trend_estimator;

pub use config::{ConfigError, TrendConfig};
pub use statistical_analysis::{RegressionResult, StatisticalAnalyzer};
pub use trend_estimator::{
    date_to_nanos, estimate_trend, FittedPoint, PredictedPoint, TrendDirection, TrendEstimator,
    TrendResult,
};
