// ABOUTME: Intelligence module re-exports from gravity-intelligence crate
// ABOUTME: Trend estimation, regression statistics, and trend configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Re-exports the pure trend engine so the host uses `crate::intelligence`
//! paths throughout.

pub use gravity_intelligence::*;

pub use gravity_intelligence::{config, statistical_analysis, trend_estimator};
