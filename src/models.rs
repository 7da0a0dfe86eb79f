// ABOUTME: Domain models re-exported from gravity-core
// ABOUTME: Measurement, weight series, user profile, and trend window types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Stored measurements and profiles, plus the ordered weight series the trend
//! estimator consumes.

pub use gravity_core::models::*;
