// ABOUTME: Core types and constants for the GravityLog body-metrics tracker
// ABOUTME: Foundation crate with error handling, unit constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Gravity Core
//!
//! Foundation crate shared by the trend estimator and the host application.
//! It changes rarely, which keeps incremental builds of the workspace cheap.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and the `AppResult` alias
//! - **constants**: trend limits, validation ranges, unit factors
//! - **models**: measurements, weight series, user profiles
//! - **numeric**: rounding helpers

/// Unified error handling with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Measurement, MeasurementSeries, UserProfile, TrendWindow)
pub mod models;

/// Numeric helpers
pub mod numeric;
