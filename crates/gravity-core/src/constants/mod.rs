// ABOUTME: Application constants grouped by domain for GravityLog
// ABOUTME: Trend projection limits, measurement validation ranges, and entry defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded defaults; the environment-driven overrides live in the
//! configuration modules of the crates that consume them.

/// Unit conversion factors
pub mod units;

/// Trend projection defaults
pub mod trend {
    /// Days projected when the trend moves away from the target
    pub const AWAY_HORIZON_DAYS: u32 = 2;

    /// Longest projection toward the target, in weeks
    pub const MAX_HORIZON_WEEKS: u32 = 51;

    /// Weeks appended after the week the target is crossed
    pub const HORIZON_PADDING_WEEKS: i64 = 1;

    /// Minimum samples inside the window for a regression
    pub const MIN_WINDOW_POINTS: usize = 2;

    /// Trailing weeks used by newly created users
    pub const DEFAULT_RANGE_WEEKS: u32 = 4;

    /// Decimal places kept on projected weights
    pub const PREDICTION_DECIMALS: i32 = 2;
}

/// Accepted ranges for stored values
pub mod limits {
    /// Maximum body weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 200.0;

    /// Maximum percentage for fat, water and muscle
    pub const MAX_PERCENT: f64 = 100.0;

    /// Maximum height in centimetres
    pub const MAX_HEIGHT_CM: u32 = 250;

    /// Maximum user name length in characters
    pub const MAX_NAME_CHARS: usize = 50;

    /// Decimal places kept on stored measurements
    pub const STORAGE_DECIMALS: i32 = 1;
}

/// Defaults for the measurement entry form
pub mod entry_defaults {
    /// Weight when no history exists (kg)
    pub const WEIGHT_KG: f64 = 80.0;

    /// Fat percentage when no history exists
    pub const FAT_PERCENT: f64 = 25.0;

    /// Water percentage when no history exists
    pub const WATER_PERCENT: f64 = 50.0;

    /// Muscle percentage when no history exists
    pub const MUSCLE_PERCENT: f64 = 25.0;

    /// Height for new users (cm)
    pub const HEIGHT_CM: u32 = 180;

    /// Target weight for new users (kg)
    pub const TARGET_WEIGHT_KG: f64 = 80.0;
}

/// Service identity used by logging
pub mod service_names {
    /// Name reported in structured logs
    pub const GRAVITY_LOG: &str = "gravity-log";
}

