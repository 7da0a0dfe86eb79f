// ABOUTME: Unit conversion constants for time and body-composition measurements
// ABOUTME: Provides named factors used when converting regression slopes into rates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Nanoseconds per second
pub const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Minutes per hour
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Hours per day
pub const HOURS_PER_DAY: f64 = 24.0;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days per week
pub const DAYS_PER_WEEK: i64 = 7;

/// Days in a "month" for rate reporting
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Nanoseconds per calendar day
pub const NANOS_PER_DAY: f64 = NANOS_PER_SECOND * SECONDS_PER_DAY;

/// Nanoseconds per week (`10^9 * 60 * 60 * 24 * 7`)
pub const NANOS_PER_WEEK: f64 =
    NANOS_PER_SECOND * SECONDS_PER_MINUTE * MINUTES_PER_HOUR * HOURS_PER_DAY * 7.0;

/// Nanoseconds per 30-day month (`10^9 * 86400 * 30`)
pub const NANOS_PER_MONTH: f64 = NANOS_PER_SECOND * SECONDS_PER_DAY * DAYS_PER_MONTH;

/// Percent scale used for body-composition values
pub const PERCENT: f64 = 100.0;
