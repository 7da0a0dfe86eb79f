// ABOUTME: Presentation layer turning stored measurements and trend estimates into views
// ABOUTME: Chart series, trend rates, target annotation, entry defaults, and the dashboard service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Dashboard
//!
//! Renderer-agnostic view data. Nothing here draws; the CLI prints the
//! structures as tables or JSON.
//!
//! - [`MainChart`]: full weight history against the target
//! - [`TrendChart`]: fitted window, projection and [`TargetAnnotation`]
//! - [`BodyCompositionChart`]: fat, water and muscle in % or kg
//! - [`EntryDefaults`]: prefilled values for a new measurement

/// Chart series and axis types
pub mod charts;
/// Store-backed service
pub mod service;
/// Rates, annotation and entry defaults
pub mod summary;

pub use charts::{
    Axis, AxisRange, BodyCompositionChart, ChartPoint, CompositionUnit, LineStyle, MainChart,
    MarkerMode, Series, TrendChart,
};
pub use service::{DashboardService, TrendOverview};
pub use summary::{ArrowDirection, EntryDefaults, TargetAnnotation, TrendRates};
