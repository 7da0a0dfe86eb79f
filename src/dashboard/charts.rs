// ABOUTME: Chart data for the weight, trend, and body composition views
// ABOUTME: Renderer-agnostic series with marker modes, axes, and padded date ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::summary::TargetAnnotation;
use crate::constants::units::DAYS_PER_WEEK;
use crate::errors::AppError;
use crate::intelligence::TrendResult;
use crate::models::{BodyComponent, Measurement};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerMode {
    /// Connected line
    #[default]
    Lines,
    /// Individual markers
    Markers,
    /// Markers joined by lines
    Both,
}

impl MarkerMode {
    /// Mode to use for `points` samples; a single sample can only be a marker
    #[must_use]
    pub const fn for_points(self, points: usize) -> Self {
        if points == 1 {
            Self::Markers
        } else {
            self
        }
    }
}

impl FromStr for MarkerMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lines" => Ok(Self::Lines),
            "markers" => Ok(Self::Markers),
            "both" | "markers+lines" => Ok(Self::Both),
            other => Err(AppError::invalid_input(format!(
                "unknown marker mode '{other}' (expected lines, markers or both)"
            ))),
        }
    }
}

impl fmt::Display for MarkerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lines => f.write_str("lines"),
            Self::Markers => f.write_str("markers"),
            Self::Both => f.write_str("both"),
        }
    }
}

/// Stroke of a line series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    /// Continuous stroke
    Solid,
    /// Dashed stroke, used for projections
    Dash,
    /// Dotted stroke, used for reference lines
    Dot,
}

/// Y axis a series is plotted against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Left axis
    Primary,
    /// Right axis
    Secondary,
}

/// Unit of the values in a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositionUnit {
    /// Share of body weight
    #[default]
    Percent,
    /// Absolute mass
    Kilograms,
}

impl CompositionUnit {
    /// Tick suffix for the axis
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Kilograms => "kg",
        }
    }
}

impl FromStr for CompositionUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "%" | "percent" | "pct" => Ok(Self::Percent),
            "kg" | "kilograms" => Ok(Self::Kilograms),
            other => Err(AppError::invalid_input(format!(
                "unknown body composition unit '{other}' (expected % or kg)"
            ))),
        }
    }
}

/// A single plotted value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// X position
    pub date: NaiveDate,
    /// Y position
    pub value: f64,
}

impl ChartPoint {
    /// Create a point
    #[must_use]
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// A named trace of points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Legend name
    pub name: String,
    /// Points in date order
    pub points: Vec<ChartPoint>,
    /// Marker mode
    pub mode: MarkerMode,
    /// Line stroke
    pub style: LineStyle,
    /// Axis the values belong to
    pub axis: Axis,
    /// Unit of the values
    pub unit: CompositionUnit,
}

impl Series {
    fn new(name: impl Into<String>, points: Vec<ChartPoint>, mode: MarkerMode) -> Self {
        Self {
            name: name.into(),
            points,
            mode,
            style: LineStyle::Solid,
            axis: Axis::Primary,
            unit: CompositionUnit::Kilograms,
        }
    }

    /// Horizontal reference line at `value` between two dates
    fn horizontal(name: &str, value: f64, range: AxisRange) -> Self {
        Self::new(
            name,
            vec![
                ChartPoint::new(range.start, value),
                ChartPoint::new(range.end, value),
            ],
            MarkerMode::Lines,
        )
    }

    fn styled(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    fn on_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    fn in_unit(mut self, unit: CompositionUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Smallest and largest value, ignoring empty series
    #[must_use]
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        self.points.iter().map(|p| p.value).fold(None, |acc, v| {
            Some(acc.map_or((v, v), |(lo, hi): (f64, f64)| (lo.min(v), hi.max(v))))
        })
    }
}

/// Visible date span of the x axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisRange {
    /// First visible day
    pub start: NaiveDate,
    /// Last visible day
    pub end: NaiveDate,
}

impl AxisRange {
    /// Span from `start` to `end`, both widened by one week
    #[must_use]
    pub fn padded(start: NaiveDate, end: NaiveDate) -> Self {
        let week = Duration::days(DAYS_PER_WEEK);
        Self {
            start: start - week,
            end: end + week,
        }
    }
}

fn history_bounds(history: &[Measurement]) -> Option<AxisRange> {
    Some(AxisRange {
        start: history.first()?.date,
        end: history.last()?.date,
    })
}

fn weight_points(history: &[Measurement]) -> Vec<ChartPoint> {
    history
        .iter()
        .map(|m| ChartPoint::new(m.date, m.weight))
        .collect()
}

/// Every recorded weight with the target as a reference line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainChart {
    /// Target line followed by the weight series
    pub series: Vec<Series>,
    /// Visible dates
    pub x_range: AxisRange,
}

impl MainChart {
    /// Build from the full history, `None` when there is nothing to plot
    #[must_use]
    pub fn build(history: &[Measurement], target_weight: f64, mode: MarkerMode) -> Option<Self> {
        let bounds = history_bounds(history)?;
        let mode = mode.for_points(history.len());

        Some(Self {
            series: vec![
                Series::horizontal("target", target_weight, bounds),
                Series::new("weight", weight_points(history), mode),
            ],
            x_range: AxisRange::padded(bounds.start, bounds.end),
        })
    }
}

/// Fitted window, projection and target annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendChart {
    /// Target, observed weights, fit and prediction
    pub series: Vec<Series>,
    /// Visible dates: one week before the window through the last prediction
    pub x_range: AxisRange,
    /// Target date marker, present when the trend reaches the target
    pub annotation: Option<TargetAnnotation>,
}

impl TrendChart {
    /// Build from an estimate; `today` drives the days-remaining label
    #[must_use]
    pub fn build(result: &TrendResult, today: NaiveDate) -> Self {
        let window_first = result
            .fitted_points
            .first()
            .map_or(result.window_start, |p| p.date);
        let end = result
            .last_predicted()
            .map_or(result.last_observed.date, |p| p.date);
        let x_range = AxisRange {
            start: window_first - Duration::days(DAYS_PER_WEEK),
            end,
        };

        let observed = result
            .fitted_points
            .iter()
            .map(|p| ChartPoint::new(p.date, p.weight))
            .collect();
        let fitted = result
            .fitted_points
            .iter()
            .map(|p| ChartPoint::new(p.date, p.fitted))
            .collect();
        let predicted = result
            .predicted_points
            .iter()
            .map(|p| ChartPoint::new(p.date, p.weight))
            .collect();

        Self {
            series: vec![
                Series::horizontal("target", result.target_weight, x_range),
                Series::new("weight", observed, MarkerMode::Markers),
                Series::new("trend", fitted, MarkerMode::Lines),
                Series::new("prediction", predicted, MarkerMode::Lines).styled(LineStyle::Dash),
            ],
            x_range,
            annotation: TargetAnnotation::from_result(result, today),
        }
    }
}

/// Fat, water and muscle over time, optionally with weight and target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyCompositionChart {
    /// Component series, then weight and target when overlaid
    pub series: Vec<Series>,
    /// Visible dates
    pub x_range: AxisRange,
    /// Unit of the component series
    pub unit: CompositionUnit,
    /// Whether weight and target sit on a separate kg axis
    pub secondary_axis: bool,
}

impl BodyCompositionChart {
    /// Build from the full history, `None` when there is nothing to plot
    ///
    /// In kg mode each component is `weight * percent / 100` rounded to one
    /// decimal. Percentages combined with the weight overlay put weight and
    /// target on the secondary axis.
    #[must_use]
    pub fn build(
        history: &[Measurement],
        target_weight: f64,
        unit: CompositionUnit,
        overlay_weight: bool,
        mode: MarkerMode,
    ) -> Option<Self> {
        let bounds = history_bounds(history)?;
        let mode = mode.for_points(history.len());
        let secondary_axis = overlay_weight && unit == CompositionUnit::Percent;

        let mut series: Vec<Series> = BodyComponent::ALL
            .iter()
            .map(|&component| {
                let points = history
                    .iter()
                    .map(|m| {
                        let value = match unit {
                            CompositionUnit::Percent => component.percent_of(m),
                            CompositionUnit::Kilograms => m.component_kg(component),
                        };
                        ChartPoint::new(m.date, value)
                    })
                    .collect();
                Series::new(component.name(), points, mode).in_unit(unit)
            })
            .collect();

        if overlay_weight {
            let axis = if secondary_axis {
                Axis::Secondary
            } else {
                Axis::Primary
            };
            series.push(Series::new("weight", weight_points(history), mode).on_axis(axis));
            series.push(
                Series::horizontal("target", target_weight, bounds)
                    .styled(LineStyle::Dot)
                    .on_axis(axis),
            );
        }

        Some(Self {
            series,
            x_range: AxisRange::padded(bounds.start, bounds.end),
            unit,
            secondary_axis,
        })
    }
}
