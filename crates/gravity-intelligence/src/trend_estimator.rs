// ABOUTME: Weight trend estimation with projection toward a target weight
// ABOUTME: Selects the fit window, fits a line, and resolves the target date and late status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_possible_truncation)] // Safe: horizon weeks are clamped to [1, max] before casting
#![allow(clippy::cast_sign_loss)] // Safe: horizon weeks are clamped to [1, max] before casting

//! # Trend Estimator
//!
//! Fits weight against time (UTC midnight in nanoseconds) over a window of
//! recent samples and projects the line forward one day at a time.
//!
//! - Trend moving away from the target (or flat): a short safety horizon of
//!   [`TrendConfig::away_horizon_days`] days.
//! - Trend moving toward the target: projection up to the week after the
//!   crossing, capped at [`TrendConfig::max_horizon_weeks`] weeks. Hitting
//!   the cap marks the target as late.
//!
//! Degenerate input (too few samples, no variance in dates, non-finite
//! target) yields `None` rather than an error.

use crate::config::TrendConfig;
use crate::statistical_analysis::{RegressionResult, StatisticalAnalyzer};
use chrono::{Datelike, Duration, NaiveDate};
use gravity_core::constants::trend::{
    HORIZON_PADDING_WEEKS, MIN_WINDOW_POINTS, PREDICTION_DECIMALS,
};
use gravity_core::constants::units::{DAYS_PER_WEEK, NANOS_PER_DAY, NANOS_PER_WEEK};
use gravity_core::models::{MeasurementSeries, TrendWindow, WeightSample};
use gravity_core::numeric::round_to;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Days from 0001-01-01 (CE day 1) to 1970-01-01
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// UTC midnight of `date` as nanoseconds since the Unix epoch
///
/// Whole days times 8.64e13 stay exactly representable in `f64` for every
/// date chrono supports.
#[must_use]
pub fn date_to_nanos(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE) * NANOS_PER_DAY
}

/// Whether the fitted trend moves toward or away from the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Slope points at the target from the last observed weight
    TowardTarget,
    /// Slope points away from the target, or is zero
    AwayFromTarget,
}

/// An observed sample with the fitted value on the same day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FittedPoint {
    /// Observation date
    pub date: NaiveDate,
    /// Observed weight (kg)
    pub weight: f64,
    /// Trend line value on `date` (kg, full precision)
    pub fitted: f64,
}

/// A projected weight for a future day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictedPoint {
    /// Projected day
    pub date: NaiveDate,
    /// Projected weight (kg, two decimals)
    pub weight: f64,
}

/// Fitted trend and its projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    /// Weight change per nanosecond
    pub slope: f64,
    /// Weight at the Unix epoch on the fitted line
    pub intercept: f64,
    /// Coefficient of determination of the fit
    pub r_squared: f64,
    /// First date the window admits
    pub window_start: NaiveDate,
    /// Newest sample of the series
    pub last_observed: WeightSample,
    /// Windowed samples with their fitted values, oldest first
    pub fitted_points: Vec<FittedPoint>,
    /// One projected point per day after `last_observed`
    pub predicted_points: Vec<PredictedPoint>,
    /// Direction of the slope relative to the target
    pub direction: TrendDirection,
    /// Number of projected days
    pub horizon_days: u32,
    /// Projection length in weeks (toward-target branch only)
    pub horizon_weeks: Option<u32>,
    /// Target weight the projection was computed for
    pub target_weight: f64,
    /// The trend heads toward the target
    pub target_reached: bool,
    /// The target is not crossed within the projection
    pub target_late: bool,
    /// First projected day past the target
    pub target_date: Option<NaiveDate>,
}

impl TrendResult {
    /// Last projected point
    #[must_use]
    pub fn last_predicted(&self) -> Option<&PredictedPoint> {
        self.predicted_points.last()
    }

    /// Date the dashboard should annotate: the target date, or the end of the
    /// projection when the target is late
    #[must_use]
    pub fn annotation_date(&self) -> Option<NaiveDate> {
        if !self.target_reached {
            return None;
        }
        self.target_date
            .or_else(|| self.last_predicted().map(|point| point.date))
    }
}

/// Fits and projects weight trends
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendEstimator {
    config: TrendConfig,
}

impl TrendEstimator {
    /// Create an estimator with the given tuning
    #[must_use]
    pub const fn new(config: TrendConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &TrendConfig {
        &self.config
    }

    /// Fit `series` over `window` and project toward `target_weight`
    ///
    /// Returns `None` when the series or the selected window holds fewer
    /// than two samples, or the fit is not usable.
    #[must_use]
    pub fn estimate(
        &self,
        series: &MeasurementSeries,
        window: &TrendWindow,
        target_weight: f64,
    ) -> Option<TrendResult> {
        if series.len() < MIN_WINDOW_POINTS || !target_weight.is_finite() {
            debug!(
                samples = series.len(),
                target_weight, "Not enough data for a trend"
            );
            return None;
        }
        let first = series.first()?;
        let last = *series.last()?;

        let window_start = window.cutoff(first.date, last.date);
        let windowed = series.since(window_start);
        if windowed.len() < self.config.min_window_points.max(MIN_WINDOW_POINTS) {
            debug!(
                %window,
                %window_start,
                samples = windowed.len(),
                "Trend window holds too few samples"
            );
            return None;
        }

        let points: Vec<(f64, f64)> = windowed
            .iter()
            .map(|sample| (date_to_nanos(sample.date), sample.weight))
            .collect();
        let regression = match StatisticalAnalyzer::linear_regression(&points) {
            Ok(regression) => regression,
            Err(e) => {
                debug!(error = %e, "Trend regression failed");
                return None;
            }
        };
        if !regression.slope.is_finite() || !regression.intercept.is_finite() {
            debug!(
                slope = regression.slope,
                intercept = regression.intercept,
                "Trend fit is not finite"
            );
            return None;
        }

        let fitted_points = windowed
            .iter()
            .zip(&points)
            .map(|(sample, (x, _))| FittedPoint {
                date: sample.date,
                weight: sample.weight,
                fitted: regression.predict(*x),
            })
            .collect();

        let direction = direction_of(regression.slope, target_weight, last.weight);
        let (horizon_days, horizon_weeks, target_reached, clamped) = match direction {
            TrendDirection::AwayFromTarget => (self.config.away_horizon_days, None, false, false),
            TrendDirection::TowardTarget => {
                let (weeks, clamped) = self.horizon_weeks(&regression, target_weight, last.date);
                (weeks * DAYS_PER_WEEK as u32, Some(weeks), true, clamped)
            }
        };

        let predicted_points = project(&regression, last.date, horizon_days);

        let (target_late, target_date) = if target_reached && !clamped {
            resolve_target(&predicted_points, regression.slope, target_weight)
        } else {
            (clamped, None)
        };

        debug!(
            slope = regression.slope,
            r_squared = regression.r_squared,
            ?direction,
            horizon_days,
            target_late,
            ?target_date,
            "Trend estimated"
        );

        Some(TrendResult {
            slope: regression.slope,
            intercept: regression.intercept,
            r_squared: regression.r_squared,
            window_start,
            last_observed: last,
            fitted_points,
            predicted_points,
            direction,
            horizon_days,
            horizon_weeks,
            target_weight,
            target_reached,
            target_late,
            target_date,
        })
    }

    /// Weeks to project in the toward-target branch and whether the cap applied
    fn horizon_weeks(
        &self,
        regression: &RegressionResult,
        target_weight: f64,
        last_date: NaiveDate,
    ) -> (u32, bool) {
        let max_weeks = self.config.max_horizon_weeks;
        let Some(date_on_target) = regression.solve_for_x(target_weight) else {
            return (max_weeks, true);
        };
        let weeks_ahead = ((date_on_target - date_to_nanos(last_date)) / NANOS_PER_WEEK).ceil();
        let weeks = weeks_ahead + HORIZON_PADDING_WEEKS as f64;

        if !weeks.is_finite() || weeks > f64::from(max_weeks) {
            return (max_weeks, true);
        }
        (weeks.max(1.0) as u32, false)
    }
}

fn direction_of(slope: f64, target_weight: f64, last_weight: f64) -> TrendDirection {
    let away = slope == 0.0
        || (slope < 0.0 && target_weight > last_weight)
        || (slope > 0.0 && target_weight < last_weight);
    if away {
        TrendDirection::AwayFromTarget
    } else {
        TrendDirection::TowardTarget
    }
}

fn project(regression: &RegressionResult, last_date: NaiveDate, days: u32) -> Vec<PredictedPoint> {
    (1..=days)
        .map(|day| {
            let date = last_date + Duration::days(i64::from(day));
            PredictedPoint {
                date,
                weight: round_to(regression.predict(date_to_nanos(date)), PREDICTION_DECIMALS),
            }
        })
        .collect()
}

fn first_crossing(points: &[PredictedPoint], slope: f64, target_weight: f64) -> Option<NaiveDate> {
    points
        .iter()
        .find(|point| {
            if slope < 0.0 {
                point.weight < target_weight
            } else {
                point.weight > target_weight
            }
        })
        .map(|point| point.date)
}

/// Late flag and target date from a projection that should reach the target
///
/// Without a crossing the target counts as late on the last projected day.
fn resolve_target(
    points: &[PredictedPoint],
    slope: f64,
    target_weight: f64,
) -> (bool, Option<NaiveDate>) {
    first_crossing(points, slope, target_weight).map_or_else(
        || (true, points.last().map(|point| point.date)),
        |date| (false, Some(date)),
    )
}

/// Estimate with the default configuration
#[must_use]
pub fn estimate_trend(
    series: &MeasurementSeries,
    window: &TrendWindow,
    target_weight: f64,
) -> Option<TrendResult> {
    TrendEstimator::default().estimate(series, window, target_weight)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_epoch_is_zero() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert!(date_to_nanos(epoch).abs() < f64::EPSILON);
    }

    #[test]
    fn test_next_day_is_one_day_of_nanos() {
        let day = NaiveDate::from_ymd_opt(1970, 1, 2).unwrap();
        assert!((date_to_nanos(day) - 86_400_000_000_000.0).abs() < f64::EPSILON);
    }

    fn points(start: NaiveDate, weights: &[f64]) -> Vec<PredictedPoint> {
        weights
            .iter()
            .zip(1..)
            .map(|(&weight, offset)| PredictedPoint {
                date: start + Duration::days(offset),
                weight,
            })
            .collect()
    }

    #[test]
    fn test_projection_without_crossing_is_late_on_last_day() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let projected = points(start, &[80.5, 80.3, 80.1, 80.0]);

        assert_eq!(first_crossing(&projected, -0.1, 80.0), None);
        assert_eq!(
            resolve_target(&projected, -0.1, 80.0),
            (true, Some(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()))
        );
        assert_eq!(resolve_target(&[], -0.1, 80.0), (true, None));
    }

    #[test]
    fn test_first_crossing_follows_slope_sign() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let falling = points(start, &[80.2, 80.0, 79.9]);
        assert_eq!(
            resolve_target(&falling, -0.1, 80.0),
            (false, Some(NaiveDate::from_ymd_opt(2024, 1, 4).unwrap()))
        );

        let rising = points(start, &[69.8, 70.1]);
        assert_eq!(
            resolve_target(&rising, 0.1, 70.0),
            (false, Some(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()))
        );
    }

    #[test]
    fn test_zero_slope_is_away() {
        assert_eq!(
            direction_of(0.0, 70.0, 80.0),
            TrendDirection::AwayFromTarget
        );
        assert_eq!(
            direction_of(-1.0, 70.0, 80.0),
            TrendDirection::TowardTarget
        );
        assert_eq!(direction_of(1.0, 70.0, 80.0), TrendDirection::AwayFromTarget);
    }
}
