// ABOUTME: Integration tests for weight trend estimation and target projection
// ABOUTME: Covers window selection, direction branches, horizon rounding, and late targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, NaiveDate};
use gravity_core::constants::units::NANOS_PER_DAY;
use gravity_core::models::{MeasurementSeries, TrendWindow, WeightSample};
use gravity_intelligence::{
    estimate_trend, TrendConfig, TrendDirection, TrendEstimator,
};

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(offset)
}

/// Daily samples starting 2024-01-01 with `start + per_day * i`
fn linear_series(days: i64, start: f64, per_day: f64) -> MeasurementSeries {
    let samples = (0..days)
        .map(|i| WeightSample::new(day(i), per_day.mul_add(i as f64, start)))
        .collect();
    MeasurementSeries::new(samples).unwrap()
}

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_empty_and_single_point_series_have_no_trend() {
    let empty = MeasurementSeries::default();
    let single = MeasurementSeries::new(vec![WeightSample::new(day(0), 80.0)]).unwrap();

    for window in [
        TrendWindow::default(),
        TrendWindow::start_date(day(-30)),
        TrendWindow::FullHistory,
    ] {
        assert!(estimate_trend(&empty, &window, 70.0).is_none());
        assert!(estimate_trend(&single, &window, 70.0).is_none());
        assert!(estimate_trend(&single, &window, 90.0).is_none());
    }
}

#[test]
fn test_linear_series_recovers_slope_and_fitted_values() {
    let series = linear_series(20, 90.0, -0.1);
    let result = estimate_trend(&series, &TrendWindow::FullHistory, 80.0).unwrap();

    let expected_slope = -0.1 / NANOS_PER_DAY;
    assert_close(result.slope, expected_slope, expected_slope.abs() * 1e-9);
    assert_close(result.r_squared, 1.0, 1e-9);
    assert_eq!(result.fitted_points.len(), 20);
    for (i, point) in result.fitted_points.iter().enumerate() {
        assert_eq!(point.date, day(i as i64));
        assert_close(point.fitted, (-0.1_f64).mul_add(i as f64, 90.0), 1e-9);
    }
}

#[test]
fn test_falling_trend_with_higher_target_projects_two_days() {
    let series = linear_series(10, 90.0, -0.1);
    let result = estimate_trend(&series, &TrendWindow::default(), 95.0).unwrap();

    assert_eq!(result.direction, TrendDirection::AwayFromTarget);
    assert_eq!(result.horizon_days, 2);
    assert_eq!(result.horizon_weeks, None);
    assert!(!result.target_reached);
    assert!(!result.target_late);
    assert_eq!(result.target_date, None);
    assert_eq!(result.annotation_date(), None);

    let dates: Vec<_> = result.predicted_points.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![day(10), day(11)]);
    assert_close(result.predicted_points[0].weight, 89.0, 1e-9);
    assert_close(result.predicted_points[1].weight, 88.9, 1e-9);
}

#[test]
fn test_rising_trend_with_lower_target_is_away() {
    let series = linear_series(10, 70.0, 0.2);
    let result = estimate_trend(&series, &TrendWindow::default(), 65.0).unwrap();

    assert_eq!(result.direction, TrendDirection::AwayFromTarget);
    assert_eq!(result.predicted_points.len(), 2);
}

#[test]
fn test_toward_target_resolves_first_crossing_day() {
    // Last sample is day 27 at 87.3 kg; the line crosses 84.95 kg after 23.5 days
    let series = linear_series(28, 90.0, -0.1);
    let result = estimate_trend(&series, &TrendWindow::default(), 84.95).unwrap();

    assert_eq!(result.direction, TrendDirection::TowardTarget);
    assert!(result.target_reached);
    assert!(!result.target_late);
    // ceil(23.5 / 7) + 1
    assert_eq!(result.horizon_weeks, Some(5));
    assert_eq!(result.horizon_days, 35);
    assert_eq!(result.predicted_points.len(), 35);
    assert_eq!(result.target_date, Some(day(27 + 24)));
    assert_eq!(result.annotation_date(), result.target_date);

    let crossing = result
        .predicted_points
        .iter()
        .position(|p| p.date == day(27 + 24))
        .unwrap();
    assert!(result.predicted_points[crossing].weight < 84.95);
    assert!(result.predicted_points[crossing - 1].weight >= 84.95);
}

#[test]
fn test_rising_trend_crosses_higher_target() {
    let series = linear_series(14, 60.0, 0.5);
    // Last sample: day 13 at 66.5 kg; 70.2 kg is 7.4 days ahead
    let result = estimate_trend(&series, &TrendWindow::FullHistory, 70.2).unwrap();

    assert_eq!(result.direction, TrendDirection::TowardTarget);
    assert_eq!(result.horizon_weeks, Some(3));
    assert_eq!(result.target_date, Some(day(13 + 8)));
    assert!(!result.target_late);
}

#[test]
fn test_predictions_are_rounded_to_two_decimals() {
    let series = linear_series(10, 80.0, -0.0333);
    let result = estimate_trend(&series, &TrendWindow::FullHistory, 79.0).unwrap();

    for point in &result.predicted_points {
        let scaled = point.weight * 100.0;
        assert_close(scaled, scaled.round(), 1e-6);
    }
}

#[test]
fn test_slow_trend_is_late_and_capped() {
    let series = linear_series(28, 80.0, -0.001);
    let result = estimate_trend(&series, &TrendWindow::default(), 70.0).unwrap();

    assert_eq!(result.direction, TrendDirection::TowardTarget);
    assert!(result.target_reached);
    assert!(result.target_late);
    assert_eq!(result.horizon_weeks, Some(51));
    assert_eq!(result.horizon_days, 357);
    assert_eq!(result.predicted_points.len(), 357);
    assert_eq!(result.target_date, None);
    assert_eq!(
        result.annotation_date(),
        result.predicted_points.last().map(|p| p.date)
    );
}

#[test]
fn test_start_date_leaving_one_point_has_no_trend() {
    let series = linear_series(10, 80.0, -0.1);
    let window = TrendWindow::start_date(day(9));
    assert!(estimate_trend(&series, &window, 70.0).is_none());

    let after_all = TrendWindow::start_date(day(30));
    assert!(estimate_trend(&series, &after_all, 70.0).is_none());
}

#[test]
fn test_start_date_window_filters_older_samples() {
    let series = linear_series(10, 80.0, -0.1);
    let result = estimate_trend(&series, &TrendWindow::start_date(day(4)), 70.0).unwrap();

    assert_eq!(result.window_start, day(4));
    assert_eq!(result.fitted_points.len(), 6);
    assert_eq!(result.fitted_points[0].date, day(4));
}

#[test]
fn test_flat_series_takes_away_branch() {
    let series = linear_series(10, 75.0, 0.0);
    let result = estimate_trend(&series, &TrendWindow::FullHistory, 70.0).unwrap();

    assert_eq!(result.direction, TrendDirection::AwayFromTarget);
    assert_eq!(result.predicted_points.len(), 2);
    assert!(!result.target_reached);
    assert!(!result.target_late);
}

#[test]
fn test_full_history_uses_every_point() {
    let series = linear_series(60, 85.0, -0.05);

    let full = estimate_trend(&series, &TrendWindow::FullHistory, 70.0).unwrap();
    assert_eq!(full.fitted_points.len(), 60);
    assert_eq!(full.window_start, day(0));

    // One week back from day 59 includes days 52..=59
    let week = TrendWindow::date_range(1).unwrap();
    let recent = estimate_trend(&series, &week, 70.0).unwrap();
    assert_eq!(recent.fitted_points.len(), 8);
    assert_eq!(recent.window_start, day(52));
}

#[test]
fn test_sparse_window_is_rejected() {
    let samples = vec![
        WeightSample::new(day(0), 82.0),
        WeightSample::new(day(20), 81.0),
        WeightSample::new(day(60), 80.0),
    ];
    let series = MeasurementSeries::new(samples).unwrap();

    // Four weeks back from day 60 only admits the last sample
    assert!(estimate_trend(&series, &TrendWindow::default(), 75.0).is_none());
    assert!(estimate_trend(&series, &TrendWindow::FullHistory, 75.0).is_some());
}

#[test]
fn test_min_window_points_from_config() {
    let series = linear_series(5, 80.0, -0.1);
    let strict = TrendEstimator::new(TrendConfig {
        min_window_points: 6,
        ..TrendConfig::default()
    });
    assert!(strict
        .estimate(&series, &TrendWindow::FullHistory, 70.0)
        .is_none());

    let relaxed = TrendEstimator::new(TrendConfig {
        min_window_points: 5,
        ..TrendConfig::default()
    });
    assert!(relaxed
        .estimate(&series, &TrendWindow::FullHistory, 70.0)
        .is_some());
}

#[test]
fn test_custom_horizons_from_config() {
    let series = linear_series(10, 80.0, -0.1);
    let estimator = TrendEstimator::new(TrendConfig {
        away_horizon_days: 5,
        max_horizon_weeks: 4,
        ..TrendConfig::default()
    });

    let away = estimator
        .estimate(&series, &TrendWindow::FullHistory, 90.0)
        .unwrap();
    assert_eq!(away.predicted_points.len(), 5);

    // 79.1 kg falls 50 kg in 500 days, well beyond four weeks
    let late = estimator
        .estimate(&series, &TrendWindow::FullHistory, 29.1)
        .unwrap();
    assert!(late.target_late);
    assert_eq!(late.horizon_weeks, Some(4));
    assert_eq!(late.predicted_points.len(), 28);
}

#[test]
fn test_non_finite_target_has_no_trend() {
    let series = linear_series(10, 80.0, -0.1);
    assert!(estimate_trend(&series, &TrendWindow::FullHistory, f64::NAN).is_none());
}

#[test]
fn test_result_serializes_to_json() {
    let series = linear_series(28, 90.0, -0.1);
    let result = estimate_trend(&series, &TrendWindow::default(), 84.95).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["direction"], "toward_target");
    assert_eq!(json["target_date"], "2024-02-21");
    assert_eq!(json["predicted_points"].as_array().unwrap().len(), 35);
}

#[test]
fn test_crossing_before_last_sample_projects_one_week() {
    let series = MeasurementSeries::new(vec![
        WeightSample::new(day(0), 90.0),
        WeightSample::new(day(1), 80.0),
        WeightSample::new(day(2), 85.0),
    ])
    .unwrap();

    let result = estimate_trend(&series, &TrendWindow::FullHistory, 85.0).unwrap();
    assert_eq!(result.direction, TrendDirection::TowardTarget);
    assert_eq!(result.horizon_weeks, Some(1));
    assert_eq!(result.predicted_points.len(), 7);
    assert!(!result.target_late);
    assert_eq!(result.target_date, Some(day(3)));
}

#[test]
fn test_range_wider_than_calendar_uses_whole_history() {
    let series = linear_series(10, 90.0, -0.5);
    let window = TrendWindow::date_range(100_000_000).unwrap();

    let wide = estimate_trend(&series, &window, 70.0).unwrap();
    let full = estimate_trend(&series, &TrendWindow::FullHistory, 70.0).unwrap();

    assert_eq!(wide.window_start, NaiveDate::MIN);
    assert_eq!(wide.fitted_points.len(), 10);
    assert_close(wide.slope, full.slope, 1e-18);
    assert_eq!(wide.predicted_points, full.predicted_points);
    assert_eq!(wide.target_date, full.target_date);
}
