// ABOUTME: Tests for the least squares regression used by trend estimation
// ABOUTME: Checks fit quality statistics and precision on nanosecond-scale x values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use gravity_core::errors::ErrorCode;
use gravity_intelligence::StatisticalAnalyzer;

#[test]
fn test_perfect_fit() {
    let points: Vec<(f64, f64)> = (0..10).map(|i| (f64::from(i), 2.0f64.mul_add(f64::from(i), 1.0))).collect();
    let result = StatisticalAnalyzer::linear_regression(&points).unwrap();

    assert!((result.slope - 2.0).abs() < 1e-12);
    assert!((result.intercept - 1.0).abs() < 1e-12);
    assert!((result.r_squared - 1.0).abs() < 1e-12);
    assert!((result.correlation - 1.0).abs() < 1e-12);
    assert!(result.standard_error.abs() < 1e-12);
    assert_eq!(result.degrees_of_freedom, 8);
    assert!((result.predict(20.0) - 41.0).abs() < 1e-9);
    assert!((result.solve_for_x(41.0).unwrap() - 20.0).abs() < 1e-9);
}

#[test]
fn test_noisy_fit_statistics() {
    let points = [(1.0, 2.0), (2.0, 4.1), (3.0, 5.9), (4.0, 8.2), (5.0, 9.8)];
    let result = StatisticalAnalyzer::linear_regression(&points).unwrap();

    assert!((result.slope - 1.97).abs() < 1e-9);
    assert!(result.r_squared > 0.99 && result.r_squared < 1.0);
    assert!(result.standard_error > 0.0);
    assert_eq!(result.degrees_of_freedom, 3);
}

#[test]
fn test_two_points_have_no_standard_error() {
    let result = StatisticalAnalyzer::linear_regression(&[(0.0, 80.0), (1.0, 79.0)]).unwrap();
    assert!((result.slope + 1.0).abs() < 1e-12);
    assert_eq!(result.degrees_of_freedom, 0);
    assert!(result.standard_error.abs() < f64::EPSILON);
}

#[test]
fn test_nanosecond_scale_keeps_precision() {
    // One point per day around 2024 (~1.7e18 ns since the epoch)
    let day_ns = 86_400_000_000_000.0;
    let base = 19_723.0 * day_ns;
    let points: Vec<(f64, f64)> = (0..30)
        .map(|i| {
            let x = f64::from(i).mul_add(day_ns, base);
            (x, (-0.1f64).mul_add(f64::from(i), 85.0))
        })
        .collect();
    let result = StatisticalAnalyzer::linear_regression(&points).unwrap();

    let expected_slope = -0.1 / day_ns;
    assert!(((result.slope - expected_slope) / expected_slope).abs() < 1e-9);
    assert!((result.predict(base) - 85.0).abs() < 1e-9);
    assert!((result.predict(30.0f64.mul_add(day_ns, base)) - 82.0).abs() < 1e-9);
}

#[test]
fn test_insufficient_points() {
    let error = StatisticalAnalyzer::linear_regression(&[(1.0, 1.0)]).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(StatisticalAnalyzer::linear_regression(&[]).is_err());
}
