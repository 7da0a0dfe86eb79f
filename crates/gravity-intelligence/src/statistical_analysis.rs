// ABOUTME: Ordinary least squares regression for weight trend calculations
// ABOUTME: Implements mean-centred linear regression, R-squared, and standard error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: sample counts are tiny compared to f64 mantissa

use gravity_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Complete linear regression analysis results
///
/// The fit is stored around the sample means so that predictions far from
/// the origin (nanosecond timestamps are ~1.7e18) keep full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Slope of the regression line (y units per x unit)
    pub slope: f64,
    /// Y-intercept of the regression line (value at x = 0)
    pub intercept: f64,
    /// Coefficient of determination (goodness of fit, 0-1)
    pub r_squared: f64,
    /// Pearson correlation coefficient (-1 to 1)
    pub correlation: f64,
    /// Standard error of the estimate
    pub standard_error: f64,
    /// Degrees of freedom (n - 2)
    pub degrees_of_freedom: usize,
    /// Mean of the x values
    pub mean_x: f64,
    /// Mean of the y values
    pub mean_y: f64,
}

impl RegressionResult {
    /// Evaluate the fitted line at `x`
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope.mul_add(x - self.mean_x, self.mean_y)
    }

    /// The `x` at which the fitted line equals `y`, or `None` for a flat line
    #[must_use]
    pub fn solve_for_x(&self, y: f64) -> Option<f64> {
        if self.slope == 0.0 {
            return None;
        }
        Some(self.mean_x + (y - self.mean_y) / self.slope)
    }
}

/// Statistical analyzer for weight series
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Ordinary least squares fit of `y` against `x`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if fewer than two points are given or all x
    /// values are identical.
    pub fn linear_regression(points: &[(f64, f64)]) -> AppResult<RegressionResult> {
        if points.len() < 2 {
            return Err(AppError::invalid_input(format!(
                "Insufficient data points for regression: need at least 2, got {}",
                points.len()
            )));
        }

        let n = points.len() as f64;
        let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

        // Centred sums of squares and cross products
        let (sxx, sxy, syy) = points
            .iter()
            .fold((0.0_f64, 0.0_f64, 0.0_f64), |(sxx, sxy, syy), (x, y)| {
                let dx = x - mean_x;
                let dy = y - mean_y;
                (dx.mul_add(dx, sxx), dx.mul_add(dy, sxy), dy.mul_add(dy, syy))
            });

        if sxx.abs() < f64::EPSILON || !sxx.is_finite() {
            return Err(AppError::invalid_input(
                "Cannot calculate regression: zero variance in x",
            ));
        }

        let slope = sxy / sxx;
        let intercept = slope.mul_add(-mean_x, mean_y);

        let denominator_corr = (sxx * syy).sqrt();
        let correlation = if denominator_corr == 0.0 {
            0.0
        } else {
            sxy / denominator_corr
        };
        let r_squared = correlation * correlation;

        let sse = points
            .iter()
            .map(|(x, y)| {
                let diff = y - slope.mul_add(x - mean_x, mean_y);
                diff * diff
            })
            .sum::<f64>();

        let degrees_of_freedom = points.len().saturating_sub(2);
        let standard_error = if degrees_of_freedom > 0 {
            (sse / degrees_of_freedom as f64).sqrt()
        } else {
            0.0
        };

        Ok(RegressionResult {
            slope,
            intercept,
            r_squared,
            correlation,
            standard_error,
            degrees_of_freedom,
            mean_x,
            mean_y,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_flat_line_has_zero_slope() {
        let points = [(0.0, 70.0), (1.0, 70.0), (2.0, 70.0)];
        let result = StatisticalAnalyzer::linear_regression(&points).unwrap();
        assert!(result.slope.abs() < f64::EPSILON);
        assert!(result.solve_for_x(65.0).is_none());
    }

    #[test]
    fn test_identical_x_values_rejected() {
        let points = [(5.0, 70.0), (5.0, 71.0)];
        assert!(StatisticalAnalyzer::linear_regression(&points).is_err());
    }
}
