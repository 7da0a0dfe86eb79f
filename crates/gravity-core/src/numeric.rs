// ABOUTME: Small numeric helpers shared by storage and projection code
// ABOUTME: Decimal rounding with a fixed number of places
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Round `value` to `decimals` places, halves away from zero
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::round_to;

    #[test]
    fn test_round_to_one_decimal() {
        assert!((round_to(80.04, 1) - 80.0).abs() < f64::EPSILON);
        assert!((round_to(80.06, 1) - 80.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_negative_values() {
        assert!((round_to(-1.234, 2) - (-1.23)).abs() < f64::EPSILON);
    }
}
