// ABOUTME: Measurement records and the weight series consumed by trend estimation
// ABOUTME: Measurement, BodyComponent, WeightSample, and the ordered MeasurementSeries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits::{MAX_PERCENT, MAX_WEIGHT_KG, STORAGE_DECIMALS};
use crate::constants::units::PERCENT;
use crate::errors::{AppError, AppResult};
use crate::numeric::round_to;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::slice::Iter;

/// One day's body measurements for a user
///
/// Weight is in kilograms; fat, water and muscle are percentages of body
/// weight. At most one measurement exists per user and date.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use gravity_core::models::Measurement;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let entry = Measurement::new(date, 81.64, 24.9, 50.2, 26.1).rounded();
/// assert!((entry.weight - 81.6).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Calendar day of the measurement
    pub date: NaiveDate,
    /// Body weight (kg)
    pub weight: f64,
    /// Body fat (%)
    pub fat: f64,
    /// Body water (%)
    pub water: f64,
    /// Muscle mass (%)
    pub muscle: f64,
}

impl Measurement {
    /// Create a measurement without validation
    #[must_use]
    pub const fn new(date: NaiveDate, weight: f64, fat: f64, water: f64, muscle: f64) -> Self {
        Self {
            date,
            weight,
            fat,
            water,
            muscle,
        }
    }

    /// Copy with every value rounded to the storage precision (one decimal)
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            date: self.date,
            weight: round_to(self.weight, STORAGE_DECIMALS),
            fat: round_to(self.fat, STORAGE_DECIMALS),
            water: round_to(self.water, STORAGE_DECIMALS),
            muscle: round_to(self.muscle, STORAGE_DECIMALS),
        }
    }

    /// Check every value against the accepted ranges
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when weight is outside 0-200 kg or any
    /// composition percentage is outside 0-100, and `InvalidInput` for
    /// non-finite values.
    pub fn validate(&self) -> AppResult<()> {
        check_range("weight", self.weight, MAX_WEIGHT_KG)?;
        for component in BodyComponent::ALL {
            check_range(component.name(), component.percent_of(self), MAX_PERCENT)?;
        }
        Ok(())
    }

    /// Mass of a body component in kg, rounded to one decimal
    #[must_use]
    pub fn component_kg(&self, component: BodyComponent) -> f64 {
        round_to(
            self.weight * component.percent_of(self) / PERCENT,
            STORAGE_DECIMALS,
        )
    }

    /// Weight-only view used by the trend estimator
    #[must_use]
    pub const fn weight_sample(&self) -> WeightSample {
        WeightSample {
            date: self.date,
            weight: self.weight,
        }
    }
}

fn check_range(field: &str, value: f64, max: f64) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::invalid_input(format!(
            "{field} must be a finite number"
        )));
    }
    if !(0.0..=max).contains(&value) {
        return Err(AppError::out_of_range(format!(
            "{field} {value:.1} is outside 0-{max:.0}"
        )));
    }
    Ok(())
}

/// Body-composition components tracked alongside weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyComponent {
    /// Body fat
    Fat,
    /// Body water
    Water,
    /// Muscle mass
    Muscle,
}

impl BodyComponent {
    /// All components in display order
    pub const ALL: [Self; 3] = [Self::Fat, Self::Water, Self::Muscle];

    /// Column / series name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fat => "fat",
            Self::Water => "water",
            Self::Muscle => "muscle",
        }
    }

    /// Percentage value of this component in a measurement
    #[must_use]
    pub const fn percent_of(self, measurement: &Measurement) -> f64 {
        match self {
            Self::Fat => measurement.fat,
            Self::Water => measurement.water,
            Self::Muscle => measurement.muscle,
        }
    }
}

impl fmt::Display for BodyComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single `(date, weight)` observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSample {
    /// Calendar day
    pub date: NaiveDate,
    /// Weight (kg)
    pub weight: f64,
}

impl WeightSample {
    /// Create a new sample
    #[must_use]
    pub const fn new(date: NaiveDate, weight: f64) -> Self {
        Self { date, weight }
    }
}

/// One user's weight history, strictly increasing by date
///
/// The ordering invariant is checked on construction, so consumers can rely
/// on `first()`/`last()` being the oldest/newest samples and on binary
/// searches by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeasurementSeries {
    samples: Vec<WeightSample>,
}

impl MeasurementSeries {
    /// Build a series from samples already ordered by date
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if dates are not strictly increasing or a
    /// weight is not finite.
    pub fn new(samples: Vec<WeightSample>) -> AppResult<Self> {
        if let Some(sample) = samples.iter().find(|s| !s.weight.is_finite()) {
            return Err(AppError::invalid_input(format!(
                "weight on {} is not a finite number",
                sample.date
            )));
        }
        if let Some(pair) = samples.windows(2).find(|pair| pair[0].date >= pair[1].date) {
            return Err(AppError::invalid_input(format!(
                "series dates must be strictly increasing ({} is followed by {})",
                pair[0].date, pair[1].date
            )));
        }
        Ok(Self { samples })
    }

    /// Build a series from stored measurements (already sorted by the store)
    ///
    /// # Errors
    ///
    /// Same conditions as [`MeasurementSeries::new`].
    pub fn from_measurements(measurements: &[Measurement]) -> AppResult<Self> {
        Self::new(measurements.iter().map(Measurement::weight_sample).collect())
    }

    /// All samples in date order
    #[must_use]
    pub fn samples(&self) -> &[WeightSample] {
        &self.samples
    }

    /// Number of samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the series has no samples
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Oldest sample
    #[must_use]
    pub fn first(&self) -> Option<&WeightSample> {
        self.samples.first()
    }

    /// Most recent sample
    #[must_use]
    pub fn last(&self) -> Option<&WeightSample> {
        self.samples.last()
    }

    /// Samples dated on or after `cutoff`
    #[must_use]
    pub fn since(&self, cutoff: NaiveDate) -> &[WeightSample] {
        let start = self.samples.partition_point(|s| s.date < cutoff);
        &self.samples[start..]
    }
}

impl<'a> IntoIterator for &'a MeasurementSeries {
    type Item = &'a WeightSample;
    type IntoIter = Iter<'a, WeightSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
