// ABOUTME: Human-facing summaries of a trend estimate and entry form defaults
// ABOUTME: Weekly and monthly rates, the target date annotation, and prefilled measurement values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::entry_defaults;
use crate::constants::units::{NANOS_PER_MONTH, NANOS_PER_WEEK};
use crate::intelligence::TrendResult;
use crate::models::Measurement;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format of the annotation label
const ANNOTATION_DATE_FORMAT: &str = "%d.%m.%y";

/// Slope of a trend expressed in kg per week and per 30-day month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendRates {
    /// Weight change per week (kg)
    pub per_week: f64,
    /// Weight change per month (kg)
    pub per_month: f64,
}

impl TrendRates {
    /// Convert a slope in kg per nanosecond
    #[must_use]
    pub fn from_slope(slope: f64) -> Self {
        Self {
            per_week: slope * NANOS_PER_WEEK,
            per_month: slope * NANOS_PER_MONTH,
        }
    }
}

/// Which way the annotation arrow points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowDirection {
    /// Weight is rising toward the target
    Up,
    /// Weight is falling toward the target
    Down,
}

/// Marker placed on the trend chart where the projection meets the target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetAnnotation {
    /// Annotated day
    pub date: NaiveDate,
    /// Height of the marker (the target weight)
    pub weight: f64,
    /// `dd.mm.yy (N days)` or `dd.mm.yy (> year)`
    pub label: String,
    /// Arrow direction, following the slope sign
    pub arrow: ArrowDirection,
    /// Calendar days from `today` to `date`; `None` when the target is late
    pub days_remaining: Option<i64>,
}

impl TargetAnnotation {
    /// Annotation for an estimate, `None` when the trend moves away from the target
    #[must_use]
    pub fn from_result(result: &TrendResult, today: NaiveDate) -> Option<Self> {
        let date = result.annotation_date()?;
        let formatted = date.format(ANNOTATION_DATE_FORMAT);
        let (label, days_remaining) = if result.target_late {
            (format!("{formatted} (> year)"), None)
        } else {
            let days = (date - today).num_days();
            (format!("{formatted} ({days} days)"), Some(days))
        };
        let arrow = if result.slope < 0.0 {
            ArrowDirection::Down
        } else {
            ArrowDirection::Up
        };

        Some(Self {
            date,
            weight: result.target_weight,
            label,
            arrow,
            days_remaining,
        })
    }
}

/// Prefilled values for a new measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntryDefaults {
    /// Weight (kg)
    pub weight: f64,
    /// Body fat (%)
    pub fat: f64,
    /// Body water (%)
    pub water: f64,
    /// Muscle mass (%)
    pub muscle: f64,
}

impl Default for EntryDefaults {
    fn default() -> Self {
        Self {
            weight: entry_defaults::WEIGHT_KG,
            fat: entry_defaults::FAT_PERCENT,
            water: entry_defaults::WATER_PERCENT,
            muscle: entry_defaults::MUSCLE_PERCENT,
        }
    }
}

impl From<&Measurement> for EntryDefaults {
    fn from(m: &Measurement) -> Self {
        Self {
            weight: m.weight,
            fat: m.fat,
            water: m.water,
            muscle: m.muscle,
        }
    }
}

impl EntryDefaults {
    /// Defaults for an entry on `date`
    ///
    /// Uses the latest measurement on or before `date`, the oldest one when
    /// `date` precedes the whole history, and fixed values when there is no
    /// history. `history` must be sorted by date.
    #[must_use]
    pub fn for_date(history: &[Measurement], date: NaiveDate) -> Self {
        let preceding = history.partition_point(|m| m.date <= date);
        let source = preceding
            .checked_sub(1)
            .and_then(|idx| history.get(idx))
            .or_else(|| history.first());
        source.map_or_else(Self::default, Self::from)
    }

    /// Measurement on `date` with these values
    #[must_use]
    pub const fn into_measurement(self, date: NaiveDate) -> Measurement {
        Measurement::new(date, self.weight, self.fat, self.water, self.muscle)
    }
}
