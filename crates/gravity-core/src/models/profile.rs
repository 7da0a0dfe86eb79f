// ABOUTME: User profile model with target weight and trend window selection
// ABOUTME: UserProfile, NewUser validation, and the TrendWindow variants stored per user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits::{MAX_HEIGHT_CM, MAX_NAME_CHARS, MAX_WEIGHT_KG};
use crate::constants::trend::DEFAULT_RANGE_WEEKS;
use crate::constants::units::DAYS_PER_WEEK;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Which part of a series the trend line is fitted to
///
/// Serialized with a `how` tag so it round-trips through JSON and the
/// `trend_how` column of the profile table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "how", rename_all = "snake_case")]
pub enum TrendWindow {
    /// Fit every sample dated on or after `start`
    StartDate {
        /// First day included in the fit
        start: NaiveDate,
    },
    /// Fit the trailing `weeks` weeks before the most recent sample
    DateRange {
        /// Number of trailing weeks, at least 1
        weeks: u32,
    },
    /// Fit the whole history
    FullHistory,
}

impl Default for TrendWindow {
    fn default() -> Self {
        Self::DateRange {
            weeks: DEFAULT_RANGE_WEEKS,
        }
    }
}

impl TrendWindow {
    /// Window starting on a fixed date
    #[must_use]
    pub const fn start_date(start: NaiveDate) -> Self {
        Self::StartDate { start }
    }

    /// Trailing window of `weeks` weeks
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `weeks` is zero.
    pub fn date_range(weeks: u32) -> AppResult<Self> {
        if weeks == 0 {
            return Err(AppError::invalid_input(
                "trend date range must cover at least one week",
            ));
        }
        Ok(Self::DateRange { weeks })
    }

    /// Reject a date range of zero weeks
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for `DateRange { weeks: 0 }`.
    pub fn validate(&self) -> AppResult<()> {
        match *self {
            Self::DateRange { weeks } => Self::date_range(weeks).map(|_| ()),
            Self::StartDate { .. } | Self::FullHistory => Ok(()),
        }
    }

    /// Resolve the window to the first date included in the fit
    ///
    /// `first` and `last` are the oldest and newest dates of the series. A
    /// range reaching past the earliest representable date covers everything.
    #[must_use]
    pub fn cutoff(&self, first: NaiveDate, last: NaiveDate) -> NaiveDate {
        match *self {
            Self::StartDate { start } => start,
            Self::DateRange { weeks } => last
                .checked_sub_days(Days::new(
                    u64::from(weeks) * DAYS_PER_WEEK.unsigned_abs(),
                ))
                .unwrap_or(NaiveDate::MIN),
            Self::FullHistory => first,
        }
    }

    /// Storage tag (`start_date`, `date_range`, `full_history`)
    #[must_use]
    pub const fn how(&self) -> &'static str {
        match self {
            Self::StartDate { .. } => "start_date",
            Self::DateRange { .. } => "date_range",
            Self::FullHistory => "full_history",
        }
    }

    /// Rebuild a window from its stored columns
    ///
    /// Accepts the space-separated spellings (`"start date"`, `"date range"`)
    /// written by older profile tables as well.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unknown tag or a missing column value.
    pub fn from_parts(how: &str, start: Option<NaiveDate>, weeks: Option<u32>) -> AppResult<Self> {
        match how.trim().replace(' ', "_").as_str() {
            "start_date" => start.map(Self::start_date).ok_or_else(|| {
                AppError::invalid_input("start_date trend window requires a start date")
            }),
            "date_range" => weeks.map_or_else(
                || {
                    Err(AppError::invalid_input(
                        "date_range trend window requires a week count",
                    ))
                },
                Self::date_range,
            ),
            "full_history" | "" => Ok(Self::FullHistory),
            other => Err(AppError::invalid_input(format!(
                "unknown trend window '{other}'"
            ))),
        }
    }

    /// Stored start date, if this window has one
    #[must_use]
    pub const fn start(&self) -> Option<NaiveDate> {
        match self {
            Self::StartDate { start } => Some(*start),
            _ => None,
        }
    }

    /// Stored week count, if this window has one
    #[must_use]
    pub const fn weeks(&self) -> Option<u32> {
        match self {
            Self::DateRange { weeks } => Some(*weeks),
            _ => None,
        }
    }
}

impl fmt::Display for TrendWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartDate { start } => write!(f, "since {start}"),
            Self::DateRange { weeks: 1 } => f.write_str("last week"),
            Self::DateRange { weeks } => write!(f, "last {weeks} weeks"),
            Self::FullHistory => f.write_str("full history"),
        }
    }
}

/// Request to create a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name, unique across users
    pub name: String,
    /// Height (cm)
    pub height_cm: u32,
    /// Target weight (kg)
    pub target_weight: f64,
}

impl NewUser {
    /// Validate name, height and target weight
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty or overlong name and
    /// `ValueOutOfRange` for height or target outside the accepted range.
    pub fn validate(&self) -> AppResult<()> {
        validate_name(&self.name)?;
        if self.height_cm > MAX_HEIGHT_CM {
            return Err(AppError::out_of_range(format!(
                "height {} cm is outside 0-{MAX_HEIGHT_CM}",
                self.height_cm
            )));
        }
        validate_target_weight(self.target_weight)
    }
}

fn validate_name(name: &str) -> AppResult<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_input("user name must not be empty"));
    }
    if trimmed.chars().count() > MAX_NAME_CHARS {
        return Err(AppError::invalid_input(format!(
            "user name must be at most {MAX_NAME_CHARS} characters"
        )));
    }
    Ok(())
}

/// Check a target weight against the accepted range
///
/// # Errors
///
/// Returns `ValueOutOfRange` when the target is outside 0-200 kg or not finite.
pub fn validate_target_weight(target_weight: f64) -> AppResult<()> {
    if !target_weight.is_finite() || !(0.0..=MAX_WEIGHT_KG).contains(&target_weight) {
        return Err(AppError::out_of_range(format!(
            "target weight {target_weight} kg is outside 0-{MAX_WEIGHT_KG:.0}"
        )));
    }
    Ok(())
}

/// A tracked person with their goal and trend preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier
    pub id: Uuid,
    /// Display name, unique across users
    pub name: String,
    /// Height (cm)
    pub height_cm: u32,
    /// Target weight (kg)
    pub target_weight: f64,
    /// Window used for the trend fit
    pub trend_window: TrendWindow,
    /// When the user was created
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a profile from a validated request with the default trend window
    ///
    /// # Errors
    ///
    /// Returns the validation error of [`NewUser::validate`].
    pub fn new(request: NewUser) -> AppResult<Self> {
        request.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: request.name.trim().to_owned(),
            height_cm: request.height_cm,
            target_weight: request.target_weight,
            trend_window: TrendWindow::default(),
            created_at: Utc::now(),
        })
    }
}
