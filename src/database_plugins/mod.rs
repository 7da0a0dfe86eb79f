// ABOUTME: Storage abstraction layer for GravityLog measurements and user profiles
// ABOUTME: Async store traits implemented by the SQLite database and the in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::models::{Measurement, NewUser, TrendWindow, UserProfile};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// In-memory store for tests and ephemeral sessions
pub mod memory;

pub use memory::MemoryDatabase;

/// Whether an upsert created a new row or replaced an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertOutcome {
    /// No measurement existed for the date
    Added,
    /// The measurement for the date was replaced
    Updated,
}

/// Per-user measurement history
///
/// Implementations keep at most one measurement per user and date and
/// return histories sorted by date.
#[async_trait]
pub trait MeasurementStore: Send + Sync {
    /// Full history of a user, oldest first
    async fn load_series(&self, user_id: Uuid) -> AppResult<Vec<Measurement>>;

    /// Insert or replace the measurement for its date, rounded to one decimal
    ///
    /// Fails with `ResourceNotFound` for an unknown user and with a
    /// validation error for out-of-range values.
    async fn upsert(&self, user_id: Uuid, measurement: Measurement) -> AppResult<UpsertOutcome>;

    /// Remove the measurement on `date`; `false` when none existed
    async fn delete(&self, user_id: Uuid, date: NaiveDate) -> AppResult<bool>;

    /// Most recent measurement dated on or before `date`
    async fn latest_on_or_before(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Option<Measurement>>;

    /// Remove every measurement of a user, returning how many were deleted
    async fn clear_measurements(&self, user_id: Uuid) -> AppResult<u64>;
}

/// User profiles with target weight and trend window
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Create a user; fails with `ResourceAlreadyExists` when the name is taken
    async fn create_user(&self, request: NewUser) -> AppResult<UserProfile>;

    /// Get user by ID
    async fn get_user(&self, user_id: Uuid) -> AppResult<Option<UserProfile>>;

    /// Get user by exact name
    async fn get_user_by_name(&self, name: &str) -> AppResult<Option<UserProfile>>;

    /// All users in creation order
    async fn list_users(&self) -> AppResult<Vec<UserProfile>>;

    /// Change the target weight (kg)
    async fn update_target(&self, user_id: Uuid, target_weight: f64) -> AppResult<UserProfile>;

    /// Change the window the trend is fitted over
    async fn update_trend_window(
        &self,
        user_id: Uuid,
        window: TrendWindow,
    ) -> AppResult<UserProfile>;
}

/// A store providing both measurements and profiles
pub trait GravityStore: MeasurementStore + ProfileStore {}

impl<T: MeasurementStore + ProfileStore> GravityStore for T {}

/// Round to storage precision and check ranges before writing
///
/// # Errors
///
/// Returns the validation error of [`Measurement::validate`].
pub fn prepare_measurement(measurement: Measurement) -> AppResult<Measurement> {
    let rounded = measurement.rounded();
    rounded.validate()?;
    Ok(rounded)
}
