// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Shared helpers for gravity-cli commands
// ABOUTME: User lookup by name, the local calendar day, and output formatting

pub mod display;

use chrono::{Local, NaiveDate};
use gravity_log::database_plugins::ProfileStore;
use gravity_log::errors::{AppError, AppResult};
use gravity_log::models::UserProfile;

/// Look up a user by name or fail with `ResourceNotFound`
pub async fn resolve_user<S: ProfileStore>(store: &S, name: &str) -> AppResult<UserProfile> {
    store
        .get_user_by_name(name)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User '{}'", name.trim())))
}

/// The given day, or today in local time
pub fn day_or_today(day: Option<NaiveDate>) -> NaiveDate {
    day.unwrap_or_else(|| Local::now().date_naive())
}
