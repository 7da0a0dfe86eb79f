// ABOUTME: User management commands for gravity-cli
// ABOUTME: Handles add, list, target weight, and trend window operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use gravity_log::database_plugins::ProfileStore;
use gravity_log::errors::{AppError, AppResult};
use gravity_log::models::{NewUser, TrendWindow};
use tracing::info;

use crate::helpers::display::{display_user, display_user_table, print_json};
use crate::helpers::resolve_user;

type Result<T> = AppResult<T>;

/// Create a user
pub async fn add<S: ProfileStore>(store: &S, name: String, height: u32, target: f64) -> Result<()> {
    let user = store
        .create_user(NewUser {
            name,
            height_cm: height,
            target_weight: target,
        })
        .await?;
    info!(user_id = %user.id, "User created");
    println!("Created user '{}'", user.name);
    display_user(&user);
    Ok(())
}

/// List all users
pub async fn list<S: ProfileStore>(store: &S, json: bool) -> Result<()> {
    let users = store.list_users().await?;
    if json {
        return print_json(&users);
    }
    display_user_table(&users);
    Ok(())
}

/// Change a user's target weight
pub async fn set_target<S: ProfileStore>(store: &S, name: &str, kg: f64) -> Result<()> {
    let user = resolve_user(store, name).await?;
    let updated = store.update_target(user.id, kg).await?;
    println!(
        "Target for '{}' changed from {:.1} kg to {:.1} kg",
        updated.name, user.target_weight, updated.target_weight
    );
    Ok(())
}

/// Choose the trend window from the mutually exclusive flags
pub async fn set_trend<S: ProfileStore>(
    store: &S,
    name: &str,
    weeks: Option<u32>,
    start: Option<NaiveDate>,
    full: bool,
) -> Result<()> {
    let window = match (weeks, start, full) {
        (Some(weeks), None, false) => TrendWindow::date_range(weeks)?,
        (None, Some(start), false) => TrendWindow::start_date(start),
        (None, None, true) => TrendWindow::FullHistory,
        _ => {
            return Err(AppError::invalid_input(
                "choose exactly one of --weeks, --start or --full",
            ))
        }
    };

    let user = resolve_user(store, name).await?;
    let updated = store.update_trend_window(user.id, window).await?;
    println!(
        "Trend window for '{}' set to {}",
        updated.name, updated.trend_window
    );
    Ok(())
}
