// ABOUTME: Measurement commands for gravity-cli
// ABOUTME: Adds, replaces, deletes, and lists a user's daily measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use gravity_log::dashboard::DashboardService;
use gravity_log::database_plugins::{GravityStore, MeasurementStore, UpsertOutcome};
use gravity_log::errors::AppResult;
use tracing::{info, warn};

use crate::helpers::display::{display_measurements, print_json};
use crate::helpers::{day_or_today, resolve_user};

type Result<T> = AppResult<T>;

/// Values given on the command line; missing ones come from the entry defaults
pub struct EntryValues {
    pub weight: Option<f64>,
    pub fat: Option<f64>,
    pub water: Option<f64>,
    pub muscle: Option<f64>,
}

/// Add or replace the measurement for a day
pub async fn add<S: GravityStore>(
    service: &DashboardService<S>,
    user: &str,
    date: Option<NaiveDate>,
    values: EntryValues,
) -> Result<()> {
    let user = resolve_user(service.store(), user).await?;
    let date = day_or_today(date);

    let mut entry = service.entry_defaults(user.id, date).await?;
    entry.weight = values.weight.unwrap_or(entry.weight);
    entry.fat = values.fat.unwrap_or(entry.fat);
    entry.water = values.water.unwrap_or(entry.water);
    entry.muscle = values.muscle.unwrap_or(entry.muscle);

    let measurement = entry.into_measurement(date);
    let outcome = service.store().upsert(user.id, measurement).await?;
    info!(user_id = %user.id, %date, ?outcome, "Measurement saved");

    let verb = match outcome {
        UpsertOutcome::Added => "Added",
        UpsertOutcome::Updated => "Updated",
    };
    let stored = measurement.rounded();
    println!(
        "{verb} {date} for '{}': {:.1} kg, fat {:.1}%, water {:.1}%, muscle {:.1}%",
        user.name, stored.weight, stored.fat, stored.water, stored.muscle
    );
    Ok(())
}

/// Delete the measurement for a day
pub async fn delete<S: GravityStore>(store: &S, user: &str, date: NaiveDate) -> Result<()> {
    let user = resolve_user(store, user).await?;
    if store.delete(user.id, date).await? {
        println!("Deleted {date} for '{}'", user.name);
    } else {
        warn!(user_id = %user.id, %date, "No measurement to delete");
        println!("No measurement on {date} for '{}'", user.name);
    }
    Ok(())
}

/// List a user's measurements, oldest first
pub async fn list<S: GravityStore>(store: &S, user: &str, json: bool) -> Result<()> {
    let user = resolve_user(store, user).await?;
    let measurements = store.load_series(user.id).await?;
    if json {
        return print_json(&measurements);
    }
    display_measurements(&user, &measurements);
    Ok(())
}
