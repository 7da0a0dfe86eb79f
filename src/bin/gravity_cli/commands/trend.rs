// ABOUTME: Trend command for gravity-cli
// ABOUTME: Prints the fitted weight trend, rates, and projected target date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use gravity_log::dashboard::DashboardService;
use gravity_log::database_plugins::GravityStore;
use gravity_log::errors::AppResult;

use crate::helpers::display::{display_trend, print_json};
use crate::helpers::{day_or_today, resolve_user};

/// Show the trend overview for a user
pub async fn show<S: GravityStore>(
    service: &DashboardService<S>,
    user: &str,
    today: Option<NaiveDate>,
    json: bool,
) -> AppResult<()> {
    let user = resolve_user(service.store(), user).await?;
    let overview = service
        .trend_overview(user.id, day_or_today(today))
        .await?;

    match overview {
        Some(overview) if json => print_json(&overview)?,
        Some(overview) => display_trend(&user, &overview),
        None if json => print_json(&Option::<()>::None)?,
        None => println!(
            "Not enough measurements in {} to fit a trend for '{}'",
            user.trend_window, user.name
        ),
    }
    Ok(())
}
