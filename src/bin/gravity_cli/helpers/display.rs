// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for gravity-cli
// ABOUTME: Tables for users and measurements, the trend summary, and chart series overviews

use gravity_log::dashboard::{AxisRange, Series, TrendOverview};
use gravity_log::errors::AppResult;
use gravity_log::intelligence::TrendDirection;
use gravity_log::models::{Measurement, UserProfile};
use serde::Serialize;

/// Pretty-print any serializable value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display a single user's settings
pub fn display_user(user: &UserProfile) {
    println!("User: {}", user.name);
    println!("   ID: {}", user.id);
    println!("   Height: {} cm", user.height_cm);
    println!("   Target: {:.1} kg", user.target_weight);
    println!("   Trend window: {}", user.trend_window);
}

/// Display all users as a table
pub fn display_user_table(users: &[UserProfile]) {
    if users.is_empty() {
        println!("No users yet. Create one with: gravity-cli user add <name>");
        return;
    }
    println!(
        "{:<24} {:>8} {:>10}  {:<20} {:<10}",
        "NAME", "HEIGHT", "TARGET", "TREND WINDOW", "CREATED"
    );
    println!("{}", "-".repeat(78));
    for user in users {
        println!(
            "{:<24} {:>5} cm {:>7.1} kg  {:<20} {}",
            user.name,
            user.height_cm,
            user.target_weight,
            user.trend_window.to_string(),
            user.created_at.format("%Y-%m-%d")
        );
    }
}

/// Display a measurement history as a table
pub fn display_measurements(user: &UserProfile, measurements: &[Measurement]) {
    if measurements.is_empty() {
        println!("No measurements for {}", user.name);
        return;
    }
    println!("Measurements for {} ({})", user.name, measurements.len());
    println!(
        "{:<12} {:>8} {:>7} {:>7} {:>7}",
        "DATE", "WEIGHT", "FAT", "WATER", "MUSCLE"
    );
    println!("{}", "-".repeat(45));
    for m in measurements {
        println!(
            "{:<12} {:>8.1} {:>6.1}% {:>6.1}% {:>6.1}%",
            m.date.to_string(),
            m.weight,
            m.fat,
            m.water,
            m.muscle
        );
    }
}

/// Display the trend projection summary
pub fn display_trend(user: &UserProfile, overview: &TrendOverview) {
    let result = &overview.result;
    println!("Trend for {} ({})", user.name, user.trend_window);
    println!("{}", "=".repeat(50));
    println!(
        "   Window: {} .. {} ({} measurements)",
        result.window_start,
        result.last_observed.date,
        result.fitted_points.len()
    );
    println!(
        "   Last weight: {:.1} kg, target {:.1} kg",
        result.last_observed.weight, result.target_weight
    );
    println!(
        "   Rate: {:+.2} kg/week, {:+.2} kg/month",
        overview.rates.per_week, overview.rates.per_month
    );
    println!("   Fit quality (R²): {:.3}", result.r_squared);

    match result.direction {
        TrendDirection::AwayFromTarget => {
            println!("   Trend is moving away from the target");
        }
        TrendDirection::TowardTarget => {
            if let Some(annotation) = &overview.annotation {
                println!("   Target reached: {}", annotation.label);
            }
            if result.target_late {
                println!("   Target is more than a year away at the current rate");
            }
        }
    }

    if let (Some(first), Some(last)) = (
        result.predicted_points.first(),
        result.predicted_points.last(),
    ) {
        println!(
            "   Projection: {} {:.2} kg -> {} {:.2} kg ({} days)",
            first.date, first.weight, last.date, last.weight, result.horizon_days
        );
    }
}

/// Display a short overview of chart series
pub fn display_series(title: &str, series: &[Series], x_range: AxisRange) {
    println!("{title}");
    println!("   Range: {} .. {}", x_range.start, x_range.end);
    for s in series {
        let bounds = s
            .value_bounds()
            .map(|(lo, hi)| format!("{lo:.1} - {hi:.1} {}", s.unit.suffix()))
            .unwrap_or_default();
        println!(
            "   {:<12} {:>4} points  {:<8} {:?}/{:?}  {bounds}",
            s.name,
            s.points.len(),
            s.mode.to_string(),
            s.style,
            s.axis
        );
    }
}
