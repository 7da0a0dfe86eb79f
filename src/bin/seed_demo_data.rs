// ABOUTME: Demo data seeder for GravityLog dashboard testing
// ABOUTME: Creates a mock user with two years of weight and body composition measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Demo data seeder for GravityLog.
//!
//! Creates the user `mock` (180 cm, target 72 kg, 12-week trend window) and
//! one measurement every 4-8 days over the last 24 months. Weights follow a
//! fixed curve of checkpoints with a little noise; fat, water and muscle
//! drift as small random walks.
//!
//! Usage:
//! ```bash
//! # Seed into the default database
//! cargo run --bin seed-demo-data
//!
//! # Reproducible run
//! cargo run --bin seed-demo-data -- --seed 42
//!
//! # Replace the mock user's measurements
//! cargo run --bin seed-demo-data -- --reset
//! ```

use anyhow::{bail, Result};
use chrono::{Duration, Local, Months, NaiveDate};
use clap::Parser;
use gravity_log::config::{AppConfig, LogLevel};
use gravity_log::database::Database;
use gravity_log::database_plugins::{MeasurementStore, ProfileStore};
use gravity_log::logging::LoggingConfig;
use gravity_log::models::{Measurement, NewUser, TrendWindow, UserProfile};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

const MOCK_USER: &str = "mock";
const MOCK_HEIGHT_CM: u32 = 180;
const MOCK_TARGET_KG: f64 = 72.0;
const MOCK_TREND_WEEKS: u32 = 12;

/// Length of the generated history
const HISTORY_DAYS: i64 = 24 * 30;

/// Weight curve as (months after the first day, kg)
const CHECKPOINTS: &[(u32, f64)] = &[
    (0, 83.4),
    (2, 81.6),
    (4, 82.7),
    (6, 80.7),
    (8, 82.4),
    (10, 85.4),
    (12, 84.1),
    (14, 83.8),
    (16, 81.1),
    (18, 78.6),
    (20, 80.3),
    (22, 79.2),
    (23, 76.2),
];

#[derive(Parser)]
#[command(
    name = "seed-demo-data",
    about = "GravityLog Demo Data Seeder",
    long_about = "Create a mock user with two years of measurements for dashboard testing"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Delete the mock user's measurements before seeding
    #[arg(long)]
    reset: bool,

    /// Random seed for a reproducible history
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging.level = LogLevel::Debug.to_string();
    }
    logging.init()?;

    info!("=== GravityLog Demo Data Seeder ===");

    let config = AppConfig::from_env()?.with_database_override(args.database_url.as_deref())?;
    info!("Connecting to database: {}", config.database_url);
    let database = Database::connect(&config.database_url).await?;

    info!("Step 1: Creating mock user...");
    let user = find_or_create_mock_user(&database).await?;
    info!("  Using user {} ({})", user.name, user.id);

    if args.reset {
        let removed = database.clear_measurements(user.id).await?;
        info!("  Removed {} existing measurements", removed);
    } else if !database.load_series(user.id).await?.is_empty() {
        bail!("User '{MOCK_USER}' already has measurements. Run again with --reset to replace them.");
    }

    info!("Step 2: Generating measurements...");
    let mut rng = args
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let today = Local::now().date_naive();
    let measurements = generate_history(&mut rng, today);
    for measurement in &measurements {
        database.upsert(user.id, *measurement).await?;
    }
    info!("  Generated {} measurements", measurements.len());

    info!("");
    info!("=== Seeding Complete ===");
    if let (Some(first), Some(last)) = (measurements.first(), measurements.last()) {
        info!(
            "  {} .. {}: {:.1} kg -> {:.1} kg (target {:.1} kg)",
            first.date, last.date, first.weight, last.weight, MOCK_TARGET_KG
        );
    }

    Ok(())
}

/// Find the mock user or create it with the demo settings
async fn find_or_create_mock_user(database: &Database) -> Result<UserProfile> {
    let user = match database.get_user_by_name(MOCK_USER).await? {
        Some(user) => user,
        None => {
            database
                .create_user(NewUser {
                    name: MOCK_USER.to_owned(),
                    height_cm: MOCK_HEIGHT_CM,
                    target_weight: MOCK_TARGET_KG,
                })
                .await?
        }
    };
    let window = TrendWindow::date_range(MOCK_TREND_WEEKS)?;
    Ok(database.update_trend_window(user.id, window).await?)
}

/// Checkpoint dates for a history starting on `start`
fn checkpoint_dates(start: NaiveDate) -> Vec<(NaiveDate, f64)> {
    CHECKPOINTS
        .iter()
        .filter_map(|&(months, weight)| {
            start
                .checked_add_months(Months::new(months))
                .map(|date| (date, weight))
        })
        .collect()
}

/// Weight on `date` interpolated between the surrounding checkpoints
///
/// Dates outside the curve take the nearest checkpoint's weight.
fn curve_weight(checkpoints: &[(NaiveDate, f64)], date: NaiveDate) -> f64 {
    let Some((&(first_date, first_weight), &(_, last_weight))) =
        checkpoints.first().zip(checkpoints.last())
    else {
        return MOCK_TARGET_KG;
    };
    if date < first_date {
        return first_weight;
    }
    checkpoints
        .windows(2)
        .find(|pair| pair[0].0 <= date && date <= pair[1].0)
        .map_or(last_weight, |pair| {
            let (from_date, from_weight) = pair[0];
            let (to_date, to_weight) = pair[1];
            let span = (to_date - from_date).num_days() as f64;
            let elapsed = (date - from_date).num_days() as f64;
            (to_weight - from_weight).mul_add(elapsed / span, from_weight)
        })
}

/// Measurements every 4-8 days over the history ending on `today`
fn generate_history(rng: &mut impl Rng, today: NaiveDate) -> Vec<Measurement> {
    let start = today - Duration::days(HISTORY_DAYS);
    let checkpoints = checkpoint_dates(start);

    let mut fat: f64 = rng.gen_range(25.0..30.0);
    let mut water: f64 = rng.gen_range(45.0..50.0);
    let mut muscle: f64 = rng.gen_range(25.0..30.0);

    let mut measurements = Vec::new();
    let mut current = start;
    loop {
        current += Duration::days(rng.gen_range(4..=8));
        if current > today {
            break;
        }
        let weight = curve_weight(&checkpoints, current) + rng.gen_range(-0.3..0.3);
        fat += rng.gen_range(-0.2..0.2);
        water += rng.gen_range(-0.2..0.2);
        muscle += rng.gen_range(-0.2..0.2);
        measurements.push(Measurement::new(current, weight, fat, water, muscle).rounded());
    }
    measurements
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_curve_interpolates_between_checkpoints() {
        let checkpoints = vec![(day(2024, 1, 1), 80.0), (day(2024, 1, 11), 79.0)];
        assert!((curve_weight(&checkpoints, day(2024, 1, 6)) - 79.5).abs() < 1e-9);
        assert!((curve_weight(&checkpoints, day(2023, 12, 1)) - 80.0).abs() < 1e-9);
        assert!((curve_weight(&checkpoints, day(2024, 2, 1)) - 79.0).abs() < 1e-9);
    }

    #[test]
    fn test_history_is_reproducible_with_seed() {
        let today = day(2025, 6, 30);
        let a = generate_history(&mut StdRng::seed_from_u64(7), today);
        let b = generate_history(&mut StdRng::seed_from_u64(7), today);
        assert_eq!(a, b);
    }

    #[test]
    fn test_history_spacing_and_ranges() {
        let today = day(2025, 6, 30);
        let history = generate_history(&mut StdRng::seed_from_u64(42), today);

        assert!(history.len() >= HISTORY_DAYS as usize / 8 - 1);
        assert!(history.last().unwrap().date <= today);
        for pair in history.windows(2) {
            let gap = (pair[1].date - pair[0].date).num_days();
            assert!((4..=8).contains(&gap), "gap {gap} out of range");
        }
        for m in &history {
            assert!(m.validate().is_ok());
            assert!((75.0..=86.0).contains(&m.weight), "weight {}", m.weight);
        }
    }
}
