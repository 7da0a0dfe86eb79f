// ABOUTME: GravityLog CLI - command-line front end for body-metrics tracking
// ABOUTME: Manages users and measurements and prints trend projections and chart data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Create a user
//! gravity-cli user add alice --height 168 --target 62
//!
//! # Fit the trend over the last 8 weeks
//! gravity-cli user set-trend alice --weeks 8
//!
//! # Record today's weight; fat, water and muscle default to the previous entry
//! gravity-cli measurement add --user alice --weight 66.4
//!
//! # Show the projection toward the target
//! gravity-cli trend --user alice
//!
//! # Dump body composition chart data in kg as JSON
//! gravity-cli chart --user alice --kind body-composition --unit kg --json
//! ```

mod commands;
mod helpers;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use commands::chart::{ChartKind, ChartRequest};
use gravity_log::config::AppConfig;
use gravity_log::dashboard::{CompositionUnit, DashboardService, MarkerMode};
use gravity_log::database::Database;
use gravity_log::intelligence::TrendEstimator;
use gravity_log::logging::LoggingConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "gravity-cli",
    about = "GravityLog body-metrics tracker",
    long_about = "Track weight and body composition per user and project the weight trend toward a target."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// User management commands
    User {
        #[command(subcommand)]
        action: UserCommand,
    },

    /// Measurement commands
    Measurement {
        #[command(subcommand)]
        action: MeasurementCommand,
    },

    /// Show the weight trend and projection for a user
    Trend {
        /// User name
        #[arg(long)]
        user: String,

        /// Reference day for the days-remaining count (defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Print chart data for a user
    Chart(ChartArgs),
}

#[non_exhaustive]
#[derive(Subcommand)]
enum UserCommand {
    /// Create a user
    Add {
        /// Unique user name
        name: String,

        /// Height in cm
        #[arg(long, default_value_t = 180)]
        height: u32,

        /// Target weight in kg
        #[arg(long, default_value_t = 80.0)]
        target: f64,
    },

    /// List all users
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Change a user's target weight
    SetTarget {
        /// User name
        name: String,

        /// Target weight in kg
        kg: f64,
    },

    /// Choose the window the trend is fitted over
    SetTrend {
        /// User name
        name: String,

        /// Fit the trailing number of weeks
        #[arg(long, conflicts_with_all = ["start", "full"])]
        weeks: Option<u32>,

        /// Fit every measurement from this date on (YYYY-MM-DD)
        #[arg(long, conflicts_with = "full")]
        start: Option<NaiveDate>,

        /// Fit the whole history
        #[arg(long)]
        full: bool,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum MeasurementCommand {
    /// Add or replace the measurement for a day
    Add {
        /// User name
        #[arg(long)]
        user: String,

        /// Day of the measurement (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Weight in kg
        #[arg(long)]
        weight: Option<f64>,

        /// Body fat in %
        #[arg(long)]
        fat: Option<f64>,

        /// Body water in %
        #[arg(long)]
        water: Option<f64>,

        /// Muscle mass in %
        #[arg(long)]
        muscle: Option<f64>,
    },

    /// Delete the measurement for a day
    Delete {
        /// User name
        #[arg(long)]
        user: String,

        /// Day of the measurement
        #[arg(long)]
        date: NaiveDate,
    },

    /// List a user's measurements
    List {
        /// User name
        #[arg(long)]
        user: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct ChartArgs {
    /// User name
    #[arg(long)]
    user: String,

    /// Which chart to build
    #[arg(long, value_enum, default_value_t = ChartKind::Main)]
    kind: ChartKind,

    /// Marker mode: lines, markers or both
    #[arg(long, default_value = "lines")]
    mode: MarkerMode,

    /// Body composition unit: % or kg
    #[arg(long, default_value = "%")]
    unit: CompositionUnit,

    /// Overlay weight and target on the body composition chart
    #[arg(long)]
    with_weight: bool,

    /// Reference day for the trend annotation (defaults to today)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Print JSON instead of a summary
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let config = AppConfig::from_env()?.with_database_override(cli.database_url.as_deref())?;
    debug!(config = %config.summary(), "Starting gravity-cli");

    let database = Database::connect(&config.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;
    let service = DashboardService::new(database, TrendEstimator::new(config.trend));

    match cli.command {
        Command::User { action } => match action {
            UserCommand::Add {
                name,
                height,
                target,
            } => commands::user::add(service.store(), name, height, target).await?,
            UserCommand::List { json } => commands::user::list(service.store(), json).await?,
            UserCommand::SetTarget { name, kg } => {
                commands::user::set_target(service.store(), &name, kg).await?;
            }
            UserCommand::SetTrend {
                name,
                weeks,
                start,
                full,
            } => commands::user::set_trend(service.store(), &name, weeks, start, full).await?,
        },
        Command::Measurement { action } => match action {
            MeasurementCommand::Add {
                user,
                date,
                weight,
                fat,
                water,
                muscle,
            } => {
                let values = commands::measurement::EntryValues {
                    weight,
                    fat,
                    water,
                    muscle,
                };
                commands::measurement::add(&service, &user, date, values).await?;
            }
            MeasurementCommand::Delete { user, date } => {
                commands::measurement::delete(service.store(), &user, date).await?;
            }
            MeasurementCommand::List { user, json } => {
                commands::measurement::list(service.store(), &user, json).await?;
            }
        },
        Command::Trend { user, today, json } => {
            commands::trend::show(&service, &user, today, json).await?;
        }
        Command::Chart(args) => {
            let request = ChartRequest {
                kind: args.kind,
                mode: args.mode,
                unit: args.unit,
                with_weight: args.with_weight,
                today: args.today,
                json: args.json,
            };
            commands::chart::show(&service, &args.user, request).await?;
        }
    }

    Ok(())
}
