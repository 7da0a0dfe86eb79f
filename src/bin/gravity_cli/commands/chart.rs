// ABOUTME: Chart command for gravity-cli
// ABOUTME: Builds main, trend, or body composition chart data and prints it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use clap::ValueEnum;
use gravity_log::dashboard::{CompositionUnit, DashboardService, MarkerMode};
use gravity_log::database_plugins::GravityStore;
use gravity_log::errors::AppResult;

use crate::helpers::display::{display_series, print_json};
use crate::helpers::{day_or_today, resolve_user};

/// Which chart to build
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ChartKind {
    /// Weight history with the target line
    Main,
    /// Fitted trend and projection
    Trend,
    /// Fat, water and muscle
    BodyComposition,
}

/// Options of the chart command
pub struct ChartRequest {
    pub kind: ChartKind,
    pub mode: MarkerMode,
    pub unit: CompositionUnit,
    pub with_weight: bool,
    pub today: Option<NaiveDate>,
    pub json: bool,
}

/// Build and print the requested chart
pub async fn show<S: GravityStore>(
    service: &DashboardService<S>,
    user: &str,
    request: ChartRequest,
) -> AppResult<()> {
    let user = resolve_user(service.store(), user).await?;

    match request.kind {
        ChartKind::Main => match service.main_chart(user.id, request.mode).await? {
            Some(chart) if request.json => print_json(&chart)?,
            Some(chart) => display_series("Weight history", &chart.series, chart.x_range),
            None => no_data(&user.name, request.json)?,
        },
        ChartKind::Trend => {
            let today = day_or_today(request.today);
            match service.trend_overview(user.id, today).await? {
                Some(overview) if request.json => print_json(&overview.chart)?,
                Some(overview) => {
                    display_series("Weight trend", &overview.chart.series, overview.chart.x_range);
                    if let Some(annotation) = &overview.chart.annotation {
                        println!("   Annotation: {} {:?}", annotation.label, annotation.arrow);
                    }
                }
                None => no_data(&user.name, request.json)?,
            }
        }
        ChartKind::BodyComposition => {
            let chart = service
                .body_composition_chart(user.id, request.unit, request.with_weight, request.mode)
                .await?;
            match chart {
                Some(chart) if request.json => print_json(&chart)?,
                Some(chart) => {
                    let title = format!(
                        "Body composition ({}{})",
                        chart.unit.suffix(),
                        if chart.secondary_axis {
                            ", weight on secondary axis"
                        } else {
                            ""
                        }
                    );
                    display_series(&title, &chart.series, chart.x_range);
                }
                None => no_data(&user.name, request.json)?,
            }
        }
    }
    Ok(())
}

fn no_data(user: &str, json: bool) -> AppResult<()> {
    if json {
        return print_json(&Option::<()>::None);
    }
    println!("No chart data for '{user}'");
    Ok(())
}
