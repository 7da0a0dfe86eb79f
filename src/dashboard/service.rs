// ABOUTME: Dashboard service combining the store with the trend estimator
// ABOUTME: Loads a user's profile and history and returns chart-ready views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::charts::{BodyCompositionChart, CompositionUnit, MainChart, MarkerMode, TrendChart};
use super::summary::{EntryDefaults, TargetAnnotation, TrendRates};
use crate::database_plugins::GravityStore;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{TrendEstimator, TrendResult};
use crate::models::{Measurement, MeasurementSeries, UserProfile};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// Everything the trend view shows for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendOverview {
    /// Raw estimate
    pub result: TrendResult,
    /// Slope as kg per week and per month
    pub rates: TrendRates,
    /// Target marker, when the trend reaches the target
    pub annotation: Option<TargetAnnotation>,
    /// Chart series
    pub chart: TrendChart,
}

/// Read-side service behind the dashboard views
#[derive(Debug, Clone)]
pub struct DashboardService<S> {
    store: S,
    estimator: TrendEstimator,
}

impl<S: GravityStore> DashboardService<S> {
    /// Create a service over `store`
    #[must_use]
    pub const fn new(store: S, estimator: TrendEstimator) -> Self {
        Self { store, estimator }
    }

    /// Underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    async fn profile_and_history(
        &self,
        user_id: Uuid,
    ) -> AppResult<(UserProfile, Vec<Measurement>)> {
        let profile = self
            .store
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id}")))?;
        let history = self.store.load_series(user_id).await?;
        Ok((profile, history))
    }

    /// Trend estimate with rates, annotation and chart
    ///
    /// `Ok(None)` means there is not enough data in the user's window.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown user and store errors as-is.
    pub async fn trend_overview(
        &self,
        user_id: Uuid,
        today: NaiveDate,
    ) -> AppResult<Option<TrendOverview>> {
        let (profile, history) = self.profile_and_history(user_id).await?;
        let series = MeasurementSeries::from_measurements(&history)?;

        let Some(result) =
            self.estimator
                .estimate(&series, &profile.trend_window, profile.target_weight)
        else {
            debug!(%user_id, samples = series.len(), "No trend for user");
            return Ok(None);
        };

        info!(
            %user_id,
            direction = ?result.direction,
            target_reached = result.target_reached,
            target_late = result.target_late,
            "Trend estimated"
        );
        let chart = TrendChart::build(&result, today);
        Ok(Some(TrendOverview {
            rates: TrendRates::from_slope(result.slope),
            annotation: chart.annotation.clone(),
            chart,
            result,
        }))
    }

    /// Weight history chart
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown user and store errors as-is.
    pub async fn main_chart(&self, user_id: Uuid, mode: MarkerMode) -> AppResult<Option<MainChart>> {
        let (profile, history) = self.profile_and_history(user_id).await?;
        Ok(MainChart::build(&history, profile.target_weight, mode))
    }

    /// Body composition chart
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown user and store errors as-is.
    pub async fn body_composition_chart(
        &self,
        user_id: Uuid,
        unit: CompositionUnit,
        overlay_weight: bool,
        mode: MarkerMode,
    ) -> AppResult<Option<BodyCompositionChart>> {
        let (profile, history) = self.profile_and_history(user_id).await?;
        Ok(BodyCompositionChart::build(
            &history,
            profile.target_weight,
            unit,
            overlay_weight,
            mode,
        ))
    }

    /// Prefilled values for a measurement on `date`
    ///
    /// # Errors
    ///
    /// Returns store errors as-is.
    pub async fn entry_defaults(&self, user_id: Uuid, date: NaiveDate) -> AppResult<EntryDefaults> {
        let history = self.store.load_series(user_id).await?;
        Ok(EntryDefaults::for_date(&history, date))
    }
}
