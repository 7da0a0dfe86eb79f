// ABOUTME: In-memory implementation of the measurement and profile stores
// ABOUTME: Shared state behind a tokio RwLock, used by tests and throwaway sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{prepare_measurement, MeasurementStore, ProfileStore, UpsertOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::{validate_target_weight, Measurement, NewUser, TrendWindow, UserProfile};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default)]
struct MemoryState {
    /// Users in creation order
    users: Vec<UserProfile>,
    /// Measurements keyed by user, then date
    measurements: HashMap<Uuid, BTreeMap<NaiveDate, Measurement>>,
}

impl MemoryState {
    fn user_mut(&mut self, user_id: Uuid) -> AppResult<&mut UserProfile> {
        self.users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or_else(|| AppError::not_found(format!("User {user_id}")))
    }

    fn has_user(&self, user_id: Uuid) -> bool {
        self.users.iter().any(|user| user.id == user_id)
    }
}

/// Store that keeps everything in process memory
///
/// Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryDatabase {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MeasurementStore for MemoryDatabase {
    async fn load_series(&self, user_id: Uuid) -> AppResult<Vec<Measurement>> {
        let state = self.state.read().await;
        Ok(state
            .measurements
            .get(&user_id)
            .map(|by_date| by_date.values().copied().collect())
            .unwrap_or_default())
    }

    async fn upsert(&self, user_id: Uuid, measurement: Measurement) -> AppResult<UpsertOutcome> {
        let measurement = prepare_measurement(measurement)?;
        let mut state = self.state.write().await;
        if !state.has_user(user_id) {
            return Err(AppError::not_found(format!("User {user_id}")));
        }
        let previous = state
            .measurements
            .entry(user_id)
            .or_default()
            .insert(measurement.date, measurement);
        let outcome = if previous.is_some() {
            UpsertOutcome::Updated
        } else {
            UpsertOutcome::Added
        };
        debug!(%user_id, date = %measurement.date, ?outcome, "Measurement stored in memory");
        Ok(outcome)
    }

    async fn delete(&self, user_id: Uuid, date: NaiveDate) -> AppResult<bool> {
        let mut state = self.state.write().await;
        Ok(state
            .measurements
            .get_mut(&user_id)
            .and_then(|by_date| by_date.remove(&date))
            .is_some())
    }

    async fn latest_on_or_before(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Option<Measurement>> {
        let state = self.state.read().await;
        Ok(state
            .measurements
            .get(&user_id)
            .and_then(|by_date| by_date.range(..=date).next_back())
            .map(|(_, measurement)| *measurement))
    }

    async fn clear_measurements(&self, user_id: Uuid) -> AppResult<u64> {
        let mut state = self.state.write().await;
        Ok(state
            .measurements
            .remove(&user_id)
            .map_or(0, |by_date| by_date.len() as u64))
    }
}

#[async_trait]
impl ProfileStore for MemoryDatabase {
    async fn create_user(&self, request: NewUser) -> AppResult<UserProfile> {
        let profile = UserProfile::new(request)?;
        let mut state = self.state.write().await;
        if state.users.iter().any(|user| user.name == profile.name) {
            return Err(AppError::already_exists(format!("User '{}'", profile.name)));
        }
        state.users.push(profile.clone());
        Ok(profile)
    }

    async fn get_user(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|user| user.id == user_id).cloned())
    }

    async fn get_user_by_name(&self, name: &str) -> AppResult<Option<UserProfile>> {
        let name = name.trim();
        let state = self.state.read().await;
        Ok(state.users.iter().find(|user| user.name == name).cloned())
    }

    async fn list_users(&self) -> AppResult<Vec<UserProfile>> {
        Ok(self.state.read().await.users.clone())
    }

    async fn update_target(&self, user_id: Uuid, target_weight: f64) -> AppResult<UserProfile> {
        validate_target_weight(target_weight)?;
        let mut state = self.state.write().await;
        let user = state.user_mut(user_id)?;
        user.target_weight = target_weight;
        Ok(user.clone())
    }

    async fn update_trend_window(
        &self,
        user_id: Uuid,
        window: TrendWindow,
    ) -> AppResult<UserProfile> {
        window.validate()?;
        let mut state = self.state.write().await;
        let user = state.user_mut(user_id)?;
        user.trend_window = window;
        Ok(user.clone())
    }
}
