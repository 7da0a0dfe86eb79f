// ABOUTME: Measurement database operations
// ABOUTME: One row per user and date with weight and body composition percentages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Database;
use crate::database_plugins::{prepare_measurement, MeasurementStore, UpsertOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::Measurement;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::debug;
use uuid::Uuid;

impl Database {
    /// Create the measurements table
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub(super) async fn migrate_measurements(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS measurements (
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                date TEXT NOT NULL,
                weight REAL NOT NULL,
                fat REAL NOT NULL,
                water REAL NOT NULL,
                muscle REAL NOT NULL,
                PRIMARY KEY (user_id, date)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn row_to_measurement(row: &SqliteRow) -> AppResult<Measurement> {
        Ok(Measurement {
            date: row.try_get("date")?,
            weight: row.try_get("weight")?,
            fat: row.try_get("fat")?,
            water: row.try_get("water")?,
            muscle: row.try_get("muscle")?,
        })
    }
}

#[async_trait]
impl MeasurementStore for Database {
    async fn load_series(&self, user_id: Uuid) -> AppResult<Vec<Measurement>> {
        let rows = sqlx::query(
            r"
            SELECT date, weight, fat, water, muscle
            FROM measurements
            WHERE user_id = $1
            ORDER BY date ASC
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_measurement).collect()
    }

    async fn upsert(&self, user_id: Uuid, measurement: Measurement) -> AppResult<UpsertOutcome> {
        let measurement = prepare_measurement(measurement)?;
        let user_key = user_id.to_string();
        let mut tx = self.pool.begin().await?;

        let user_exists = sqlx::query("SELECT 1 FROM users WHERE id = $1")
            .bind(&user_key)
            .fetch_optional(&mut *tx)
            .await?
            .is_some();
        if !user_exists {
            return Err(AppError::not_found(format!("User {user_id}")));
        }

        let existing = sqlx::query("SELECT 1 FROM measurements WHERE user_id = $1 AND date = $2")
            .bind(&user_key)
            .bind(measurement.date)
            .fetch_optional(&mut *tx)
            .await?
            .is_some();

        sqlx::query(
            r"
            INSERT INTO measurements (user_id, date, weight, fat, water, muscle)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id, date) DO UPDATE SET
                weight = excluded.weight,
                fat = excluded.fat,
                water = excluded.water,
                muscle = excluded.muscle
            ",
        )
        .bind(&user_key)
        .bind(measurement.date)
        .bind(measurement.weight)
        .bind(measurement.fat)
        .bind(measurement.water)
        .bind(measurement.muscle)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let outcome = if existing {
            UpsertOutcome::Updated
        } else {
            UpsertOutcome::Added
        };
        debug!(%user_id, date = %measurement.date, ?outcome, "Measurement stored");
        Ok(outcome)
    }

    async fn delete(&self, user_id: Uuid, date: NaiveDate) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM measurements WHERE user_id = $1 AND date = $2")
            .bind(user_id.to_string())
            .bind(date)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn latest_on_or_before(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Option<Measurement>> {
        let row = sqlx::query(
            r"
            SELECT date, weight, fat, water, muscle
            FROM measurements
            WHERE user_id = $1 AND date <= $2
            ORDER BY date DESC
            LIMIT 1
            ",
        )
        .bind(user_id.to_string())
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_measurement).transpose()
    }

    async fn clear_measurements(&self, user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM measurements WHERE user_id = $1")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
