// ABOUTME: User profile database operations
// ABOUTME: Handles user creation, lookup by id or name, target weight, and trend window updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Database;
use crate::database_plugins::ProfileStore;
use crate::errors::{AppError, AppResult};
use crate::models::{validate_target_weight, NewUser, TrendWindow, UserProfile};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Error as SqlxError, Row};
use tracing::info;
use uuid::Uuid;

const USER_COLUMNS: &str =
    "id, name, height_cm, target_weight, trend_how, trend_start, trend_weeks, created_at";

impl Database {
    /// Create the users table
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub(super) async fn migrate_users(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                name TEXT UNIQUE NOT NULL,
                height_cm INTEGER NOT NULL,
                target_weight REAL NOT NULL,
                trend_how TEXT NOT NULL DEFAULT 'date_range',
                trend_start TEXT,
                trend_weeks INTEGER,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_name ON users(name)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Internal implementation for getting a user
    async fn get_user_impl(&self, field: &str, value: &str) -> AppResult<Option<UserProfile>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE {field} = $1");
        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn require_user(&self, user_id: Uuid) -> AppResult<UserProfile> {
        self.get_user_impl("id", &user_id.to_string())
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id}")))
    }

    /// Convert a database row to a `UserProfile`
    fn row_to_user(row: &SqliteRow) -> AppResult<UserProfile> {
        let id: String = row.try_get("id")?;
        let id = Uuid::parse_str(&id)
            .map_err(|e| AppError::database(format!("invalid user id '{id}'")).with_source(e))?;
        let height: i64 = row.try_get("height_cm")?;
        let height_cm = u32::try_from(height).map_err(|e| {
            AppError::database(format!("invalid height {height} for user {id}")).with_source(e)
        })?;
        let trend_how: String = row.try_get("trend_how")?;
        let trend_start: Option<NaiveDate> = row.try_get("trend_start")?;
        let trend_weeks: Option<i64> = row.try_get("trend_weeks")?;
        let trend_window = TrendWindow::from_parts(
            &trend_how,
            trend_start,
            trend_weeks.and_then(|weeks| u32::try_from(weeks).ok()),
        )?;
        let created_at: DateTime<Utc> = row.try_get("created_at")?;

        Ok(UserProfile {
            id,
            name: row.try_get("name")?,
            height_cm,
            target_weight: row.try_get("target_weight")?,
            trend_window,
            created_at,
        })
    }
}

#[async_trait]
impl ProfileStore for Database {
    async fn create_user(&self, request: NewUser) -> AppResult<UserProfile> {
        let profile = UserProfile::new(request)?;
        if self.get_user_by_name(&profile.name).await?.is_some() {
            return Err(AppError::already_exists(format!("User '{}'", profile.name)));
        }

        sqlx::query(
            r"
            INSERT INTO users (
                id, name, height_cm, target_weight, trend_how, trend_start, trend_weeks, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(profile.id.to_string())
        .bind(&profile.name)
        .bind(i64::from(profile.height_cm))
        .bind(profile.target_weight)
        .bind(profile.trend_window.how())
        .bind(profile.trend_window.start())
        .bind(profile.trend_window.weeks().map(i64::from))
        .bind(profile.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            SqlxError::Database(ref db) if db.is_unique_violation() => {
                AppError::already_exists(format!("User '{}'", profile.name))
            }
            other => AppError::from(other),
        })?;

        info!(user_id = %profile.id, name = %profile.name, "Created user");
        Ok(profile)
    }

    async fn get_user(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        self.get_user_impl("id", &user_id.to_string()).await
    }

    async fn get_user_by_name(&self, name: &str) -> AppResult<Option<UserProfile>> {
        self.get_user_impl("name", name.trim()).await
    }

    async fn list_users(&self) -> AppResult<Vec<UserProfile>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at, rowid");
        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        rows.iter().map(Self::row_to_user).collect()
    }

    async fn update_target(&self, user_id: Uuid, target_weight: f64) -> AppResult<UserProfile> {
        validate_target_weight(target_weight)?;
        let result = sqlx::query("UPDATE users SET target_weight = $1 WHERE id = $2")
            .bind(target_weight)
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User {user_id}")));
        }
        self.require_user(user_id).await
    }

    async fn update_trend_window(
        &self,
        user_id: Uuid,
        window: TrendWindow,
    ) -> AppResult<UserProfile> {
        window.validate()?;
        let result = sqlx::query(
            "UPDATE users SET trend_how = $1, trend_start = $2, trend_weeks = $3 WHERE id = $4",
        )
        .bind(window.how())
        .bind(window.start())
        .bind(window.weeks().map(i64::from))
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User {user_id}")));
        }
        self.require_user(user_id).await
    }
}
