// ABOUTME: SQLite persistence for GravityLog users and measurements
// ABOUTME: Connection setup, schema migrations, and the sqlx-backed store implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! One SQLite database holds the `users` and `measurements` tables. Both
//! store traits from [`crate::database_plugins`] are implemented on
//! [`Database`].

mod measurements;
mod users;

use crate::config::environment::DatabaseUrl;
use crate::errors::{AppError, AppResult};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite, SqlitePool};
use tokio::fs;
use tracing::{debug, info};

/// Database manager for profile and measurement storage
#[derive(Clone, Debug)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Connect to `database_url` and run migrations
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for an unparseable URL and `DatabaseError`
    /// when the connection or a migration fails.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let url = DatabaseUrl::parse_url(database_url)?;
        Self::connect(&url).await
    }

    /// Connect to a parsed database location and run migrations
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` when the connection or a migration fails.
    pub async fn connect(url: &DatabaseUrl) -> AppResult<Self> {
        let pool = match url {
            // Every connection to :memory: opens a separate database, so keep exactly one
            DatabaseUrl::Memory => {
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect("sqlite::memory:")
                    .await?
            }
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).await.map_err(|e| {
                        AppError::database(format!(
                            "cannot create database directory {}",
                            parent.display()
                        ))
                        .with_source(e)
                    })?;
                }
                // Ensure SQLite creates the database file if it doesn't exist
                SqlitePool::connect(&format!("sqlite:{}?mode=rwc", path.display())).await?
            }
        };
        info!(database = %url, "Connected to database");

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a table or index cannot be created.
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_users().await?;
        self.migrate_measurements().await?;
        debug!("Database migrations complete");
        Ok(())
    }
}
