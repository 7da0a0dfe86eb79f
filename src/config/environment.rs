// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses log level, deployment mode, database location, and trend tuning from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! There is no configuration file; every setting comes from the process
//! environment with a typed fallback.

use crate::constants::{env_vars, storage};
use crate::errors::{AppError, AppResult};
use gravity_intelligence::TrendConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{info, Level};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        };
        f.write_str(name)
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// SQLite database file
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory SQLite (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// Accepts `sqlite:<path>`, `sqlite::memory:` and bare file paths.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for an empty string or a non-SQLite scheme.
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AppError::config("database URL must not be empty"));
        }
        if let Some(rest) = trimmed.strip_prefix("sqlite:") {
            let path = rest.split('?').next().unwrap_or(rest);
            let path = path.strip_prefix("//").unwrap_or(path);
            return match path {
                ":memory:" | "" => Ok(Self::Memory),
                file => Ok(Self::SQLite {
                    path: PathBuf::from(file),
                }),
            };
        }
        if trimmed.contains("://") {
            return Err(AppError::config(format!(
                "unsupported database URL '{trimmed}': only SQLite is supported"
            )));
        }
        Ok(Self::SQLite {
            path: PathBuf::from(trimmed),
        })
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".into(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: default_database_path(),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_connection_string())
    }
}

/// Default database file: `<platform data dir>/gravitylog/gravity.db`, or
/// `./data/gravity.db` when the platform reports no data directory
#[must_use]
pub fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .map_or_else(
            || PathBuf::from(storage::FALLBACK_DATA_DIR),
            |dir| dir.join(storage::DATA_DIR_NAME),
        )
        .join(storage::DATABASE_FILE)
}

/// Host configuration assembled from the environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Where measurements and profiles are stored
    pub database_url: DatabaseUrl,
    /// Trend projection tuning
    pub trend: TrendConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when `DATABASE_URL` or a `GRAVITY_TREND_*`
    /// variable cannot be parsed.
    pub fn from_env() -> AppResult<Self> {
        let database_url = match env::var(env_vars::DATABASE_URL) {
            Ok(url) => DatabaseUrl::parse_url(&url)?,
            Err(_) => DatabaseUrl::default(),
        };
        let trend = TrendConfig::from_env()
            .map_err(|e| AppError::config(format!("trend configuration: {e}")).with_source(e))?;

        let config = Self {
            log_level: LogLevel::from_str_or_default(
                &env::var(env_vars::RUST_LOG).unwrap_or_default(),
            ),
            environment: Environment::from_str_or_default(
                &env::var(env_vars::ENVIRONMENT).unwrap_or_default(),
            ),
            database_url,
            trend,
        };
        info!(
            environment = %config.environment,
            database = %config.database_url,
            "Configuration loaded from environment"
        );
        Ok(config)
    }

    /// Replace the database location with a command-line override
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when the override cannot be parsed.
    pub fn with_database_override(mut self, database_url: Option<&str>) -> AppResult<Self> {
        if let Some(url) = database_url {
            self.database_url = DatabaseUrl::parse_url(url)?;
        }
        Ok(self)
    }

    /// One-line summary for logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} database={} away_horizon_days={} max_horizon_weeks={}",
            self.environment,
            self.database_url,
            self.trend.away_horizon_days,
            self.trend.max_horizon_weeks
        )
    }
}
