// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Loads server, database, and training settings from environment variables only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

//! Environment-based configuration management

use super::database::{env_var_or, DatabaseConfig};
use crate::constants::{ports, streaks};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational output
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
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
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
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Training program settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Distinct session days a week needs to count toward a streak
    pub streak_min_sessions_per_week: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            streak_min_sessions_per_week: streaks::MIN_SESSIONS_PER_WEEK,
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// HTTP listen host
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Database settings
    pub database: DatabaseConfig,
    /// Training program settings
    pub training: TrainingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: ports::DEFAULT_HTTP_PORT,
            host: "127.0.0.1".to_owned(),
            environment: Environment::default(),
            log_level: LogLevel::default(),
            database: DatabaseConfig::default(),
            training: TrainingConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Configuration for tests: in-memory database, testing environment
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            environment: Environment::Testing,
            database: DatabaseConfig::in_memory(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any variable fails to parse or the result fails validation
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_var_or("HTTP_PORT", &ports::DEFAULT_HTTP_PORT.to_string())
                .parse()
                .map_err(|e| AppError::config(format!("Invalid HTTP_PORT value: {e}")))?,
            host: env_var_or("HOST", "127.0.0.1"),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or("LOG_LEVEL", "info")),
            database: DatabaseConfig::from_env()?,
            training: TrainingConfig {
                streak_min_sessions_per_week: env_var_or(
                    "STREAK_MIN_SESSIONS",
                    &streaks::MIN_SESSIONS_PER_WEEK.to_string(),
                )
                .parse()
                .map_err(|e| AppError::config(format!("Invalid STREAK_MIN_SESSIONS value: {e}")))?,
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a zero port, an empty pool, or a zero streak threshold
    pub fn validate(&self) -> AppResult<()> {
        if self.http_port == 0 {
            return Err(invalid_config("HTTP_PORT must be greater than 0"));
        }
        if self.database.max_connections == 0 {
            return Err(invalid_config(
                "DATABASE_MAX_CONNECTIONS must be greater than 0",
            ));
        }
        if self.training.streak_min_sessions_per_week == 0 {
            return Err(invalid_config("STREAK_MIN_SESSIONS must be greater than 0"));
        }
        Ok(())
    }

    /// Socket address string the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Kettlebell Ladder Configuration:\n\
             - Environment: {}\n\
             - HTTP: {}\n\
             - Log Level: {}\n\
             - Database: {}\n\
             - Max Connections: {}\n\
             - Auto Migrate: {}\n\
             - Streak Threshold: {} sessions/week",
            self.environment,
            self.bind_address(),
            self.log_level,
            if self.database.url.is_memory() {
                "SQLite (in-memory)"
            } else {
                "SQLite"
            },
            self.database.max_connections,
            self.database.auto_migrate,
            self.training.streak_min_sessions_per_week,
        )
    }
}

fn invalid_config(message: &str) -> AppError {
    AppError::new(crate::errors::ErrorCode::ConfigInvalid, message)
}
