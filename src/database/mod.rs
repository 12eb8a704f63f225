// ABOUTME: SQLite connection pool and schema management for the ladder tracker
// ABOUTME: Opens the configured database, runs migrations, and hands out domain managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

//! # Database Management
//!
//! Practice sessions live in a single `SQLite` table keyed by `(user_id, date)`.
//! In-memory databases are pinned to one connection since every `SQLite` connection
//! to `:memory:` opens its own empty database.

mod practice;

/// Repository traits over the managers
pub mod repositories;

pub use practice::PracticeSessionManager;

use crate::config::{DatabaseConfig, DatabaseUrl};
use crate::errors::{AppError, AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Database handle shared across the server
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the configured database and run migrations when enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        let options = match &config.url {
            DatabaseUrl::Memory => SqliteConnectOptions::from_str("sqlite::memory:"),
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        AppError::database(format!(
                            "Failed to create database directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
                Ok(SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true))
            }
        }
        .map_err(|e| AppError::database(format!("Invalid database options: {e}")))?;

        let mut pool_options = SqlitePoolOptions::new()
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs));
        let max_connections = if config.url.is_memory() {
            // Closing the only connection would drop the whole database
            pool_options = pool_options.idle_timeout(None).max_lifetime(None);
            1
        } else {
            config.max_connections
        };

        let pool = pool_options
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to {}: {e}", config.url)))?;

        info!(url = %config.url, max_connections, "Database pool ready");

        let db = Self { pool };
        if config.auto_migrate {
            db.migrate().await?;
        }
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any schema statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.practice().migrate().await?;
        debug!("Database migrations complete");
        Ok(())
    }

    /// Manager for practice session rows
    #[must_use]
    pub fn practice(&self) -> PracticeSessionManager {
        PracticeSessionManager::new(self.pool.clone())
    }

    /// Round-trip a trivial query to confirm the pool is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the database does not answer
    pub async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Database health check failed: {e}")))?;
        Ok(())
    }
}
