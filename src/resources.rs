// ABOUTME: Shared server resources handed to every route as axum state
// ABOUTME: Owns the configuration, database handle, and practice service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

use std::sync::Arc;

use ladder_intelligence::WeeklyStreakCalculator;

use crate::config::ServerConfig;
use crate::database::repositories::PracticeSessionRepositoryImpl;
use crate::database::Database;
use crate::errors::AppResult;
use crate::services::PracticeService;

/// Resources shared across request handlers
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Database handle
    pub database: Database,
    /// Practice workflow
    pub practice: PracticeService,
}

impl ServerResources {
    /// Open the database described by `config` and wire up services
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated
    pub async fn new(config: ServerConfig) -> AppResult<Self> {
        let database = Database::new(&config.database).await?;
        Ok(Self::from_database(config, database))
    }

    /// Wire services over an already opened database
    #[must_use]
    pub fn from_database(config: ServerConfig, database: Database) -> Self {
        let streaks = WeeklyStreakCalculator::new(config.training.streak_min_sessions_per_week);
        let repository = Arc::new(PracticeSessionRepositoryImpl::new(database.clone()));

        Self {
            config: Arc::new(config),
            database,
            practice: PracticeService::new(repository, streaks),
        }
    }
}
