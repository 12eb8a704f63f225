// ABOUTME: SQLite-backed implementation of the practice session repository
// ABOUTME: Delegates each call to PracticeSessionManager on the shared pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

use super::PracticeSessionRepository;
use crate::database::{Database, PracticeSessionManager};
use crate::errors::AppResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use ladder_core::models::{NewPracticeSession, PracticeSession};
use uuid::Uuid;

/// `SQLite` implementation of `PracticeSessionRepository`
pub struct PracticeSessionRepositoryImpl {
    db: Database,
}

impl PracticeSessionRepositoryImpl {
    /// Create a new `PracticeSessionRepository` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    fn manager(&self) -> PracticeSessionManager {
        self.db.practice()
    }
}

#[async_trait]
impl PracticeSessionRepository for PracticeSessionRepositoryImpl {
    async fn create(
        &self,
        user_id: Uuid,
        session: &NewPracticeSession,
    ) -> AppResult<PracticeSession> {
        self.manager().create(user_id, session).await
    }

    async fn get_by_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Option<PracticeSession>> {
        self.manager().get_by_date(user_id, date).await
    }

    async fn update(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        session: &NewPracticeSession,
    ) -> AppResult<PracticeSession> {
        self.manager().update(user_id, date, session).await
    }

    async fn delete(&self, user_id: Uuid, date: NaiveDate) -> AppResult<bool> {
        self.manager().delete(user_id, date).await
    }

    async fn get_last_successful_heavy_session(
        &self,
        user_id: Uuid,
    ) -> AppResult<Option<PracticeSession>> {
        self.manager()
            .get_last_successful_heavy_session(user_id)
            .await
    }

    async fn get_last_session(&self, user_id: Uuid) -> AppResult<Option<PracticeSession>> {
        self.manager().get_last_session(user_id).await
    }

    async fn get_all_sessions(&self, user_id: Uuid) -> AppResult<Vec<PracticeSession>> {
        self.manager().get_all_sessions(user_id).await
    }

    async fn list_sessions_between(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<PracticeSession>> {
        self.manager()
            .list_sessions_between(user_id, from, to)
            .await
    }
}
