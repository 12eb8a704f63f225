// ABOUTME: Repository traits that decouple services from the SQLite managers
// ABOUTME: Services depend on these traits so tests and alternate stores can plug in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

mod practice_repository;

pub use practice_repository::PracticeSessionRepositoryImpl;

use crate::errors::AppResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use ladder_core::models::{NewPracticeSession, PracticeSession};
use uuid::Uuid;

/// Storage operations for practice sessions, scoped by user
///
/// Implementations must enforce one session per `(user_id, date)` and report a second
/// insert for the same day as `ResourceAlreadyExists`.
#[async_trait]
pub trait PracticeSessionRepository: Send + Sync {
    /// Store a new session
    async fn create(
        &self,
        user_id: Uuid,
        session: &NewPracticeSession,
    ) -> AppResult<PracticeSession>;

    /// Session on a given day
    async fn get_by_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Option<PracticeSession>>;

    /// Replace the session stored at `date`
    async fn update(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        session: &NewPracticeSession,
    ) -> AppResult<PracticeSession>;

    /// Remove the session stored at `date`
    async fn delete(&self, user_id: Uuid, date: NaiveDate) -> AppResult<bool>;

    /// Most recent heavy session with `success = true`
    async fn get_last_successful_heavy_session(
        &self,
        user_id: Uuid,
    ) -> AppResult<Option<PracticeSession>>;

    /// Most recent session of any intensity
    async fn get_last_session(&self, user_id: Uuid) -> AppResult<Option<PracticeSession>>;

    /// Full history ordered by date ascending
    async fn get_all_sessions(&self, user_id: Uuid) -> AppResult<Vec<PracticeSession>>;

    /// Inclusive date range ordered by date ascending
    async fn list_sessions_between(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<PracticeSession>>;
}
