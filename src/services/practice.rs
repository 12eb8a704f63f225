// ABOUTME: Practice session workflow joining the session store with the progression engine
// ABOUTME: Suggestions, streak and volume statistics, and validated session writes per user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

use std::sync::Arc;

use chrono::NaiveDate;
use ladder_core::constants::formats::{MAX_DATE_YEAR, MIN_DATE_YEAR};
use ladder_core::models::{Intensity, LadderSets, NewPracticeSession, PracticeSession};
use ladder_intelligence::{
    plan_ladder_configuration, session_pushes, suggest_next_intensity, validate_session,
    ProgressionBasis, VolumeSummary, WeeklyStreakCalculator,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::database::repositories::PracticeSessionRepository;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;

/// Suggested configuration for the next session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSuggestion {
    /// Intensity the suggestion is for
    pub intensity: Intensity,
    /// Intensity the cycle would pick next, regardless of what was requested
    pub suggested_intensity: Intensity,
    /// Slot heights to run
    pub ladder_sets: LadderSets,
    /// How the configuration was derived
    pub basis: ProgressionBasis,
    /// Date of the heavy session the suggestion builds on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub based_on_date: Option<NaiveDate>,
    /// Push count of the suggested configuration
    pub total_pushes: u64,
}

/// Aggregate statistics over a user's full history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeStats {
    /// Owning user
    pub user_id: Uuid,
    /// Sessions logged
    pub sessions: usize,
    /// Sessions marked successful
    pub successful_sessions: usize,
    /// Sum of `pull_count` over successful sessions
    pub total_successful_pulls: u64,
    /// Sum of ladder pushes over every session
    pub total_ladder_pushes: u64,
    /// Consecutive qualifying weeks ending this week
    pub current_weekly_streak: u32,
    /// Longest run of qualifying weeks
    pub longest_weekly_streak: u32,
    /// Most recent session date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_session_date: Option<NaiveDate>,
}

/// Per-user practice workflow over a session repository
#[derive(Clone)]
pub struct PracticeService {
    repository: Arc<dyn PracticeSessionRepository>,
    streaks: WeeklyStreakCalculator,
}

impl PracticeService {
    /// Create a service over `repository` using `streaks` for weekly streak rules
    #[must_use]
    pub fn new(
        repository: Arc<dyn PracticeSessionRepository>,
        streaks: WeeklyStreakCalculator,
    ) -> Self {
        Self {
            repository,
            streaks,
        }
    }

    /// Intensity the cycle suggests after the user's latest session
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read
    pub async fn suggest_next_intensity(&self, user_id: Uuid) -> AppResult<Intensity> {
        let last = self.repository.get_last_session(user_id).await?;
        Ok(suggest_next_intensity(last.as_ref()))
    }

    /// Ladder configuration for the next session at `intensity`
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read
    pub async fn compute_ladder_configuration(
        &self,
        user_id: Uuid,
        intensity: Intensity,
    ) -> AppResult<LadderSets> {
        Ok(self
            .suggest_next_session(user_id, Some(intensity))
            .await?
            .ladder_sets)
    }

    /// Full suggestion for the next session
    ///
    /// Without a requested intensity the cycle's suggestion is used.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read
    #[instrument(skip(self), fields(user.id = %user_id))]
    pub async fn suggest_next_session(
        &self,
        user_id: Uuid,
        requested: Option<Intensity>,
    ) -> AppResult<SessionSuggestion> {
        let suggested_intensity = self.suggest_next_intensity(user_id).await?;
        let intensity = requested.unwrap_or(suggested_intensity);

        let last_heavy = self
            .repository
            .get_last_successful_heavy_session(user_id)
            .await?;
        let plan = plan_ladder_configuration(last_heavy.as_ref(), intensity);
        AppLogger::log_suggestion(user_id, intensity, &plan.ladder_sets);

        Ok(SessionSuggestion {
            intensity,
            suggested_intensity,
            ladder_sets: plan.ladder_sets,
            basis: plan.basis,
            based_on_date: last_heavy.map(|s| s.date),
            total_pushes: session_pushes(&plan.ladder_sets),
        })
    }

    /// Consecutive qualifying weeks ending with the week containing `today`
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read
    pub async fn current_weekly_streak(&self, user_id: Uuid, today: NaiveDate) -> AppResult<u32> {
        let sessions = self.repository.get_all_sessions(user_id).await?;
        Ok(self.streaks.current_streak(&sessions, today))
    }

    /// Longest run of qualifying weeks
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read
    pub async fn longest_weekly_streak(&self, user_id: Uuid) -> AppResult<u32> {
        let sessions = self.repository.get_all_sessions(user_id).await?;
        Ok(self.streaks.longest_streak(&sessions))
    }

    /// Sum of `pull_count` over successful sessions
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read
    pub async fn total_successful_pulls(&self, user_id: Uuid) -> AppResult<u64> {
        let sessions = self.repository.get_all_sessions(user_id).await?;
        Ok(ladder_intelligence::total_successful_pulls(&sessions))
    }

    /// Sum of ladder pushes over every session
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read
    pub async fn total_ladder_pushes(&self, user_id: Uuid) -> AppResult<u64> {
        let sessions = self.repository.get_all_sessions(user_id).await?;
        Ok(ladder_intelligence::total_ladder_pushes(&sessions))
    }

    /// All statistics from a single history read
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read
    pub async fn practice_stats(&self, user_id: Uuid, today: NaiveDate) -> AppResult<PracticeStats> {
        let sessions = self.repository.get_all_sessions(user_id).await?;
        let volume = VolumeSummary::from_sessions(&sessions);

        Ok(PracticeStats {
            user_id,
            sessions: volume.sessions,
            successful_sessions: volume.successful_sessions,
            total_successful_pulls: volume.total_successful_pulls,
            total_ladder_pushes: volume.total_ladder_pushes,
            current_weekly_streak: self.streaks.current_streak(&sessions, today),
            longest_weekly_streak: self.streaks.longest_streak(&sessions),
            last_session_date: sessions.iter().map(|s| s.date).max(),
        })
    }

    /// Validate and store a new session
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed payload and `ResourceAlreadyExists`
    /// when the user already logged a session that day
    pub async fn log_session(
        &self,
        user_id: Uuid,
        session: NewPracticeSession,
    ) -> AppResult<PracticeSession> {
        Self::validate(user_id, &session)?;
        let stored = self.repository.create(user_id, &session).await?;
        AppLogger::log_session_recorded(
            user_id,
            &stored.date.to_string(),
            stored.intensity,
            &stored.ladder_sets,
            stored.success,
        );
        Ok(stored)
    }

    /// Validate and replace the session stored at `date`
    ///
    /// # Errors
    ///
    /// Returns a validation error, `ResourceNotFound` when nothing is stored at `date`,
    /// or `ResourceAlreadyExists` when the payload moves onto an occupied date
    pub async fn update_session(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        session: NewPracticeSession,
    ) -> AppResult<PracticeSession> {
        Self::validate(user_id, &session)?;
        self.repository.update(user_id, date, &session).await
    }

    /// Session stored at `date`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the user has no session that day
    pub async fn get_session(&self, user_id: Uuid, date: NaiveDate) -> AppResult<PracticeSession> {
        self.repository
            .get_by_date(user_id, date)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Practice session on {date}")).with_user_id(user_id)
            })
    }

    /// Delete the session stored at `date`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the user has no session that day
    pub async fn delete_session(&self, user_id: Uuid, date: NaiveDate) -> AppResult<()> {
        if self.repository.delete(user_id, date).await? {
            debug!(user.id = %user_id, %date, "Practice session deleted");
            Ok(())
        } else {
            Err(AppError::not_found(format!("Practice session on {date}")).with_user_id(user_id))
        }
    }

    /// History ordered by date, optionally bounded on either side (inclusive)
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `from` is after `to`
    pub async fn list_sessions(
        &self,
        user_id: Uuid,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> AppResult<Vec<PracticeSession>> {
        match (from, to) {
            (None, None) => self.repository.get_all_sessions(user_id).await,
            (from, to) => {
                let from = match from {
                    Some(date) => date,
                    None => calendar_bound(MIN_DATE_YEAR, 1, 1)?,
                };
                let to = match to {
                    Some(date) => date,
                    None => calendar_bound(MAX_DATE_YEAR, 12, 31)?,
                };
                if from > to {
                    return Err(AppError::invalid_input(format!(
                        "Range start {from} is after range end {to}"
                    ))
                    .with_details(json!({ "from": from, "to": to })));
                }
                self.repository
                    .list_sessions_between(user_id, from, to)
                    .await
            }
        }
    }

    fn validate(user_id: Uuid, session: &NewPracticeSession) -> AppResult<()> {
        validate_session(session).map_err(|e| {
            AppLogger::log_session_rejected(user_id, &session.date.to_string(), &e.message);
            e.with_user_id(user_id)
        })
    }
}

/// Open range ends stay inside four-digit years so stored `YYYY-MM-DD` text compares correctly
fn calendar_bound(year: i32, month: u32, day: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| AppError::internal(format!("Invalid range bound {year}-{month}-{day}")))
}
