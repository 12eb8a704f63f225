// ABOUTME: Database operations for kettlebell ladder practice sessions
// ABOUTME: One row per (user, date), with history queries feeding the progression engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

use crate::constants::formats::DATE_FORMAT;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use ladder_core::models::{Intensity, LadderSets, NewPracticeSession, PracticeSession};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

const SESSION_COLUMNS: &str = "id, user_id, date, intensity, \
     ladder_1, ladder_2, ladder_3, ladder_4, ladder_5, \
     dice, pull_count, weight_kg, success, entered_at, created_at, updated_at";

/// Database manager for practice sessions
#[derive(Clone)]
pub struct PracticeSessionManager {
    pool: SqlitePool,
}

impl PracticeSessionManager {
    /// Create a new practice session manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the `practice_sessions` table and its lookup index
    ///
    /// # Errors
    ///
    /// Returns an error if the schema statements fail
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS practice_sessions (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                date TEXT NOT NULL,
                intensity TEXT NOT NULL CHECK (intensity IN ('heavy', 'medium', 'light')),
                ladder_1 INTEGER NOT NULL DEFAULT 0,
                ladder_2 INTEGER NOT NULL DEFAULT 0,
                ladder_3 INTEGER NOT NULL DEFAULT 0,
                ladder_4 INTEGER NOT NULL DEFAULT 0,
                ladder_5 INTEGER NOT NULL DEFAULT 0,
                dice INTEGER NOT NULL,
                pull_count INTEGER NOT NULL DEFAULT 0,
                weight_kg REAL,
                success INTEGER NOT NULL DEFAULT 1,
                entered_at TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                UNIQUE (user_id, date)
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create practice_sessions: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_practice_sessions_user_date \
             ON practice_sessions (user_id, date)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create practice_sessions index: {e}")))?;

        Ok(())
    }

    /// Store a new session for `user_id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` when the user already has a session on that date
    pub async fn create(
        &self,
        user_id: Uuid,
        session: &NewPracticeSession,
    ) -> AppResult<PracticeSession> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let entered_at = session.entered_at.unwrap_or(now);
        let slots = session.ladder_sets.as_array();

        sqlx::query(
            r"
            INSERT INTO practice_sessions (
                id, user_id, date, intensity,
                ladder_1, ladder_2, ladder_3, ladder_4, ladder_5,
                dice, pull_count, weight_kg, success, entered_at, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $15)
            ",
        )
        .bind(&id)
        .bind(user_id.to_string())
        .bind(format_date(session.date))
        .bind(session.intensity.as_str())
        .bind(i64::from(slots[0]))
        .bind(i64::from(slots[1]))
        .bind(i64::from(slots[2]))
        .bind(i64::from(slots[3]))
        .bind(i64::from(slots[4]))
        .bind(i64::from(session.dice))
        .bind(i64::from(session.pull_count))
        .bind(session.weight_kg)
        .bind(session.success)
        .bind(entered_at.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, user_id, session.date, "create"))?;

        Ok(PracticeSession {
            id,
            user_id,
            date: session.date,
            intensity: session.intensity,
            ladder_sets: session.ladder_sets,
            dice: session.dice,
            pull_count: session.pull_count,
            weight_kg: session.weight_kg,
            success: session.success,
            created_at: now,
            updated_at: now,
            entered_at,
        })
    }

    /// Get the session a user logged on `date`
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get_by_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Option<PracticeSession>> {
        let row = sqlx::query(&format!(
            "SELECT {SESSION_COLUMNS} FROM practice_sessions WHERE user_id = $1 AND date = $2"
        ))
        .bind(user_id.to_string())
        .bind(format_date(date))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get practice session: {e}")))?;

        row.map(|r| row_to_practice_session(&r)).transpose()
    }

    /// Replace the session stored at `date`; the payload may move it to a new date
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when nothing is stored at `date`, and
    /// `ResourceAlreadyExists` when the new date is already taken
    pub async fn update(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        session: &NewPracticeSession,
    ) -> AppResult<PracticeSession> {
        let not_found = || {
            AppError::not_found(format!("Practice session on {}", format_date(date)))
                .with_user_id(user_id)
                .with_resource_id(format_date(date))
        };
        let slots = session.ladder_sets.as_array();

        let result = sqlx::query(
            r"
            UPDATE practice_sessions SET
                date = $1, intensity = $2,
                ladder_1 = $3, ladder_2 = $4, ladder_3 = $5, ladder_4 = $6, ladder_5 = $7,
                dice = $8, pull_count = $9, weight_kg = $10, success = $11,
                entered_at = COALESCE($12, entered_at), updated_at = $13
            WHERE user_id = $14 AND date = $15
            ",
        )
        .bind(format_date(session.date))
        .bind(session.intensity.as_str())
        .bind(i64::from(slots[0]))
        .bind(i64::from(slots[1]))
        .bind(i64::from(slots[2]))
        .bind(i64::from(slots[3]))
        .bind(i64::from(slots[4]))
        .bind(i64::from(session.dice))
        .bind(i64::from(session.pull_count))
        .bind(session.weight_kg)
        .bind(session.success)
        .bind(session.entered_at.map(|at| at.to_rfc3339()))
        .bind(Utc::now().to_rfc3339())
        .bind(user_id.to_string())
        .bind(format_date(date))
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, user_id, session.date, "update"))?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        // Read back what was written; a concurrent delete surfaces as not found
        self.get_by_date(user_id, session.date)
            .await?
            .ok_or_else(not_found)
    }

    /// Delete the session at `date`; returns whether a row was removed
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn delete(&self, user_id: Uuid, date: NaiveDate) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM practice_sessions WHERE user_id = $1 AND date = $2")
            .bind(user_id.to_string())
            .bind(format_date(date))
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete practice session: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// Most recent heavy session marked successful
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get_last_successful_heavy_session(
        &self,
        user_id: Uuid,
    ) -> AppResult<Option<PracticeSession>> {
        let row = sqlx::query(&format!(
            "SELECT {SESSION_COLUMNS} FROM practice_sessions \
             WHERE user_id = $1 AND intensity = $2 AND success = 1 \
             ORDER BY date DESC LIMIT 1"
        ))
        .bind(user_id.to_string())
        .bind(Intensity::Heavy.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::database(format!("Failed to get last successful heavy session: {e}"))
        })?;

        row.map(|r| row_to_practice_session(&r)).transpose()
    }

    /// Most recent session of any intensity
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get_last_session(&self, user_id: Uuid) -> AppResult<Option<PracticeSession>> {
        let row = sqlx::query(&format!(
            "SELECT {SESSION_COLUMNS} FROM practice_sessions \
             WHERE user_id = $1 ORDER BY date DESC LIMIT 1"
        ))
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get last practice session: {e}")))?;

        row.map(|r| row_to_practice_session(&r)).transpose()
    }

    /// Full history, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get_all_sessions(&self, user_id: Uuid) -> AppResult<Vec<PracticeSession>> {
        let rows = sqlx::query(&format!(
            "SELECT {SESSION_COLUMNS} FROM practice_sessions \
             WHERE user_id = $1 ORDER BY date ASC"
        ))
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list practice sessions: {e}")))?;

        rows.iter().map(row_to_practice_session).collect()
    }

    /// Sessions with `from <= date <= to`, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list_sessions_between(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<PracticeSession>> {
        let rows = sqlx::query(&format!(
            "SELECT {SESSION_COLUMNS} FROM practice_sessions \
             WHERE user_id = $1 AND date >= $2 AND date <= $3 ORDER BY date ASC"
        ))
        .bind(user_id.to_string())
        .bind(format_date(from))
        .bind(format_date(to))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list practice sessions: {e}")))?;

        rows.iter().map(row_to_practice_session).collect()
    }

    /// Number of sessions a user has logged
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn count_sessions(&self, user_id: Uuid) -> AppResult<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM practice_sessions WHERE user_id = $1")
                .bind(user_id.to_string())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::database(format!("Failed to count practice sessions: {e}"))
                })?;

        Ok(u64::try_from(count).unwrap_or(0))
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn write_error(error: sqlx::Error, user_id: Uuid, date: NaiveDate, operation: &str) -> AppError {
    let unique_violation = error
        .as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation());

    if unique_violation {
        AppError::already_exists(format!("Practice session on {}", format_date(date)))
            .with_user_id(user_id)
            .with_resource_id(format_date(date))
    } else {
        AppError::database(format!("Failed to {operation} practice session: {error}"))
            .with_user_id(user_id)
    }
}

fn parse_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)
        .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
        .with_timezone(&Utc))
}

fn row_to_practice_session(row: &SqliteRow) -> AppResult<PracticeSession> {
    let user_id_str: String = row.get("user_id");
    let date_str: String = row.get("date");
    let intensity_str: String = row.get("intensity");
    let dice: i64 = row.get("dice");
    let pull_count: i64 = row.get("pull_count");
    let entered_at_str: String = row.get("entered_at");
    let created_at_str: String = row.get("created_at");
    let updated_at_str: String = row.get("updated_at");

    let ladder_sets = LadderSets::from_clamped([
        row.get("ladder_1"),
        row.get("ladder_2"),
        row.get("ladder_3"),
        row.get("ladder_4"),
        row.get("ladder_5"),
    ]);

    Ok(PracticeSession {
        id: row.get("id"),
        user_id: Uuid::parse_str(&user_id_str)
            .map_err(|e| AppError::internal(format!("Invalid user id: {e}")))?,
        date: NaiveDate::parse_from_str(&date_str, DATE_FORMAT)
            .map_err(|e| AppError::internal(format!("Invalid session date: {e}")))?,
        intensity: intensity_str.parse()?,
        ladder_sets,
        dice: u8::try_from(dice.max(0)).unwrap_or(u8::MAX),
        pull_count: u32::try_from(pull_count.max(0)).unwrap_or(u32::MAX),
        weight_kg: row.get("weight_kg"),
        success: row.get("success"),
        created_at: parse_timestamp(&created_at_str)?,
        updated_at: parse_timestamp(&updated_at_str)?,
        entered_at: parse_timestamp(&entered_at_str)?,
    })
}
