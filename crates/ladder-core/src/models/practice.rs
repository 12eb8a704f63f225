// ABOUTME: Practice session records - one logged kettlebell ladder session per user per day
// ABOUTME: Stored PracticeSession plus the NewPracticeSession payload used to create/update
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Intensity, LadderSets};

/// One logged practice session
///
/// Exactly one session exists per `(user_id, date)`. The date carries no time-of-day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeSession {
    /// Store-assigned identifier
    pub id: String,
    /// Owning user
    pub user_id: Uuid,
    /// Calendar day of the session
    pub date: NaiveDate,
    /// Session intensity
    pub intensity: Intensity,
    /// Ladder heights per slot
    pub ladder_sets: LadderSets,
    /// Elapsed minutes, historically rolled with two dice (2..=12)
    pub dice: u8,
    /// Repetitions actually performed, may include manually recorded work
    pub pull_count: u32,
    /// Implement weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Whether the session goal was achieved
    pub success: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// When the user entered the record
    pub entered_at: DateTime<Utc>,
}

/// Payload for creating or replacing a practice session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPracticeSession {
    /// Calendar day of the session
    pub date: NaiveDate,
    /// Session intensity
    pub intensity: Intensity,
    /// Ladder heights per slot
    pub ladder_sets: LadderSets,
    /// Elapsed minutes (2..=12)
    pub dice: u8,
    /// Repetitions actually performed
    pub pull_count: u32,
    /// Implement weight in kilograms
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Whether the session goal was achieved
    #[serde(default = "default_success")]
    pub success: bool,
    /// When the user entered the record, defaults to now
    #[serde(default)]
    pub entered_at: Option<DateTime<Utc>>,
}

const fn default_success() -> bool {
    true
}

impl NewPracticeSession {
    /// Minimal payload with no weight, marked successful
    #[must_use]
    pub const fn new(
        date: NaiveDate,
        intensity: Intensity,
        ladder_sets: LadderSets,
        dice: u8,
        pull_count: u32,
    ) -> Self {
        Self {
            date,
            intensity,
            ladder_sets,
            dice,
            pull_count,
            weight_kg: None,
            success: true,
            entered_at: None,
        }
    }

    /// Set the implement weight
    #[must_use]
    pub fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    /// Set the success flag
    #[must_use]
    pub fn with_success(mut self, success: bool) -> Self {
        self.success = success;
        self
    }
}
