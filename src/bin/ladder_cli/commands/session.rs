// ABOUTME: Session commands for ladder-cli - suggest, log, list, and delete
// ABOUTME: Thin wrappers over PracticeService that print results for the terminal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

use chrono::{NaiveDate, Utc};
use kettlebell_ladder::{
    errors::AppResult,
    intelligence::normalize_session_date,
    models::{Intensity, LadderSets, NewPracticeSession},
    services::PracticeService,
};
use tracing::info;
use uuid::Uuid;

use super::roll::roll_dice;
use crate::helpers::display::{display_session, display_session_table, display_suggestion};

type Result<T> = AppResult<T>;

/// Minutes recorded when neither `--dice` nor `--roll` is given
const DEFAULT_DICE: u8 = 7;

/// Arguments of the `log` command
pub struct LogEntry {
    pub date: Option<NaiveDate>,
    pub intensity: Intensity,
    pub ladder: LadderSets,
    pub dice: Option<u8>,
    pub roll: bool,
    pub pulls: u32,
    pub weight: Option<f64>,
    pub success: bool,
}

/// Print the suggestion for the next session
pub async fn suggest(
    service: &PracticeService,
    user_id: Uuid,
    intensity: Option<Intensity>,
) -> Result<()> {
    let suggestion = service.suggest_next_session(user_id, intensity).await?;
    display_suggestion(&suggestion);
    Ok(())
}

/// Validate and store a session
pub async fn log(service: &PracticeService, user_id: Uuid, entry: LogEntry) -> Result<()> {
    let dice = match (entry.dice, entry.roll) {
        (Some(dice), _) => dice,
        (None, true) => {
            let rolled = roll_dice(&mut rand::thread_rng());
            println!("Rolled {rolled} minutes");
            rolled
        }
        (None, false) => DEFAULT_DICE,
    };

    let date = entry.date.unwrap_or_else(|| normalize_session_date(Utc::now()));
    let mut session = NewPracticeSession::new(date, entry.intensity, entry.ladder, dice, entry.pulls)
        .with_success(entry.success);
    if let Some(weight) = entry.weight {
        session = session.with_weight(weight);
    }

    let stored = service.log_session(user_id, session).await?;
    info!(session.id = %stored.id, "Session stored");

    println!("\nSession logged");
    display_session(&stored);
    Ok(())
}

/// Print sessions, oldest first
pub async fn list(
    service: &PracticeService,
    user_id: Uuid,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<()> {
    let sessions = service.list_sessions(user_id, from, to).await?;
    if sessions.is_empty() {
        println!("No sessions logged yet.");
        return Ok(());
    }
    display_session_table(&sessions);
    Ok(())
}

/// Delete the session on `date`
pub async fn delete(service: &PracticeService, user_id: Uuid, date: NaiveDate) -> Result<()> {
    service.delete_session(user_id, date).await?;
    println!("Deleted session on {date}");
    Ok(())
}
