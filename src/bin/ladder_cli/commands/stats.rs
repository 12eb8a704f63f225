// ABOUTME: Statistics command for ladder-cli
// ABOUTME: Prints weekly streaks and volume totals computed from the full history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

use chrono::{NaiveDate, Utc};
use kettlebell_ladder::{
    errors::AppResult, intelligence::normalize_session_date, services::PracticeService,
};
use uuid::Uuid;

use crate::helpers::display::display_stats;

/// Print statistics as of `today` (defaults to the current UTC day)
pub async fn show(
    service: &PracticeService,
    user_id: Uuid,
    today: Option<NaiveDate>,
) -> AppResult<()> {
    let today = today.unwrap_or_else(|| normalize_session_date(Utc::now()));
    let stats = service.practice_stats(user_id, today).await?;
    display_stats(&stats, today);
    Ok(())
}
