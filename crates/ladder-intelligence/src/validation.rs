// ABOUTME: Practice session validation applied before a session is stored
// ABOUTME: Prefix-active ladders, dice range, sane weight, and date-only normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use ladder_core::constants::dice::{DICE_MAX, DICE_MIN};
use ladder_core::constants::formats::{MAX_DATE_YEAR, MIN_DATE_YEAR};
use ladder_core::errors::{AppError, AppResult};
use ladder_core::models::NewPracticeSession;
use serde_json::json;

/// Calendar day of a timestamp; time-of-day is discarded
#[must_use]
pub fn normalize_session_date(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.date_naive()
}

/// Check a session payload before it reaches the store
///
/// Non-uniform active ladders are accepted: manual entries may mix heights.
///
/// # Errors
///
/// Returns `InvalidInput` when the ladder configuration is not prefix-active, and
/// `ValueOutOfRange` when the date, dice, or weight fall outside their ranges.
pub fn validate_session(session: &NewPracticeSession) -> AppResult<()> {
    if !(MIN_DATE_YEAR..=MAX_DATE_YEAR).contains(&session.date.year()) {
        return Err(AppError::out_of_range(format!(
            "Session date {} must fall in years {MIN_DATE_YEAR} to {MAX_DATE_YEAR}",
            session.date
        ))
        .with_details(json!({ "field": "date", "value": session.date.to_string() })));
    }

    if let Some(slot) = session.ladder_sets.first_gap() {
        return Err(AppError::invalid_input(format!(
            "Ladder {slot} is active but ladder {} is not",
            slot - 1
        ))
        .with_details(json!({
            "field": "ladder_sets",
            "slot": slot,
            "ladder_sets": session.ladder_sets.as_array(),
        })));
    }

    if !(DICE_MIN..=DICE_MAX).contains(&session.dice) {
        return Err(AppError::out_of_range(format!(
            "Dice value {} must be between {DICE_MIN} and {DICE_MAX}",
            session.dice
        ))
        .with_details(json!({ "field": "dice", "value": session.dice })));
    }

    if let Some(weight) = session.weight_kg {
        if !weight.is_finite() || weight < 0.0 {
            return Err(AppError::out_of_range(format!(
                "Weight {weight} kg must be a non-negative number"
            ))
            .with_details(json!({ "field": "weight_kg" })));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ladder_core::errors::ErrorCode;
    use ladder_core::models::{Intensity, LadderSets};

    fn session_on(date: NaiveDate) -> NewPracticeSession {
        NewPracticeSession::new(date, Intensity::Heavy, LadderSets::new([3, 3, 3, 0, 0]), 8, 40)
    }

    #[test]
    fn test_normalize_drops_time_of_day() {
        let midnight = Utc.with_ymd_and_hms(2025, 3, 3, 0, 0, 0).unwrap();
        let late_evening = Utc.with_ymd_and_hms(2025, 3, 3, 23, 59, 59).unwrap();

        let day = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        assert_eq!(normalize_session_date(midnight), day);
        assert_eq!(normalize_session_date(late_evening), day);
    }

    #[test]
    fn test_accepts_dates_at_year_bounds() {
        for (y, m, d) in [(1, 1, 1), (2025, 3, 3), (9999, 12, 31)] {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            assert!(validate_session(&session_on(date)).is_ok(), "{date} rejected");
        }
    }

    #[test]
    fn test_rejects_dates_outside_four_digit_years() {
        for date in [
            NaiveDate::from_ymd_opt(10000, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(0, 12, 31).unwrap(),
            NaiveDate::from_ymd_opt(-5, 6, 1).unwrap(),
        ] {
            let err = validate_session(&session_on(date)).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValueOutOfRange);
            assert_eq!(err.context.details["field"], "date");
        }
    }

    #[test]
    fn test_rejects_ladder_gap_and_bad_dice() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();

        let mut gap = session_on(day);
        gap.ladder_sets = LadderSets::new([3, 0, 3, 0, 0]);
        assert_eq!(validate_session(&gap).unwrap_err().code, ErrorCode::InvalidInput);

        let mut dice = session_on(day);
        dice.dice = 1;
        assert_eq!(validate_session(&dice).unwrap_err().code, ErrorCode::ValueOutOfRange);

        let weight = session_on(day).with_weight(-4.0);
        assert_eq!(validate_session(&weight).unwrap_err().code, ErrorCode::ValueOutOfRange);
    }
}
