// ABOUTME: Weekly streak analytics over practice history (Monday-start weeks)
// ABOUTME: A week qualifies with enough sessions; streaks count consecutive qualifying weeks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

//! Weekly streaks
//!
//! Sessions are grouped by the Monday that starts their week. A week qualifies when it
//! holds at least [`MIN_SESSIONS_PER_WEEK`] distinct session days.
//!
//! - The current streak walks back from the week containing `today` and stops at the
//!   first week that does not qualify. An unfinished current week that has not reached
//!   the threshold yet ends the streak at zero.
//! - The longest streak scans qualifying weeks in order; a run continues only while
//!   consecutive qualifying weeks start exactly seven days apart.
//!
//! Input is expected to respect the one-session-per-day invariant. Duplicate dates are
//! collapsed rather than counted twice.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Duration, NaiveDate};
use ladder_core::constants::streaks::{DAYS_PER_WEEK, MIN_SESSIONS_PER_WEEK};
use ladder_core::models::PracticeSession;
use serde::{Deserialize, Serialize};

/// Monday of the week containing `date`
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Streak rules and computations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyStreakCalculator {
    /// Distinct session days a week needs to qualify
    pub min_sessions_per_week: usize,
}

impl Default for WeeklyStreakCalculator {
    fn default() -> Self {
        Self {
            min_sessions_per_week: MIN_SESSIONS_PER_WEEK,
        }
    }
}

impl WeeklyStreakCalculator {
    /// Calculator with a custom weekly threshold
    #[must_use]
    pub const fn new(min_sessions_per_week: usize) -> Self {
        Self {
            min_sessions_per_week,
        }
    }

    /// Distinct session days per week, keyed by week start
    #[must_use]
    pub fn sessions_per_week<I>(dates: I) -> BTreeMap<NaiveDate, usize>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let unique: BTreeSet<NaiveDate> = dates.into_iter().collect();
        let mut weeks = BTreeMap::new();
        for date in unique {
            *weeks.entry(week_start(date)).or_insert(0) += 1;
        }
        weeks
    }

    /// Week starts of qualifying weeks, oldest first
    #[must_use]
    pub fn qualifying_weeks<I>(&self, dates: I) -> Vec<NaiveDate>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Self::sessions_per_week(dates)
            .into_iter()
            .filter(|&(_, count)| count >= self.min_sessions_per_week)
            .map(|(week, _)| week)
            .collect()
    }

    /// Consecutive qualifying weeks ending with the week that contains `today`
    #[must_use]
    pub fn current_streak(&self, sessions: &[PracticeSession], today: NaiveDate) -> u32 {
        let weeks = Self::sessions_per_week(sessions.iter().map(|s| s.date));
        let mut week = week_start(today);
        let mut streak = 0;

        while weeks
            .get(&week)
            .is_some_and(|&count| count >= self.min_sessions_per_week)
        {
            streak += 1;
            week -= Duration::days(DAYS_PER_WEEK);
        }

        streak
    }

    /// Longest run of qualifying weeks anywhere in the history
    #[must_use]
    pub fn longest_streak(&self, sessions: &[PracticeSession]) -> u32 {
        let weeks = self.qualifying_weeks(sessions.iter().map(|s| s.date));

        let mut longest = 0;
        let mut run = 0;
        let mut previous: Option<NaiveDate> = None;

        for week in weeks {
            run = match previous {
                Some(prev) if (week - prev).num_days() == DAYS_PER_WEEK => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            previous = Some(week);
        }

        longest
    }
}

/// Current weekly streak with the default threshold
#[must_use]
pub fn current_weekly_streak(sessions: &[PracticeSession], today: NaiveDate) -> u32 {
    WeeklyStreakCalculator::default().current_streak(sessions, today)
}

/// Longest weekly streak with the default threshold
#[must_use]
pub fn longest_weekly_streak(sessions: &[PracticeSession]) -> u32 {
    WeeklyStreakCalculator::default().longest_streak(sessions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_start_handles_sunday() {
        // 2025-03-03 is a Monday
        assert_eq!(week_start(date(2025, 3, 3)), date(2025, 3, 3));
        assert_eq!(week_start(date(2025, 3, 5)), date(2025, 3, 3));
        assert_eq!(week_start(date(2025, 3, 9)), date(2025, 3, 3));
        assert_eq!(week_start(date(2025, 3, 10)), date(2025, 3, 10));
    }

    #[test]
    fn test_sessions_per_week_collapses_duplicates() {
        let weeks = WeeklyStreakCalculator::sessions_per_week([
            date(2025, 3, 3),
            date(2025, 3, 3),
            date(2025, 3, 9),
            date(2025, 3, 10),
        ]);
        assert_eq!(weeks.get(&date(2025, 3, 3)), Some(&2));
        assert_eq!(weeks.get(&date(2025, 3, 10)), Some(&1));
    }
}
