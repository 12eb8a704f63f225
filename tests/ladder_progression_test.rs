// ABOUTME: Integration tests for the ladder progression engine and history analytics
// ABOUTME: Staircase advancement, offsets, bootstrap, intensity cycle, volume, and streaks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::test_utils::{date, heavy_on, light_on, stored_session};
use kettlebell_ladder::intelligence::{
    compute_ladder_configuration, current_weekly_streak, ladder_pushes, longest_weekly_streak,
    next_intensity, plan_ladder_configuration, suggest_next_intensity, total_ladder_pushes,
    total_successful_pulls, ProgressionBasis, WeeklyStreakCalculator, HEAVY_STAIRCASE,
};
use kettlebell_ladder::models::{Intensity, LadderSets};

// ============================================================================
// Bootstrap
// ============================================================================

#[test]
fn test_bootstrap_configurations() {
    assert_eq!(
        compute_ladder_configuration(None, Intensity::Heavy),
        LadderSets::new([3, 3, 3, 0, 0])
    );
    assert_eq!(
        compute_ladder_configuration(None, Intensity::Medium),
        LadderSets::new([2, 2, 2, 0, 0])
    );
    assert_eq!(
        compute_ladder_configuration(None, Intensity::Light),
        LadderSets::new([1, 1, 1, 0, 0])
    );

    let plan = plan_ladder_configuration(None, Intensity::Heavy);
    assert_eq!(plan.basis, ProgressionBasis::Bootstrap);
}

// ============================================================================
// Heavy staircase
// ============================================================================

#[test]
fn test_heavy_advances_one_step_along_staircase() {
    for step in 0..HEAVY_STAIRCASE.len() - 1 {
        let last = heavy_on(date(2025, 3, 3), HEAVY_STAIRCASE[step].as_array());
        assert_eq!(
            compute_ladder_configuration(Some(&last), Intensity::Heavy),
            HEAVY_STAIRCASE[step + 1],
            "step {step} should advance"
        );
    }
}

#[test]
fn test_heavy_first_and_ceiling_steps() {
    let first = heavy_on(date(2025, 3, 3), [3, 3, 3, 0, 0]);
    assert_eq!(
        compute_ladder_configuration(Some(&first), Intensity::Heavy),
        LadderSets::new([3, 3, 3, 3, 0])
    );

    let ceiling = heavy_on(date(2025, 3, 3), [5, 5, 5, 5, 5]);
    let plan = plan_ladder_configuration(Some(&ceiling), Intensity::Heavy);
    assert_eq!(plan.ladder_sets, LadderSets::new([5, 5, 5, 5, 5]));
    assert_eq!(plan.basis, ProgressionBasis::Ceiling);
}

#[test]
fn test_heavy_off_staircase_resets_to_first_step() {
    let last = heavy_on(date(2025, 3, 3), [2, 2, 2, 0, 0]);
    let plan = plan_ladder_configuration(Some(&last), Intensity::Heavy);

    assert_eq!(plan.ladder_sets, LadderSets::new([3, 3, 3, 0, 0]));
    assert_eq!(plan.basis, ProgressionBasis::Reset);
}

#[test]
fn test_heavy_near_miss_is_not_matched() {
    // One rep short of step 3; only exact matches advance
    let last = heavy_on(date(2025, 3, 3), [4, 3, 3, 3, 2]);
    assert_eq!(
        compute_ladder_configuration(Some(&last), Intensity::Heavy),
        HEAVY_STAIRCASE[0]
    );
}

#[test]
fn test_staircase_outputs_keep_session_invariants() {
    for step in &HEAVY_STAIRCASE {
        let last = heavy_on(date(2025, 3, 3), step.as_array());
        let next = compute_ladder_configuration(Some(&last), Intensity::Heavy);
        assert!(next.is_prefix_active(), "{next} is not prefix-active");
        assert!(HEAVY_STAIRCASE.contains(&next));
    }
}

// ============================================================================
// Medium / light offsets
// ============================================================================

#[test]
fn test_medium_and_light_offsets_from_heavy_baseline() {
    let last = heavy_on(date(2025, 3, 3), [3, 3, 3, 0, 0]);

    assert_eq!(
        compute_ladder_configuration(Some(&last), Intensity::Medium),
        LadderSets::new([2, 2, 2, 0, 0])
    );
    assert_eq!(
        compute_ladder_configuration(Some(&last), Intensity::Light),
        LadderSets::new([1, 1, 1, 0, 0])
    );
}

#[test]
fn test_medium_from_first_step_matches_medium_bootstrap() {
    let last = heavy_on(date(2025, 3, 3), [3, 3, 3, 0, 0]);
    assert_eq!(
        compute_ladder_configuration(Some(&last), Intensity::Medium),
        compute_ladder_configuration(None, Intensity::Medium)
    );
}

#[test]
fn test_light_offset_clamps_at_zero() {
    let last = heavy_on(date(2025, 3, 3), [1, 1, 1, 0, 0]);
    assert_eq!(
        compute_ladder_configuration(Some(&last), Intensity::Light),
        LadderSets::new([0, 0, 0, 0, 0])
    );
}

#[test]
fn test_offsets_apply_to_off_staircase_baseline() {
    let last = heavy_on(date(2025, 3, 3), [4, 4, 2, 0, 0]);

    assert_eq!(
        compute_ladder_configuration(Some(&last), Intensity::Heavy),
        HEAVY_STAIRCASE[0]
    );
    assert_eq!(
        compute_ladder_configuration(Some(&last), Intensity::Medium),
        LadderSets::new([3, 3, 1, 0, 0])
    );
    assert_eq!(
        compute_ladder_configuration(Some(&last), Intensity::Light),
        LadderSets::new([2, 2, 0, 0, 0])
    );
}

#[test]
fn test_computation_is_idempotent() {
    let last = heavy_on(date(2025, 3, 3), [4, 4, 3, 3, 3]);
    for intensity in Intensity::ALL {
        let first = compute_ladder_configuration(Some(&last), intensity);
        let second = compute_ladder_configuration(Some(&last), intensity);
        assert_eq!(first, second);
    }
    assert_eq!(last.ladder_sets, LadderSets::new([4, 4, 3, 3, 3]));
}

// ============================================================================
// Intensity cycle
// ============================================================================

#[test]
fn test_intensity_cycle_has_period_three() {
    assert_eq!(next_intensity(None), Intensity::Heavy);

    let mut intensity = Intensity::Heavy;
    let mut seen = Vec::new();
    for _ in 0..4 {
        intensity = next_intensity(Some(intensity));
        seen.push(intensity);
    }
    assert_eq!(
        seen,
        vec![
            Intensity::Light,
            Intensity::Medium,
            Intensity::Heavy,
            Intensity::Light
        ]
    );
}

#[test]
fn test_suggest_next_intensity_from_last_session() {
    assert_eq!(suggest_next_intensity(None), Intensity::Heavy);

    let light = light_on(date(2025, 3, 5));
    assert_eq!(suggest_next_intensity(Some(&light)), Intensity::Medium);

    // Failed sessions still advance the cycle
    let failed_heavy = stored_session(date(2025, 3, 3), Intensity::Heavy, [3, 3, 3, 0, 0], false);
    assert_eq!(suggest_next_intensity(Some(&failed_heavy)), Intensity::Light);
}

// ============================================================================
// Volume
// ============================================================================

#[test]
fn test_triangular_push_counts() {
    assert_eq!(ladder_pushes(0), 0);
    assert_eq!(ladder_pushes(1), 1);
    assert_eq!(ladder_pushes(3), 6);
    assert_eq!(ladder_pushes(5), 15);
}

#[test]
fn test_totals_over_history() {
    let sessions = vec![
        heavy_on(date(2025, 3, 3), [3, 3, 3, 0, 0]),
        stored_session(date(2025, 3, 5), Intensity::Light, [1, 1, 1, 0, 0], false),
        stored_session(date(2025, 3, 7), Intensity::Medium, [2, 2, 2, 0, 0], true),
    ];

    // Pulls count only successful sessions (40 each)
    assert_eq!(total_successful_pulls(&sessions), 80);
    // Pushes count every session: 18 + 3 + 9
    assert_eq!(total_ladder_pushes(&sessions), 30);
}

// ============================================================================
// Weekly streaks
// ============================================================================

fn mon_wed_fri(monday: chrono::NaiveDate) -> Vec<kettlebell_ladder::models::PracticeSession> {
    [0, 2, 4]
        .into_iter()
        .map(|offset| light_on(monday + chrono::Duration::days(offset)))
        .collect()
}

#[test]
fn test_current_streak_over_two_full_weeks() {
    // 2025-03-03 and 2025-03-10 are Mondays
    let mut sessions = mon_wed_fri(date(2025, 3, 3));
    sessions.extend(mon_wed_fri(date(2025, 3, 10)));

    assert_eq!(current_weekly_streak(&sessions, date(2025, 3, 14)), 2);
    // Sunday still belongs to the week that started on 2025-03-10
    assert_eq!(current_weekly_streak(&sessions, date(2025, 3, 16)), 2);
    assert_eq!(longest_weekly_streak(&sessions), 2);
}

#[test]
fn test_current_week_below_threshold_breaks_streak() {
    let mut sessions = mon_wed_fri(date(2025, 3, 3));
    sessions.extend(mon_wed_fri(date(2025, 3, 10)));
    sessions.push(light_on(date(2025, 3, 17)));

    assert_eq!(current_weekly_streak(&sessions, date(2025, 3, 18)), 0);
    assert_eq!(longest_weekly_streak(&sessions), 2);
}

#[test]
fn test_gap_week_is_not_bridged() {
    let mut sessions = mon_wed_fri(date(2025, 3, 3));
    // Week of 2025-03-10 has only two sessions
    sessions.push(light_on(date(2025, 3, 10)));
    sessions.push(light_on(date(2025, 3, 12)));
    sessions.extend(mon_wed_fri(date(2025, 3, 17)));

    assert_eq!(current_weekly_streak(&sessions, date(2025, 3, 21)), 1);
    assert_eq!(longest_weekly_streak(&sessions), 1);
}

#[test]
fn test_longest_streak_picks_the_longer_run() {
    let mut sessions = Vec::new();
    for monday in [date(2025, 1, 6), date(2025, 1, 13), date(2025, 1, 20)] {
        sessions.extend(mon_wed_fri(monday));
    }
    for monday in [date(2025, 2, 3), date(2025, 2, 10)] {
        sessions.extend(mon_wed_fri(monday));
    }

    assert_eq!(longest_weekly_streak(&sessions), 3);
    assert_eq!(current_weekly_streak(&sessions, date(2025, 2, 12)), 2);
}

#[test]
fn test_streak_threshold_is_configurable() {
    let sessions = vec![light_on(date(2025, 3, 3)), light_on(date(2025, 3, 4))];

    assert_eq!(current_weekly_streak(&sessions, date(2025, 3, 5)), 0);
    let relaxed = WeeklyStreakCalculator::new(2);
    assert_eq!(relaxed.current_streak(&sessions, date(2025, 3, 5)), 1);
}

#[test]
fn test_empty_history_has_no_streaks() {
    assert_eq!(current_weekly_streak(&[], date(2025, 3, 5)), 0);
    assert_eq!(longest_weekly_streak(&[]), 0);
}
