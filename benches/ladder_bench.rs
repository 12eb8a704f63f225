// ABOUTME: Criterion benchmarks for the ladder progression engine and history analytics
// ABOUTME: Measures staircase planning, weekly streaks, and volume totals over synthetic histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

//! Criterion benchmarks for ladder progression.
//!
//! Streak and volume calculations scan a user's full history, so they are
//! measured over histories of increasing length.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, NaiveDate, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kettlebell_ladder::intelligence::{
    plan_ladder_configuration, total_ladder_pushes, total_successful_pulls, VolumeSummary,
    WeeklyStreakCalculator, HEAVY_STAIRCASE,
};
use kettlebell_ladder::models::{Intensity, PracticeSession};
use uuid::Uuid;

const HISTORY_SIZES: [usize; 3] = [30, 300, 3000];

/// Mon/Wed/Fri sessions cycling heavy, light, medium and climbing the staircase
#[allow(clippy::cast_possible_wrap)]
fn generate_history(count: usize) -> Vec<PracticeSession> {
    let first_monday = NaiveDate::from_ymd_opt(2020, 1, 6).unwrap_or_default();
    let now = Utc::now();

    (0..count)
        .map(|index| {
            let week = (index / 3) as i64;
            let day = [0, 2, 4][index % 3];
            let intensity = Intensity::ALL[index % 3];
            PracticeSession {
                id: format!("bench_session_{index}"),
                user_id: Uuid::nil(),
                date: first_monday + Duration::days(week * 7 + day),
                intensity,
                ladder_sets: HEAVY_STAIRCASE[(index / 3) % HEAVY_STAIRCASE.len()],
                dice: 2 + (index % 11) as u8,
                pull_count: 30 + (index % 50) as u32,
                weight_kg: Some(24.0),
                success: index % 7 != 0,
                created_at: now,
                updated_at: now,
                entered_at: now,
            }
        })
        .collect()
}

fn bench_staircase_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("staircase");
    let history = generate_history(HEAVY_STAIRCASE.len() * 3);

    for intensity in Intensity::ALL {
        group.bench_with_input(
            BenchmarkId::new("plan_all_steps", intensity),
            &intensity,
            |b, &intensity| {
                b.iter(|| {
                    for session in &history {
                        black_box(plan_ladder_configuration(Some(black_box(session)), intensity));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_weekly_streaks(c: &mut Criterion) {
    let mut group = c.benchmark_group("weekly_streaks");
    let calculator = WeeklyStreakCalculator::default();

    for size in HISTORY_SIZES {
        let history = generate_history(size);
        let today = history.last().map_or_else(|| Utc::now().date_naive(), |s| s.date);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("current", size), &history, |b, history| {
            b.iter(|| calculator.current_streak(black_box(history), today));
        });
        group.bench_with_input(BenchmarkId::new("longest", size), &history, |b, history| {
            b.iter(|| calculator.longest_streak(black_box(history)));
        });
    }

    group.finish();
}

fn bench_volume_totals(c: &mut Criterion) {
    let mut group = c.benchmark_group("volume");

    for size in HISTORY_SIZES {
        let history = generate_history(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("totals", size), &history, |b, history| {
            b.iter(|| {
                (
                    total_successful_pulls(black_box(history)),
                    total_ladder_pushes(black_box(history)),
                )
            });
        });
        group.bench_with_input(BenchmarkId::new("summary", size), &history, |b, history| {
            b.iter(|| VolumeSummary::from_sessions(black_box(history)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_staircase_planning,
    bench_weekly_streaks,
    bench_volume_totals,
);
criterion_main!(benches);
