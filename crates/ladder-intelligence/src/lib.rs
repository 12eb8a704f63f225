// ABOUTME: Ladder progression engine for the kettlebell ladder training tracker
// ABOUTME: Pure functions over session history - no I/O, no shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

#![deny(unsafe_code)]

//! # Ladder Intelligence
//!
//! Computes the next session's ladder configuration from training history and derives
//! volume and streak statistics from the same history. Every function is synchronous and
//! deterministic; fetching history is the caller's concern.
//!
//! ## Modules
//!
//! - **intensity**: Heavy -> Light -> Medium cycle suggestion
//! - **progression**: heavy staircase and medium/light offsets
//! - **metrics**: triangular ladder volume and successful pull totals
//! - **streaks**: Monday-start weekly streaks (current and longest)
//! - **validation**: session payload checks before storage

/// Intensity cycle suggestion
pub mod intensity;

/// Volume metrics (pushes and pulls)
pub mod metrics;

/// Ladder progression calculator
pub mod progression;

/// Weekly streak analytics
pub mod streaks;

/// Session payload validation
pub mod validation;

pub use intensity::{next_intensity, suggest_next_intensity};
pub use metrics::{
    ladder_pushes, session_pushes, total_ladder_pushes, total_successful_pulls, VolumeSummary,
};
pub use progression::{
    compute_ladder_configuration, plan_ladder_configuration, LadderPlan, ProgressionBasis,
    HEAVY_STAIRCASE,
};
pub use streaks::{current_weekly_streak, longest_weekly_streak, week_start, WeeklyStreakCalculator};
pub use validation::{normalize_session_date, validate_session};
