// ABOUTME: Ladder progression calculator - next session's five-slot ladder configuration
// ABOUTME: Heavy days climb a fixed 13-step staircase; medium/light days offset the heavy baseline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

//! Ladder progression
//!
//! Heavy sessions advance one step along [`HEAVY_STAIRCASE`] from the last successful
//! heavy session. The staircase first adds active ladders while every active ladder is at
//! 3, then raises the uniform height one slot at a time until all five ladders reach 5.
//! The last step is the program ceiling.
//!
//! Medium and light sessions have no progression memory of their own: they subtract a
//! flat offset from every slot of the last heavy session, floored at 0.
//!
//! Everything here is a pure function of its arguments.

use ladder_core::models::{Intensity, LadderSets, PracticeSession};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Number of steps in the heavy staircase
pub const STAIRCASE_LEN: usize = 13;

/// Hand-ordered heavy progression, step 0 (easiest) to step 12 (ceiling)
pub const HEAVY_STAIRCASE: [LadderSets; STAIRCASE_LEN] = [
    LadderSets::new([3, 3, 3, 0, 0]),
    LadderSets::new([3, 3, 3, 3, 0]),
    LadderSets::new([3, 3, 3, 3, 3]),
    LadderSets::new([4, 3, 3, 3, 3]),
    LadderSets::new([4, 4, 3, 3, 3]),
    LadderSets::new([4, 4, 4, 3, 3]),
    LadderSets::new([4, 4, 4, 4, 3]),
    LadderSets::new([4, 4, 4, 4, 4]),
    LadderSets::new([5, 4, 4, 4, 4]),
    LadderSets::new([5, 5, 4, 4, 4]),
    LadderSets::new([5, 5, 5, 4, 4]),
    LadderSets::new([5, 5, 5, 5, 4]),
    LadderSets::new([5, 5, 5, 5, 5]),
];

/// Reps removed from each heavy slot on a medium day
pub const MEDIUM_OFFSET: u32 = 1;

/// Reps removed from each heavy slot on a light day
pub const LIGHT_OFFSET: u32 = 2;

/// How a suggested configuration was derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProgressionBasis {
    /// No successful heavy session on record
    Bootstrap,
    /// Advanced from one staircase step to the next
    Advanced {
        /// Step of the last heavy session
        from_step: usize,
        /// Step suggested now
        to_step: usize,
    },
    /// Last heavy session already sits on the final step
    Ceiling,
    /// Last heavy session matched no step; restarted at step 0
    Reset,
    /// Medium/light day derived from the heavy baseline
    Offset {
        /// Reps subtracted per slot
        offset: u32,
    },
}

/// A suggested ladder configuration together with how it was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderPlan {
    /// Intensity the plan was computed for
    pub intensity: Intensity,
    /// Suggested slot heights
    pub ladder_sets: LadderSets,
    /// Derivation
    pub basis: ProgressionBasis,
}

/// Configuration used when no successful heavy session exists yet
#[must_use]
pub const fn bootstrap_configuration(intensity: Intensity) -> LadderSets {
    match intensity {
        Intensity::Heavy => LadderSets::new([3, 3, 3, 0, 0]),
        Intensity::Medium => LadderSets::new([2, 2, 2, 0, 0]),
        Intensity::Light => LadderSets::new([1, 1, 1, 0, 0]),
    }
}

/// Flat per-slot offset for non-heavy days
#[must_use]
pub const fn intensity_offset(intensity: Intensity) -> u32 {
    match intensity {
        Intensity::Heavy => 0,
        Intensity::Medium => MEDIUM_OFFSET,
        Intensity::Light => LIGHT_OFFSET,
    }
}

/// Index of the staircase step exactly equal to `sets`
///
/// Exact equality only; a configuration between two steps has no index.
#[must_use]
pub fn staircase_step(sets: &LadderSets) -> Option<usize> {
    HEAVY_STAIRCASE.iter().position(|step| step == sets)
}

/// Subtract `offset` from every slot, flooring at 0
#[must_use]
pub fn offset_configuration(baseline: &LadderSets, offset: u32) -> LadderSets {
    LadderSets::new(baseline.as_array().map(|v| v.saturating_sub(offset)))
}

/// Next heavy configuration after `last`
///
/// One step up the staircase, the ceiling stays put, and anything off the staircase
/// restarts at step 0.
#[must_use]
pub fn next_heavy_configuration(last: &LadderSets) -> LadderSets {
    plan_heavy(last).0
}

fn plan_heavy(last: &LadderSets) -> (LadderSets, ProgressionBasis) {
    match staircase_step(last) {
        Some(step) if step + 1 < STAIRCASE_LEN => (
            HEAVY_STAIRCASE[step + 1],
            ProgressionBasis::Advanced {
                from_step: step,
                to_step: step + 1,
            },
        ),
        Some(_) => (HEAVY_STAIRCASE[STAIRCASE_LEN - 1], ProgressionBasis::Ceiling),
        None => {
            warn!(
                ladder_sets = %last,
                "Last heavy session matches no staircase step, restarting at step 0"
            );
            (HEAVY_STAIRCASE[0], ProgressionBasis::Reset)
        }
    }
}

/// Plan the next session for `intensity` from the last successful heavy session
///
/// The caller is responsible for passing the most recent session with
/// `intensity = Heavy` and `success = true`, or `None` when there is none.
#[must_use]
pub fn plan_ladder_configuration(
    last_heavy_session: Option<&PracticeSession>,
    intensity: Intensity,
) -> LadderPlan {
    let (ladder_sets, basis) = match (last_heavy_session, intensity) {
        (None, _) => (bootstrap_configuration(intensity), ProgressionBasis::Bootstrap),
        (Some(last), Intensity::Heavy) => plan_heavy(&last.ladder_sets),
        (Some(last), Intensity::Medium | Intensity::Light) => {
            let offset = intensity_offset(intensity);
            (
                offset_configuration(&last.ladder_sets, offset),
                ProgressionBasis::Offset { offset },
            )
        }
    };

    debug!(%intensity, %ladder_sets, ?basis, "Computed ladder configuration");

    LadderPlan {
        intensity,
        ladder_sets,
        basis,
    }
}

/// Five-slot configuration for the next session at `intensity`
#[must_use]
pub fn compute_ladder_configuration(
    last_heavy_session: Option<&PracticeSession>,
    intensity: Intensity,
) -> LadderSets {
    plan_ladder_configuration(last_heavy_session, intensity).ladder_sets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staircase_satisfies_session_invariants() {
        for step in &HEAVY_STAIRCASE {
            assert!(step.is_prefix_active(), "{step} not prefix-active");
        }
        let mut unique = HEAVY_STAIRCASE.to_vec();
        unique.dedup();
        assert_eq!(unique.len(), STAIRCASE_LEN);
    }

    #[test]
    fn test_next_heavy_walks_every_step() {
        for i in 0..STAIRCASE_LEN - 1 {
            assert_eq!(
                next_heavy_configuration(&HEAVY_STAIRCASE[i]),
                HEAVY_STAIRCASE[i + 1]
            );
        }
        assert_eq!(
            next_heavy_configuration(&HEAVY_STAIRCASE[STAIRCASE_LEN - 1]),
            HEAVY_STAIRCASE[STAIRCASE_LEN - 1]
        );
    }

    #[test]
    fn test_off_staircase_resets() {
        assert_eq!(
            next_heavy_configuration(&LadderSets::new([2, 2, 2, 0, 0])),
            HEAVY_STAIRCASE[0]
        );
        assert_eq!(
            next_heavy_configuration(&LadderSets::new([4, 4, 0, 0, 0])),
            HEAVY_STAIRCASE[0]
        );
    }

    #[test]
    fn test_offset_floors_at_zero() {
        assert_eq!(
            offset_configuration(&LadderSets::new([1, 1, 1, 0, 0]), LIGHT_OFFSET),
            LadderSets::new([0, 0, 0, 0, 0])
        );
    }
}
