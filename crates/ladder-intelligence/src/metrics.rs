// ABOUTME: Volume metrics derived from practice history - ladder pushes and successful pulls
// ABOUTME: A ladder of height n is 1+2+...+n reps, so volume is a sum of triangular numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

use ladder_core::models::{LadderSets, PracticeSession};
use serde::{Deserialize, Serialize};

/// Reps in one ladder of height `n` (the triangular number `n(n+1)/2`)
#[must_use]
pub const fn ladder_pushes(height: u32) -> u64 {
    let n = height as u64;
    n * (n + 1) / 2
}

/// Reps prescribed by a session configuration, each slot value taken as a ladder height
#[must_use]
pub fn session_pushes(ladder_sets: &LadderSets) -> u64 {
    ladder_sets.iter().map(ladder_pushes).sum()
}

/// Sum of `pull_count` over successful sessions
#[must_use]
pub fn total_successful_pulls(sessions: &[PracticeSession]) -> u64 {
    sessions
        .iter()
        .filter(|s| s.success)
        .map(|s| u64::from(s.pull_count))
        .sum()
}

/// Sum of ladder pushes over every session in the history
#[must_use]
pub fn total_ladder_pushes(sessions: &[PracticeSession]) -> u64 {
    sessions.iter().map(|s| session_pushes(&s.ladder_sets)).sum()
}

/// Aggregated volume over a session history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VolumeSummary {
    /// Sessions in the history
    pub sessions: usize,
    /// Sessions marked successful
    pub successful_sessions: usize,
    /// Sum of `pull_count` over successful sessions
    pub total_successful_pulls: u64,
    /// Sum of ladder pushes over all sessions
    pub total_ladder_pushes: u64,
}

impl VolumeSummary {
    /// Summarize a history in one pass
    #[must_use]
    pub fn from_sessions(sessions: &[PracticeSession]) -> Self {
        sessions.iter().fold(Self::default(), |mut acc, s| {
            acc.sessions += 1;
            acc.total_ladder_pushes += session_pushes(&s.ladder_sets);
            if s.success {
                acc.successful_sessions += 1;
                acc.total_successful_pulls += u64::from(s.pull_count);
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangular_counts() {
        assert_eq!(ladder_pushes(0), 0);
        assert_eq!(ladder_pushes(1), 1);
        assert_eq!(ladder_pushes(3), 6);
        assert_eq!(ladder_pushes(5), 15);
    }

    #[test]
    fn test_session_pushes() {
        assert_eq!(session_pushes(&LadderSets::new([3, 3, 3, 0, 0])), 18);
        assert_eq!(session_pushes(&LadderSets::new([5, 5, 5, 5, 5])), 75);
        assert_eq!(session_pushes(&LadderSets::default()), 0);
    }
}
