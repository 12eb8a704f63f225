// ABOUTME: Intensity cycle - suggests the next session's intensity from the previous one
// ABOUTME: Heavy -> Light -> Medium -> Heavy, starting at Heavy with no history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

use ladder_core::models::{Intensity, PracticeSession};

/// Intensity that follows `last` in the cycle
///
/// The cycle has no terminal state. With no previous intensity the program starts heavy.
#[must_use]
pub const fn next_intensity(last: Option<Intensity>) -> Intensity {
    match last {
        None | Some(Intensity::Medium) => Intensity::Heavy,
        Some(Intensity::Heavy) => Intensity::Light,
        Some(Intensity::Light) => Intensity::Medium,
    }
}

/// Suggest the intensity for the session after `last_session`
///
/// This is only a suggestion; callers may request any intensity.
#[must_use]
pub fn suggest_next_intensity(last_session: Option<&PracticeSession>) -> Intensity {
    next_intensity(last_session.map(|s| s.intensity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_has_period_three() {
        let mut current = Intensity::Heavy;
        let mut seen = vec![current];
        for _ in 0..4 {
            current = next_intensity(Some(current));
            seen.push(current);
        }
        assert_eq!(
            seen,
            vec![
                Intensity::Heavy,
                Intensity::Light,
                Intensity::Medium,
                Intensity::Heavy,
                Intensity::Light,
            ]
        );
    }

    #[test]
    fn test_no_history_starts_heavy() {
        assert_eq!(next_intensity(None), Intensity::Heavy);
        assert_eq!(suggest_next_intensity(None), Intensity::Heavy);
    }
}
