// ABOUTME: Five-slot ladder configuration of a practice session
// ABOUTME: Prefix-active and uniform-value checks plus text parsing ("3,3,3,0,0")
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::ladder::LADDER_SLOTS;
use crate::errors::AppError;

/// Ladder heights for the five slots of a session
///
/// Slot `k` holding value `n` means the ladder in that slot runs `1, 2, ..., n` reps.
/// A value of 0 leaves the slot inactive. Serializes as a plain five-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LadderSets([u32; LADDER_SLOTS]);

impl LadderSets {
    /// Build from the five slot values
    #[must_use]
    pub const fn new(slots: [u32; LADDER_SLOTS]) -> Self {
        Self(slots)
    }

    /// Build from signed storage values, clamping anything negative to 0
    #[must_use]
    pub fn from_clamped(values: [i64; LADDER_SLOTS]) -> Self {
        Self(values.map(|v| u32::try_from(v.max(0)).unwrap_or(u32::MAX)))
    }

    /// Slot values in order
    #[must_use]
    pub const fn as_array(&self) -> [u32; LADDER_SLOTS] {
        self.0
    }

    /// Iterate slot values in order
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    /// Number of non-zero slots
    #[must_use]
    pub fn active_slots(&self) -> usize {
        self.0.iter().filter(|&&v| v > 0).count()
    }

    /// True when every slot is zero
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&v| v == 0)
    }

    /// Slot `k > 0` implies slot `k - 1 > 0`
    #[must_use]
    pub fn is_prefix_active(&self) -> bool {
        self.0
            .windows(2)
            .all(|pair| pair[1] == 0 || pair[0] > 0)
    }

    /// All non-zero slots hold the same value
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        let mut active = self.0.iter().filter(|&&v| v > 0);
        match active.next() {
            Some(first) => active.all(|v| v == first),
            None => true,
        }
    }

    /// First slot (1-based) that is active while its predecessor is not
    #[must_use]
    pub fn first_gap(&self) -> Option<usize> {
        self.0
            .windows(2)
            .position(|pair| pair[1] > 0 && pair[0] == 0)
            .map(|idx| idx + 2)
    }
}

impl From<[u32; LADDER_SLOTS]> for LadderSets {
    fn from(slots: [u32; LADDER_SLOTS]) -> Self {
        Self(slots)
    }
}

impl fmt::Display for LadderSets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e] = self.0;
        write!(f, "({a},{b},{c},{d},{e})")
    }
}

impl FromStr for LadderSets {
    type Err = AppError;

    /// Parse five comma or slash separated values, surrounding parentheses optional
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let parts: Vec<&str> = trimmed
            .split([',', '/'])
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        if parts.len() != LADDER_SLOTS {
            return Err(AppError::invalid_format(format!(
                "Expected {LADDER_SLOTS} ladder values, got {} in '{s}'",
                parts.len()
            )));
        }

        let mut slots = [0_u32; LADDER_SLOTS];
        for (slot, part) in slots.iter_mut().zip(parts) {
            *slot = part.parse().map_err(|e| {
                AppError::invalid_format(format!("Invalid ladder value '{part}': {e}"))
            })?;
        }
        Ok(Self(slots))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_active() {
        assert!(LadderSets::new([3, 3, 3, 0, 0]).is_prefix_active());
        assert!(LadderSets::new([0, 0, 0, 0, 0]).is_prefix_active());
        assert!(!LadderSets::new([3, 0, 3, 0, 0]).is_prefix_active());
        assert_eq!(LadderSets::new([3, 0, 3, 0, 0]).first_gap(), Some(3));
        assert_eq!(LadderSets::new([0, 1, 0, 0, 0]).first_gap(), Some(2));
    }

    #[test]
    fn test_uniform() {
        assert!(LadderSets::new([4, 4, 4, 0, 0]).is_uniform());
        assert!(LadderSets::default().is_uniform());
        assert!(!LadderSets::new([5, 4, 4, 4, 4]).is_uniform());
    }

    #[test]
    fn test_parse_and_display() {
        let sets: LadderSets = "3,3,3,0,0".parse().unwrap();
        assert_eq!(sets.as_array(), [3, 3, 3, 0, 0]);
        assert_eq!(sets.to_string(), "(3,3,3,0,0)");
        assert_eq!("(5/5/4/4/4)".parse::<LadderSets>().unwrap().active_slots(), 5);
        assert!("3,3,3".parse::<LadderSets>().is_err());
        assert!("3,3,x,0,0".parse::<LadderSets>().is_err());
    }

    #[test]
    fn test_from_clamped() {
        assert_eq!(
            LadderSets::from_clamped([-1, 2, 3, 0, -7]).as_array(),
            [0, 2, 3, 0, 0]
        );
    }
}
