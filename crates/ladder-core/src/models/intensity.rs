// ABOUTME: Session intensity enumeration (Heavy, Medium, Light)
// ABOUTME: String conversions used by storage, query strings, and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Categorical difficulty of a practice session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Full ladder configuration, the day progression is measured on
    Heavy,
    /// Heavy baseline minus one rep per ladder
    Medium,
    /// Heavy baseline minus two reps per ladder
    Light,
}

impl Intensity {
    /// All intensities in declaration order
    pub const ALL: [Self; 3] = [Self::Heavy, Self::Medium, Self::Light];

    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Heavy => "heavy",
            Self::Medium => "medium",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intensity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "heavy" | "h" => Ok(Self::Heavy),
            "medium" | "m" => Ok(Self::Medium),
            "light" | "l" => Ok(Self::Light),
            other => Err(AppError::invalid_input(format!(
                "Unknown intensity '{other}', expected heavy, medium or light"
            ))),
        }
    }
}
