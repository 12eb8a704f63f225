// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for ladder slots, dice range, streak rules, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single flat list.

/// Ladder program shape
pub mod ladder {
    /// Number of ladder slots in one practice session
    pub const LADDER_SLOTS: usize = 5;
}

/// Session timing recorded as a two-dice value
pub mod dice {
    /// Smallest value two six-sided dice can show
    pub const DICE_MIN: u8 = 2;
    /// Largest value two six-sided dice can show
    pub const DICE_MAX: u8 = 12;
}

/// Weekly streak rules
pub mod streaks {
    /// Sessions a week needs before it counts toward a streak
    pub const MIN_SESSIONS_PER_WEEK: usize = 3;
    /// Days between the Mondays of two consecutive weeks
    pub const DAYS_PER_WEEK: i64 = 7;
}

/// Storage formats
pub mod formats {
    /// Date-only storage and path format
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
    /// Earliest year whose `DATE_FORMAT` text sorts chronologically
    pub const MIN_DATE_YEAR: i32 = 1;
    /// Latest year whose `DATE_FORMAT` text sorts chronologically
    pub const MAX_DATE_YEAR: i32 = 9999;
}

/// Service names used in structured logs
pub mod service_names {
    /// HTTP server binary
    pub const LADDER_SERVER: &str = "ladder-server";
    /// Command-line tool
    pub const LADDER_CLI: &str = "ladder-cli";
}

/// Network defaults
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}
