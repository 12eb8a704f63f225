// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Protocol-agnostic services shared by the HTTP routes and the command-line tool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

//! Domain service layer
//!
//! Route handlers and CLI commands both go through these services so validation,
//! progression, and statistics behave the same regardless of the entry point.

/// Practice session workflow: suggestions, statistics, validated writes
pub mod practice;

pub use practice::{PracticeService, PracticeStats, SessionSuggestion};
