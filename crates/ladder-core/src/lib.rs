// ABOUTME: Core types and constants for the kettlebell ladder training tracker
// ABOUTME: Foundation crate with error handling, practice session models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

#![deny(unsafe_code)]

//! # Ladder Core
//!
//! Foundation crate providing shared types and constants for the kettlebell ladder
//! tracker. It changes infrequently so the engine and server crates build incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Ladder, dice, and streak constants organized by domain
//! - **models**: `PracticeSession`, `Intensity`, `LadderSets` and request types

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (practice sessions, intensities, ladder configurations)
pub mod models;
