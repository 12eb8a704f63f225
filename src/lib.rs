// ABOUTME: Main library entry point for the kettlebell ladder training tracker
// ABOUTME: Session storage, progression suggestions, and streak statistics over HTTP and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

#![deny(unsafe_code)]

//! # Kettlebell Ladder
//!
//! Tracks kettlebell ladder practice sessions (one per user per day) and suggests the
//! next session from history: the Heavy -> Light -> Medium intensity cycle, the heavy
//! staircase, and medium/light offsets from the last successful heavy day. Weekly
//! streaks and volume totals are derived from the same history.
//!
//! ## Layout
//!
//! - **config**: environment-driven server, database, and training settings
//! - **logging**: `tracing` subscriber setup
//! - **database**: `SQLite` session store and repository traits
//! - **services**: practice workflow shared by the HTTP routes and the CLI
//! - **routes** / **server**: axum REST surface
//!
//! The pure progression engine lives in the `ladder-intelligence` crate; models,
//! errors, and constants live in `ladder-core`.

/// Configuration management
pub mod config;

/// Session storage
pub mod database;

/// Structured logging setup
pub mod logging;

/// Shared state for request handlers
pub mod resources;

/// HTTP route groups
pub mod routes;

/// HTTP server assembly
pub mod server;

/// Domain services
pub mod services;

/// Error types (re-exported from `ladder-core`)
pub use ladder_core::errors;

/// Constants (re-exported from `ladder-core`)
pub use ladder_core::constants;

/// Domain models (re-exported from `ladder-core`)
pub use ladder_core::models;

/// Progression engine (re-exported from `ladder-intelligence`)
pub use ladder_intelligence as intelligence;
