// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-driven server, database, and training program configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

//! Configuration module
//!
//! - **Environment**: server settings, log level, and training thresholds
//! - **Database**: `SQLite` location and connection pool settings

/// Database location and pool configuration
pub mod database;
/// Environment and server configuration
pub mod environment;

pub use database::{DatabaseConfig, DatabaseUrl};
pub use environment::{Environment, LogLevel, ServerConfig, TrainingConfig};
