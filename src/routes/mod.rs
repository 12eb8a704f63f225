// ABOUTME: Route module organization for the ladder tracker HTTP endpoints
// ABOUTME: Domain route groups plus shared path, query, and body extraction helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

//! Route module
//!
//! Each domain module holds route definitions and thin handlers that delegate to the
//! service layer. Extraction failures are turned into [`AppError`] so every error body
//! has the same JSON shape.

/// Health check and readiness routes
pub mod health;
/// Suggestion and statistics routes
pub mod ladder;
/// Practice session CRUD routes
pub mod practice;

pub use health::HealthRoutes;
pub use ladder::LadderRoutes;
pub use practice::PracticeRoutes;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use chrono::NaiveDate;
use ladder_core::constants::formats::DATE_FORMAT;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Parse a user id path segment
pub(crate) fn parse_user_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::invalid_format(format!("Invalid user ID: {raw}")))
}

/// Parse a `YYYY-MM-DD` path segment or query value
pub(crate) fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
        AppError::invalid_format(format!("Invalid date '{raw}', expected YYYY-MM-DD"))
    })
}

/// Parse an optional date query value
pub(crate) fn parse_optional_date(raw: Option<&str>) -> AppResult<Option<NaiveDate>> {
    raw.map(parse_date).transpose()
}

/// Unwrap a JSON body, reporting malformed payloads as `InvalidInput`
pub(crate) fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    body.map(|Json(value)| value)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}
