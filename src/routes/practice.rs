// ABOUTME: Practice session route handlers for logging and editing daily sessions
// ABOUTME: REST endpoints keyed by user and calendar date; one session per user per day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

//! Practice session routes
//!
//! Sessions are addressed by `(user_id, date)`. Creating a second session on the same
//! day answers `409 Conflict`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use ladder_core::models::NewPracticeSession;
use serde::Deserialize;

use super::{json_body, parse_date, parse_optional_date, parse_user_id};
use crate::errors::AppError;
use crate::resources::ServerResources;

/// Optional inclusive date range for listing sessions
#[derive(Debug, Deserialize, Default)]
struct RangeQuery {
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    to: Option<String>,
}

/// Practice session routes
pub struct PracticeRoutes;

impl PracticeRoutes {
    /// Create all practice session routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/users/:user_id/practice-sessions",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/users/:user_id/practice-sessions/:date",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        body: Result<Json<NewPracticeSession>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let session = json_body(body)?;

        let stored = resources.practice.log_session(user_id, session).await?;
        Ok((StatusCode::CREATED, Json(stored)).into_response())
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Query(range): Query<RangeQuery>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let from = parse_optional_date(range.from.as_deref())?;
        let to = parse_optional_date(range.to.as_deref())?;

        let sessions = resources.practice.list_sessions(user_id, from, to).await?;
        Ok((StatusCode::OK, Json(sessions)).into_response())
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path((user_id, date)): Path<(String, String)>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let date = parse_date(&date)?;

        let session = resources.practice.get_session(user_id, date).await?;
        Ok((StatusCode::OK, Json(session)).into_response())
    }

    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path((user_id, date)): Path<(String, String)>,
        body: Result<Json<NewPracticeSession>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let date = parse_date(&date)?;
        let session = json_body(body)?;

        let stored = resources
            .practice
            .update_session(user_id, date, session)
            .await?;
        Ok((StatusCode::OK, Json(stored)).into_response())
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path((user_id, date)): Path<(String, String)>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let date = parse_date(&date)?;

        resources.practice.delete_session(user_id, date).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
