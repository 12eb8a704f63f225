// ABOUTME: Ladder progression route handlers - next session suggestion and statistics
// ABOUTME: Read-only endpoints computed from the user's stored practice history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use ladder_core::models::Intensity;
use ladder_intelligence::normalize_session_date;
use serde::Deserialize;

use super::{parse_optional_date, parse_user_id};
use crate::errors::AppError;
use crate::resources::ServerResources;

#[derive(Debug, Deserialize, Default)]
struct SuggestionQuery {
    #[serde(default)]
    intensity: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct StatsQuery {
    /// Reference day for the current streak, defaults to today (UTC)
    #[serde(default)]
    today: Option<String>,
}

/// Ladder suggestion and statistics routes
pub struct LadderRoutes;

impl LadderRoutes {
    /// Create all ladder routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/users/:user_id/ladder/suggestion",
                get(Self::handle_suggestion),
            )
            .route("/api/users/:user_id/ladder/stats", get(Self::handle_stats))
            .with_state(resources)
    }

    async fn handle_suggestion(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Query(query): Query<SuggestionQuery>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let intensity = query
            .intensity
            .as_deref()
            .map(str::parse::<Intensity>)
            .transpose()?;

        let suggestion = resources
            .practice
            .suggest_next_session(user_id, intensity)
            .await?;
        Ok((StatusCode::OK, Json(suggestion)).into_response())
    }

    async fn handle_stats(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Query(query): Query<StatsQuery>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let today = parse_optional_date(query.today.as_deref())?
            .unwrap_or_else(|| normalize_session_date(Utc::now()));

        let stats = resources.practice.practice_stats(user_id, today).await?;
        Ok((StatusCode::OK, Json(stats)).into_response())
    }
}
