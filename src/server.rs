// ABOUTME: HTTP server assembly - merges route groups and applies tracing middleware
// ABOUTME: Binds the configured address and serves until Ctrl-C or SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

use std::sync::Arc;
use std::time::Duration;

use axum::extract::Request;
use axum::http::HeaderName;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::errors::{AppError, AppResult, ErrorResponse};
use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, LadderRoutes, PracticeRoutes};

/// Header carrying the per-request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Upper bound on a single request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the application router with middleware applied
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(PracticeRoutes::routes(Arc::clone(&resources)))
        .merge(LadderRoutes::routes(resources))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(middleware::from_fn(attach_request_id))
                .layer(TimeoutLayer::new(REQUEST_TIMEOUT)),
        )
}

/// Copy the request id into error bodies rendered by `AppError`
async fn attach_request_id(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let mut response = next.run(request).await;
    match (response.extensions_mut().remove::<ErrorResponse>(), request_id) {
        (Some(body), Some(id)) => {
            (response.status(), Json(body.with_request_id(id))).into_response()
        }
        _ => response,
    }
}

/// Serve the API until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails
pub async fn run(resources: Arc<ServerResources>) -> AppResult<()> {
    let address = resources.config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| AppError::config(format!("Failed to bind {address}: {e}")))?;

    info!(%address, "HTTP server listening");
    display_available_endpoints(&address);

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("HTTP server error: {e}")))?;

    info!("HTTP server stopped");
    Ok(())
}

fn display_available_endpoints(address: &str) {
    info!("=== Available API Endpoints ===");
    info!("   Health:      http://{address}/health");
    info!("   Ready:       http://{address}/ready");
    info!("   Sessions:    http://{address}/api/users/{{user_id}}/practice-sessions");
    info!("   Session:     http://{address}/api/users/{{user_id}}/practice-sessions/{{date}}");
    info!("   Suggestion:  http://{address}/api/users/{{user_id}}/ladder/suggestion");
    info!("   Stats:       http://{address}/api/users/{{user_id}}/ladder/stats");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
