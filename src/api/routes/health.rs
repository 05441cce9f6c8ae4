//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 503 while the session registry is full of active sessions,
/// since new visitors could not start a notebook.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if has_capacity(&state).await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
///
/// Full health status with session details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    state.sessions.purge_idle().await;
    let sessions = state.sessions.count().await;
    let max_sessions = state.sessions.max_sessions();

    let status = if sessions < max_sessions {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        sessions,
        max_sessions,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn has_capacity(state: &AppState) -> bool {
    state.sessions.purge_idle().await;
    state.sessions.count().await < state.sessions.max_sessions()
}
