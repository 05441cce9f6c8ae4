//! Session Routes
//!
//! - POST /api/v1/sessions - Start a notebook session
//! - DELETE /api/v1/sessions/:id - End a session and discard its entries

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::CreateSessionResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// POST /api/v1/sessions
pub async fn create_session(
    State(state): State<Arc<AppState>>,
) -> ApiResult<(StatusCode, Json<CreateSessionResponse>)> {
    let session_id = state.sessions.create().await?;

    Ok((StatusCode::CREATED, Json(CreateSessionResponse { session_id })))
}

/// DELETE /api/v1/sessions/:id
pub async fn end_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    if state.sessions.end(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("Session '{}' not found", id)))
    }
}
