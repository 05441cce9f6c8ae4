//! Entry Routes
//!
//! - POST /api/v1/sessions/:id/entries - Save an entry
//! - GET /api/v1/sessions/:id/entries - List entries, newest first

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{EntryDto, ListEntriesResponse, SaveEntryRequest, SaveEntryResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::notebook::{self, SaveOutcome};

/// POST /api/v1/sessions/:id/entries
///
/// Empty or whitespace-only text is answered with 422 and the theme's
/// validation message.
pub async fn save_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<SaveEntryRequest>,
) -> ApiResult<(StatusCode, Json<SaveEntryResponse>)> {
    let session = state.session(&id).await?;
    let outcome = {
        let mut log = session.lock().await;
        notebook::save(&mut log, &req.text, &state.theme)
    };

    match outcome {
        SaveOutcome::Saved { entry, message } => Ok((
            StatusCode::CREATED,
            Json(SaveEntryResponse {
                entry: EntryDto::from(&entry),
                message,
            }),
        )),
        SaveOutcome::Rejected { message } => Err(ApiError::Rejected(message)),
    }
}

/// GET /api/v1/sessions/:id/entries
pub async fn list_entries(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ListEntriesResponse>> {
    let session = state.session(&id).await?;
    let snapshot = session.lock().await.snapshot();
    let entries: Vec<EntryDto> = snapshot.iter().map(EntryDto::from).collect();

    let empty_message = entries
        .is_empty()
        .then(|| state.theme.empty_message.clone());

    Ok(Json(ListEntriesResponse {
        count: entries.len(),
        entries,
        empty_message,
    }))
}
