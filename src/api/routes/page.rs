//! Notebook Page Routes
//!
//! Server-rendered notebook for browsers.
//!
//! - GET / - Start a session and redirect to its notebook
//! - GET /notebook/:id - Render the notebook
//! - POST /notebook/:id - Save the submitted form, then render

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    Form,
};
use std::sync::Arc;

use crate::api::dto::SaveEntryRequest;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::notebook;

fn notebook_path(id: &str) -> String {
    format!("/notebook/{}", id)
}

/// GET /
pub async fn start(State(state): State<Arc<AppState>>) -> ApiResult<Redirect> {
    let id = state.sessions.create().await?;
    Ok(Redirect::to(&notebook_path(&id)))
}

/// GET /notebook/:id
pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Html<String>> {
    let session = state.session(&id).await?;
    let view = {
        let log = session.lock().await;
        notebook::render(&log, &state.theme)
    };

    Ok(Html(view.to_html(&notebook_path(&id))))
}

/// POST /notebook/:id
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<SaveEntryRequest>,
) -> ApiResult<(StatusCode, Html<String>)> {
    let session = state.session(&id).await?;
    let (outcome, view) = {
        let mut log = session.lock().await;
        let outcome = notebook::save(&mut log, &form.text, &state.theme);
        let view = notebook::render(&log, &state.theme);
        (outcome, view)
    };

    let status = if outcome.is_saved() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    Ok((
        status,
        Html(view.with_notice(&outcome).to_html(&notebook_path(&id))),
    ))
}
