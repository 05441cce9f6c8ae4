//! Moonlit HTTP API
//!
//! HTTP layer for the journal, built with Axum. Every session owns its own
//! entry log; nothing is persisted.
//!
//! # Endpoints
//!
//! ## Sessions
//! - `POST /api/v1/sessions` - Start a session
//! - `DELETE /api/v1/sessions/:id` - End a session
//!
//! ## Entries
//! - `POST /api/v1/sessions/:id/entries` - Save an entry
//! - `GET /api/v1/sessions/:id/entries` - List entries, newest first
//!
//! ## Notebook page
//! - `GET /` - Start a session and redirect to its page
//! - `GET /notebook/:id` - Render the notebook
//! - `POST /notebook/:id` - Save from the page form
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,no_run
//! use moonlit::api::{serve, AppState};
//! use moonlit::config::ApiConfig;
//! use moonlit::notebook::Theme;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!     let state = AppState::new(config.clone(), Theme::default());
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/sessions", post(routes::sessions::create_session))
        .route("/sessions/:id", delete(routes::sessions::end_session))
        .route(
            "/sessions/:id/entries",
            post(routes::entries::save_entry).get(routes::entries::list_entries),
        );

    let page_routes = Router::new()
        .route("/", get(routes::page::start))
        .route(
            "/notebook/:id",
            get(routes::page::show).post(routes::page::submit),
        );

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let body_limit = state.config.max_body_size;
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .merge(page_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let sessions = Arc::clone(&state.sessions);
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let sweep_period = (sessions.idle_timeout() / 4).max(Duration::from_secs(1));
    let sweeper = sessions.start_idle_sweeper(sweep_period);

    tracing::info!("Moonlit listening on http://{}", addr);

    let result = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)));
    sweeper.abort();
    result?;

    tracing::info!("Moonlit shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
