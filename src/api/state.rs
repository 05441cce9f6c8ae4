//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::ApiConfig;
use crate::notebook::Theme;
use crate::session::{RegistryConfig, SessionHandle, SessionRegistry};

use super::error::{ApiError, ApiResult};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Live notebook sessions
    pub sessions: Arc<SessionRegistry>,
    /// Page copy
    pub theme: Arc<Theme>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ApiConfig, theme: Theme) -> Self {
        let sessions = SessionRegistry::new(RegistryConfig {
            max_sessions: config.max_sessions,
            idle_timeout: Duration::from_secs(config.session_idle_secs),
        });

        Self {
            sessions: Arc::new(sessions),
            theme: Arc::new(theme),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Resolve a session id or fail with 404
    pub async fn session(&self, id: &str) -> ApiResult<SessionHandle> {
        self.sessions
            .get(id)
            .await
            .ok_or_else(|| ApiError::NotFound(format!("Session '{}' not found", id)))
    }
}
