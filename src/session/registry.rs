//! Session Registry
//!
//! Each session owns an independent `EntryLog`. The registry only hands out
//! shared handles; nothing is ever copied between sessions.
//!
//! Browsers never say goodbye, so a session also ends once it has gone
//! untouched for `idle_timeout`. Idle sessions are purged before every
//! capacity check and periodically by [`SessionRegistry::start_idle_sweeper`].

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use uuid::Uuid;

use crate::journal::EntryLog;

/// Unique identifier for a session
pub type SessionId = String;

/// Shared handle to one session's log
///
/// The mutex serializes saves and renders for the same session.
pub type SessionHandle = Arc<Mutex<EntryLog>>;

/// Configuration for the session registry
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Maximum number of concurrent sessions
    pub max_sessions: usize,
    /// A session untouched for this long is ended
    pub idle_timeout: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_sessions: 1000,
            idle_timeout: Duration::from_secs(60 * 60),
        }
    }
}

struct SessionSlot {
    log: SessionHandle,
    started_at: Instant,
    last_seen: Instant,
}

impl SessionSlot {
    fn is_idle(&self, now: Instant, idle_timeout: Duration) -> bool {
        now.saturating_duration_since(self.last_seen) >= idle_timeout
    }
}

/// Owns every live session
pub struct SessionRegistry {
    sessions: RwLock<HashMap<SessionId, SessionSlot>>,
    config: RegistryConfig,
}

impl SessionRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Start a session with an empty log
    pub async fn create(&self) -> Result<SessionId, SessionError> {
        let mut sessions = self.sessions.write().await;
        let now = Instant::now();
        self.purge_locked(&mut sessions, now);

        if sessions.len() >= self.config.max_sessions {
            tracing::warn!(max = self.config.max_sessions, "Session limit reached");
            return Err(SessionError::TooManySessions);
        }

        let id = Uuid::new_v4().to_string();
        sessions.insert(
            id.clone(),
            SessionSlot {
                log: Arc::new(Mutex::new(EntryLog::new())),
                started_at: now,
                last_seen: now,
            },
        );

        tracing::info!(session_id = %id, "Session started");
        Ok(id)
    }

    /// Look up a session's log and mark it as active
    ///
    /// A session that has already gone idle is ended instead.
    pub async fn get(&self, id: &str) -> Option<SessionHandle> {
        let mut sessions = self.sessions.write().await;
        let now = Instant::now();

        let idle = sessions.get(id)?.is_idle(now, self.config.idle_timeout);
        if idle {
            sessions.remove(id);
            tracing::info!(session_id = %id, "Session expired");
            return None;
        }

        let slot = sessions.get_mut(id)?;
        slot.last_seen = now;
        Some(Arc::clone(&slot.log))
    }

    /// End a session, dropping its log. Returns false if it did not exist.
    pub async fn end(&self, id: &str) -> bool {
        match self.sessions.write().await.remove(id) {
            Some(slot) => {
                tracing::info!(
                    session_id = %id,
                    lifetime_secs = slot.started_at.elapsed().as_secs(),
                    "Session ended"
                );
                true
            }
            None => false,
        }
    }

    /// End every idle session, returning how many were dropped
    pub async fn purge_idle(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        self.purge_locked(&mut sessions, Instant::now())
    }

    fn purge_locked(&self, sessions: &mut HashMap<SessionId, SessionSlot>, now: Instant) -> usize {
        let before = sessions.len();
        sessions.retain(|_, slot| !slot.is_idle(now, self.config.idle_timeout));

        let purged = before - sessions.len();
        if purged > 0 {
            tracing::info!(purged, remaining = sessions.len(), "Idle sessions expired");
        }
        purged
    }

    /// Spawn a task that purges idle sessions every `period`
    pub fn start_idle_sweeper(self: Arc<Self>, period: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                self.purge_idle().await;
            }
        })
    }

    /// Number of live sessions
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub fn max_sessions(&self) -> usize {
        self.config.max_sessions
    }

    pub fn idle_timeout(&self) -> Duration {
        self.config.idle_timeout
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

/// Session registry errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Too many sessions")]
    TooManySessions,
}
