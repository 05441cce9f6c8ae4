//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::journal::JournalEntry;

// ============================================
// SESSION DTOs
// ============================================

/// Response to session creation
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
}

// ============================================
// ENTRY DTOs
// ============================================

/// Save request (JSON body or page form)
#[derive(Debug, Deserialize)]
pub struct SaveEntryRequest {
    /// Raw entry text; trimmed before storage
    #[serde(default)]
    pub text: String,
}

/// A stored entry as returned by the API
#[derive(Debug, Serialize, Deserialize)]
pub struct EntryDto {
    pub seq: u64,
    pub text: String,
    pub created_at: DateTime<Local>,
    /// Human-readable date, e.g. `Oct 16, 2026 • 09:05 PM`
    pub display_date: String,
}

impl From<&JournalEntry> for EntryDto {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            seq: entry.seq(),
            text: entry.text().to_string(),
            created_at: entry.created_at(),
            display_date: entry.display_date(),
        }
    }
}

/// Save response
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveEntryResponse {
    pub entry: EntryDto,
    /// Acknowledgement to show the writer
    pub message: String,
}

/// Entry listing, newest first
#[derive(Debug, Serialize, Deserialize)]
pub struct ListEntriesResponse {
    pub entries: Vec<EntryDto>,
    pub count: usize,
    /// Placeholder to display when `entries` is empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub sessions: usize,
    pub max_sessions: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
