//! Core data types for the journal
//!
//! - `JournalEntry`: one saved thought with the local time it was written

use chrono::{DateTime, Local};
use serde::Serialize;

/// Display format for entry timestamps, e.g. `Oct 16, 2026 • 09:05 PM`
pub const DISPLAY_FORMAT: &str = "%b %d, %Y • %I:%M %p";

/// A single journal entry
///
/// Entries are immutable once created. Only [`EntryLog`](super::EntryLog)
/// constructs them, so every entry in existence has non-empty, trimmed text.
/// Entries cannot be deserialized from outside data either:
///
/// ```compile_fail
/// let entry: moonlit::journal::JournalEntry =
///     serde_json::from_str(r#"{"seq":0,"text":"","created_at":"2026-01-01T00:00:00Z"}"#).unwrap();
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JournalEntry {
    /// Position in the owning log (0 = first entry written)
    seq: u64,
    /// Trimmed entry text
    text: String,
    /// Local time the entry was appended
    created_at: DateTime<Local>,
}

impl JournalEntry {
    pub(crate) fn new(seq: u64, text: String, created_at: DateTime<Local>) -> Self {
        Self {
            seq,
            text,
            created_at,
        }
    }

    /// Insertion index within the owning log
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// The entry text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// When the entry was written
    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    /// Locale-style date and 12-hour time for display
    pub fn display_date(&self) -> String {
        self.created_at.format(DISPLAY_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display_date_uses_twelve_hour_clock() {
        let at = Local.with_ymd_and_hms(2026, 10, 16, 21, 5, 0).unwrap();
        let entry = JournalEntry::new(0, "late".to_string(), at);
        assert_eq!(entry.display_date(), "Oct 16, 2026 • 09:05 PM");
    }

    #[test]
    fn test_serializes_with_timestamp() {
        let at = Local.with_ymd_and_hms(2026, 1, 2, 8, 0, 0).unwrap();
        let entry = JournalEntry::new(3, "morning".to_string(), at);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["seq"], 3);
        assert_eq!(json["text"], "morning");
        assert!(json["created_at"].as_str().unwrap().starts_with("2026-01-02T08:00:00"));
    }
}
