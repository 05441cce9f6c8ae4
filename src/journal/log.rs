//! Append-only entry log
//!
//! Holds every entry written during one session, in insertion order.
//! Reads walk the sequence backwards, so the newest entry always comes first
//! and entries sharing a timestamp keep their relative order.

use chrono::{DateTime, Local};

use super::error::{JournalError, JournalResult};
use super::types::JournalEntry;

/// The session-scoped journal
#[derive(Debug, Default)]
pub struct EntryLog {
    entries: Vec<JournalEntry>,
}

impl EntryLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry stamped with the current local time
    ///
    /// Surrounding whitespace is trimmed. Empty text is rejected and the log
    /// is left untouched.
    pub fn append(&mut self, raw_text: &str) -> JournalResult<JournalEntry> {
        self.append_at(raw_text, Local::now())
    }

    /// Append an entry with an explicit timestamp
    pub fn append_at(
        &mut self,
        raw_text: &str,
        created_at: DateTime<Local>,
    ) -> JournalResult<JournalEntry> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Err(JournalError::Rejected);
        }

        let entry = JournalEntry::new(self.entries.len() as u64, text.to_string(), created_at);
        self.entries.push(entry.clone());

        tracing::debug!(seq = entry.seq(), chars = text.chars().count(), "Entry appended");
        Ok(entry)
    }

    /// All entries, newest first
    pub fn list_most_recent_first(
        &self,
    ) -> impl ExactSizeIterator<Item = &JournalEntry> + DoubleEndedIterator {
        self.entries.iter().rev()
    }

    /// Owned copy of the entries, newest first
    pub fn snapshot(&self) -> Vec<JournalEntry> {
        self.list_most_recent_first().cloned().collect()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn texts(log: &EntryLog) -> Vec<&str> {
        log.list_most_recent_first().map(|e| e.text()).collect()
    }

    #[test]
    fn test_empty_log_lists_nothing() {
        let log = EntryLog::new();
        assert!(log.is_empty());
        assert_eq!(log.list_most_recent_first().len(), 0);
        assert!(log.snapshot().is_empty());
    }

    #[test]
    fn test_rejects_blank_text() {
        let mut log = EntryLog::new();
        log.append("kept").unwrap();

        for raw in ["", "   ", "\n\t"] {
            assert_eq!(log.append(raw), Err(JournalError::Rejected));
            assert_eq!(log.len(), 1);
        }
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let mut log = EntryLog::new();
        let entry = log.append(" hello ").unwrap();

        assert_eq!(entry.text(), "hello");
        assert_eq!(log.len(), 1);
        assert_eq!(texts(&log), vec!["hello"]);
    }

    #[test]
    fn test_inner_whitespace_is_preserved() {
        let mut log = EntryLog::new();
        let entry = log.append("\n  line one\nline two  \n").unwrap();
        assert_eq!(entry.text(), "line one\nline two");
    }

    #[test]
    fn test_newest_first() {
        let mut log = EntryLog::new();
        log.append("First thought").unwrap();
        log.append("Second thought").unwrap();

        assert_eq!(texts(&log), vec!["Second thought", "First thought"]);
    }

    #[test]
    fn test_identical_timestamps_keep_insertion_order() {
        let mut log = EntryLog::new();
        let at = Local::now();
        log.append_at("a", at).unwrap();
        log.append_at("b", at).unwrap();
        log.append_at("c", at).unwrap();

        assert_eq!(texts(&log), vec!["c", "b", "a"]);
        let seqs: Vec<u64> = log.list_most_recent_first().map(|e| e.seq()).collect();
        assert_eq!(seqs, vec![2, 1, 0]);
    }

    #[test]
    fn test_read_is_idempotent() {
        let mut log = EntryLog::new();
        log.append("one").unwrap();
        log.append("two").unwrap();

        let first = log.snapshot();
        let second = log.snapshot();
        assert_eq!(first, second);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_hundred_appends() {
        let mut log = EntryLog::new();
        for i in 0..100 {
            log.append(&format!("entry {}", i)).unwrap();
        }

        assert_eq!(log.len(), 100);

        let listed = log.snapshot();
        assert_eq!(listed.len(), 100);
        for (pos, entry) in listed.iter().enumerate() {
            assert_eq!(entry.text(), format!("entry {}", 99 - pos));
        }

        let unique: HashSet<&str> = listed.iter().map(|e| e.text()).collect();
        assert_eq!(unique.len(), 100);
    }

    #[test]
    fn test_returned_entry_matches_stored() {
        let mut log = EntryLog::new();
        let entry = log.append("same").unwrap();
        assert_eq!(log.list_most_recent_first().next(), Some(&entry));
    }
}
