//! Save and render handlers
//!
//! `save` is the only path that mutates a log. `render` is a pure read, so a
//! view can be rebuilt at any time without touching the entries.

use serde::Serialize;

use super::theme::Theme;
use super::view::NotebookView;
use crate::journal::{EntryLog, JournalEntry, JournalError};

/// Result of a save action, carrying the message to show the writer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum SaveOutcome {
    Saved { entry: JournalEntry, message: String },
    Rejected { message: String },
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved { .. })
    }

    /// Acknowledgement or validation message
    pub fn message(&self) -> &str {
        match self {
            SaveOutcome::Saved { message, .. } | SaveOutcome::Rejected { message } => message,
        }
    }
}

/// Handle a save action against `log`
pub fn save(log: &mut EntryLog, raw_text: &str, theme: &Theme) -> SaveOutcome {
    match log.append(raw_text) {
        Ok(entry) => {
            tracing::info!(seq = entry.seq(), total = log.len(), "Entry saved");
            SaveOutcome::Saved {
                entry,
                message: theme.saved_message.clone(),
            }
        }
        Err(JournalError::Rejected) => {
            tracing::debug!("Empty entry rejected");
            SaveOutcome::Rejected {
                message: theme.rejected_message.clone(),
            }
        }
    }
}

/// Build the view of `log` for display
pub fn render(log: &EntryLog, theme: &Theme) -> NotebookView {
    NotebookView::build(log.list_most_recent_first(), theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notebook::view::Pages;

    #[test]
    fn test_save_acknowledges() {
        let mut log = EntryLog::new();
        let theme = Theme::default();

        let outcome = save(&mut log, "  a quiet night  ", &theme);
        assert!(outcome.is_saved());
        assert_eq!(outcome.message(), theme.saved_message);
        match outcome {
            SaveOutcome::Saved { entry, .. } => assert_eq!(entry.text(), "a quiet night"),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_save_rejects_blank() {
        let mut log = EntryLog::new();
        let theme = Theme::default();

        let outcome = save(&mut log, " \n ", &theme);
        assert!(!outcome.is_saved());
        assert_eq!(outcome.message(), "Please write something before saving.");
        assert!(log.is_empty());
    }

    #[test]
    fn test_render_empty_shows_placeholder() {
        let log = EntryLog::new();
        let theme = Theme::default();

        let view = render(&log, &theme);
        assert_eq!(
            view.pages,
            Pages::Empty {
                placeholder: theme.empty_message.clone()
            }
        );
    }

    #[test]
    fn test_render_does_not_mutate() {
        let mut log = EntryLog::new();
        let theme = Theme::default();
        save(&mut log, "First thought", &theme);
        save(&mut log, "Second thought", &theme);

        let first = render(&log, &theme);
        let second = render(&log, &theme);
        assert_eq!(first, second);
        assert_eq!(log.len(), 2);

        match first.pages {
            Pages::Entries(pages) => {
                let texts: Vec<&str> = pages.iter().map(|p| p.text.as_str()).collect();
                assert_eq!(texts, vec!["Second thought", "First thought"]);
            }
            other => panic!("expected entries, got {:?}", other),
        }
    }

    #[test]
    fn test_outcome_serializes_tagged() {
        let outcome = SaveOutcome::Rejected {
            message: "nope".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "rejected");
        assert_eq!(json["message"], "nope");
    }
}
