//! Notebook view model
//!
//! A `NotebookView` is a snapshot of a log dressed in the theme's copy. It
//! renders to plain HTML for the web page and to text for the terminal.

use std::fmt::Write;

use serde::Serialize;

use super::actions::SaveOutcome;
use super::theme::Theme;
use crate::journal::JournalEntry;

/// One rendered entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub seq: u64,
    /// Display date, e.g. `Oct 16, 2026 • 09:05 PM`
    pub date: String,
    pub text: String,
}

impl From<&JournalEntry> for PageView {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            seq: entry.seq(),
            date: entry.display_date(),
            text: entry.text().to_string(),
        }
    }
}

/// Entry list or the empty-notebook placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pages {
    Empty { placeholder: String },
    Entries(Vec<PageView>),
}

/// Banner shown after a save action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub success: bool,
    pub message: String,
}

impl From<&SaveOutcome> for Notice {
    fn from(outcome: &SaveOutcome) -> Self {
        Self {
            success: outcome.is_saved(),
            message: outcome.message().to_string(),
        }
    }
}

/// Everything the notebook page displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotebookView {
    pub heading: String,
    pub tagline: String,
    pub placeholder: String,
    pub session_note: String,
    pub pages_heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
    pub pages: Pages,
}

impl NotebookView {
    /// Build a view from entries already ordered newest first
    pub fn build<'a>(entries: impl IntoIterator<Item = &'a JournalEntry>, theme: &Theme) -> Self {
        let pages: Vec<PageView> = entries.into_iter().map(PageView::from).collect();
        let pages = if pages.is_empty() {
            Pages::Empty {
                placeholder: theme.empty_message.clone(),
            }
        } else {
            Pages::Entries(pages)
        };

        Self {
            heading: theme.heading(),
            tagline: theme.tagline.clone(),
            placeholder: theme.placeholder.clone(),
            session_note: theme.session_note.clone(),
            pages_heading: theme.pages_heading.clone(),
            notice: None,
            pages,
        }
    }

    /// Attach the message from a save action
    pub fn with_notice(mut self, outcome: &SaveOutcome) -> Self {
        self.notice = Some(Notice::from(outcome));
        self
    }

    /// Render as a standalone HTML page whose form posts to `action`
    pub fn to_html(&self, action: &str) -> String {
        let mut html = String::new();

        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n",
            html_escape(&self.heading)
        );
        let _ = write!(
            html,
            "<main class=\"notebook\">\n<h1>{}</h1>\n<p>{}</p>\n",
            html_escape(&self.heading),
            html_escape(&self.tagline)
        );

        if let Some(notice) = &self.notice {
            let class = if notice.success { "success" } else { "error" };
            let _ = write!(
                html,
                "<p class=\"notice {}\" role=\"status\">{}</p>\n",
                class,
                html_escape(&notice.message)
            );
        }

        let _ = write!(
            html,
            "<form method=\"post\" action=\"{}\">\n<textarea name=\"text\" rows=\"10\" placeholder=\"{}\"></textarea>\n<button type=\"submit\">Save</button>\n<small>{}</small>\n</form>\n<hr>\n<h3>{}</h3>\n",
            html_escape(action),
            html_escape(&self.placeholder),
            html_escape(&self.session_note),
            html_escape(&self.pages_heading)
        );

        match &self.pages {
            Pages::Empty { placeholder } => {
                let _ = write!(html, "<p class=\"empty\">{}</p>\n", html_escape(placeholder));
            }
            Pages::Entries(pages) => {
                for page in pages {
                    let _ = write!(
                        html,
                        "<article class=\"entry\">\n<div class=\"date\"><strong>📅 {}</strong></div>\n<div class=\"text\">{}</div>\n</article>\n",
                        html_escape(&page.date),
                        html_escape(&page.text).replace('\n', "<br>")
                    );
                }
            }
        }

        html.push_str("</main>\n</body>\n</html>\n");
        html
    }

    /// Render as plain text for a terminal
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{}", self.pages_heading);
        let _ = writeln!(out, "{}", "-".repeat(40));

        match &self.pages {
            Pages::Empty { placeholder } => {
                let _ = writeln!(out, "{}", placeholder);
            }
            Pages::Entries(pages) => {
                for page in pages {
                    let _ = writeln!(out, "📅 {}", page.date);
                    for line in page.text.lines() {
                        let _ = writeln!(out, "  {}", line);
                    }
                    out.push('\n');
                }
            }
        }

        out
    }
}

/// Escapes HTML so entry text cannot inject markup
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::EntryLog;
    use crate::notebook::actions::{render, save};

    #[test]
    fn test_html_escapes_entry_text() {
        let mut log = EntryLog::new();
        log.append("<script>alert(1)</script>").unwrap();

        let html = render(&log, &Theme::default()).to_html("/notebook/x");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_html_keeps_line_breaks() {
        let mut log = EntryLog::new();
        log.append("first line\nsecond line").unwrap();

        let html = render(&log, &Theme::default()).to_html("/notebook/x");
        assert!(html.contains("first line<br>second line"));
    }

    #[test]
    fn test_html_empty_placeholder() {
        let theme = Theme::default();
        let html = render(&EntryLog::new(), &theme).to_html("/notebook/x");
        assert!(html.contains("class=\"empty\""));
        assert!(html.contains(&html_escape(&theme.empty_message)));
        assert!(!html.contains("<article"));
    }

    #[test]
    fn test_html_notice() {
        let theme = Theme::default();
        let mut log = EntryLog::new();
        let outcome = save(&mut log, "", &theme);

        let html = render(&log, &theme).with_notice(&outcome).to_html("/notebook/x");
        assert!(html.contains("notice error"));
        assert!(html.contains(&theme.rejected_message));
    }

    #[test]
    fn test_text_newest_first() {
        let theme = Theme::default();
        let mut log = EntryLog::new();
        log.append("First thought").unwrap();
        log.append("Second thought").unwrap();

        let text = render(&log, &theme).to_text();
        let second = text.find("Second thought").unwrap();
        let first = text.find("First thought").unwrap();
        assert!(second < first);
    }
}
