//! Notebook page copy
//!
//! Every wording the notebook shows lives here so the HTTP page and the
//! terminal notebook say the same things. Fields left out of the `[theme]`
//! config section fall back to the Moonlit Fireplace copy.

use serde::{Deserialize, Serialize};

/// Text shown around the entry log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Theme {
    pub title: String,
    pub icon: String,
    pub tagline: String,
    /// Hint shown in the empty text box
    pub placeholder: String,
    /// Reminder that nothing outlives the session
    pub session_note: String,
    /// Heading above the list of entries
    pub pages_heading: String,
    /// Acknowledgement after a successful save
    pub saved_message: String,
    /// Validation message for an empty entry
    pub rejected_message: String,
    /// Placeholder when the notebook has no entries
    pub empty_message: String,
}

impl Theme {
    /// The Moonlit Fireplace Journal copy
    pub fn moonlit() -> Self {
        Self {
            title: "Moonlit Fireplace Journal".to_string(),
            icon: "🌙".to_string(),
            tagline: "A warm, lined notebook for quiet thoughts.".to_string(),
            placeholder: "Write under the moonlight...".to_string(),
            session_note: "Your notebook saves for this browser session.".to_string(),
            pages_heading: "📔 Notebook Pages".to_string(),
            saved_message: "Saved — your entry has been added to the notebook.".to_string(),
            rejected_message: "Please write something before saving.".to_string(),
            empty_message: "Your notebook is empty — the night is ready for your first thought ✨"
                .to_string(),
        }
    }

    /// Title with the icon in front, as used for page headers
    pub fn heading(&self) -> String {
        if self.icon.is_empty() {
            self.title.clone()
        } else {
            format!("{} {}", self.icon, self.title)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::moonlit()
    }
}
