//! # Moonlit
//!
//! A session-scoped journal: write a thought, see it at the top of the
//! notebook, lose everything when the session ends.
//!
//! ## Modules
//!
//! - [`journal`]: the append-only entry log
//! - [`notebook`]: save/render handlers, page copy and views
//! - [`session`]: one entry log per HTTP session
//! - [`api`]: REST API and notebook page with Axum
//! - [`terminal`]: the notebook over stdin/stdout
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use moonlit::journal::EntryLog;
//! use moonlit::notebook::{render, save, Pages, Theme};
//!
//! let theme = Theme::default();
//! let mut log = EntryLog::new();
//!
//! assert!(save(&mut log, "First thought", &theme).is_saved());
//! assert!(!save(&mut log, "   ", &theme).is_saved());
//!
//! match render(&log, &theme).pages {
//!     Pages::Entries(pages) => assert_eq!(pages[0].text, "First thought"),
//!     Pages::Empty { .. } => unreachable!(),
//! }
//! ```

pub mod api;
pub mod config;
pub mod journal;
pub mod logging;
pub mod notebook;
pub mod session;
pub mod terminal;

// Re-export top-level types for convenience
pub use journal::{EntryLog, JournalEntry, JournalError, JournalResult};

pub use notebook::{NotebookView, Pages, SaveOutcome, Theme};

pub use session::{SessionError, SessionId, SessionRegistry};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, LoggingConfig};

pub use terminal::TerminalNotebook;
