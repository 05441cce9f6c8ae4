//! Moonlit Journal Core
//!
//! - **types**: `JournalEntry`, the immutable `{text, timestamp}` record
//! - **log**: `EntryLog`, the append-only session journal
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust
//! use moonlit::journal::{EntryLog, JournalError};
//!
//! let mut log = EntryLog::new();
//! log.append("First thought").unwrap();
//! log.append("Second thought").unwrap();
//! assert_eq!(log.append("   "), Err(JournalError::Rejected));
//!
//! let newest = log.list_most_recent_first().next().unwrap();
//! assert_eq!(newest.text(), "Second thought");
//! ```

pub mod error;
pub mod log;
pub mod types;

pub use error::{JournalError, JournalResult};
pub use log::EntryLog;
pub use types::{JournalEntry, DISPLAY_FORMAT};
