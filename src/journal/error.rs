//! Journal error types
//!
//! The entry log has exactly one failure: the submitted text was empty once
//! surrounding whitespace was trimmed.

use thiserror::Error;

/// Errors that can occur when writing to the entry log
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JournalError {
    /// Submitted text was empty or whitespace-only
    #[error("Rejected: empty entry")]
    Rejected,
}

/// Result type alias for journal operations
pub type JournalResult<T> = Result<T, JournalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(JournalError::Rejected.to_string(), "Rejected: empty entry");
    }
}
