//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use std::io;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Fatal precondition from the audit library (unreadable or
    /// unparseable token document)
    #[error("Audit error: {0}")]
    Audit(#[from] tokenaudit_core::AuditError),

    /// JSON serialization error while rendering the report
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The audit ran to completion and found critical violations
    #[error("audit found {count} critical finding(s)")]
    NotReady { count: usize },

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    ///
    /// Warnings never reach this path: only critical findings make the
    /// audit exit non-zero.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotReady { .. } => 1,
            Self::Audit(_) => 2,
            Self::Io(_) => 3,
            Self::Json(_) => 4,
            Self::Other { .. } => 99,
        }
    }

    /// Whether the report was already rendered before this error surfaced
    pub fn report_was_rendered(&self) -> bool {
        matches!(self, Self::NotReady { .. })
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::NotReady { count: 3 }.exit_code(), 1);
        assert_eq!(Error::other("boom").exit_code(), 99);
    }

    #[test]
    fn test_not_ready_display() {
        let error = Error::NotReady { count: 2 };
        assert_eq!(error.to_string(), "audit found 2 critical finding(s)");
        assert!(error.report_was_rendered());
    }
}
