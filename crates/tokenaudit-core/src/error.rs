//! Fatal pre-validation error types
//!
//! Copyright (c) 2025 Tokenaudit Team
//! Licensed under the Apache-2.0 license
//!
//! Only conditions that prevent a report from being produced at all live
//! here: unreadable or unparseable input documents, or a document whose
//! root is not an object. Every problem found *inside* a parseable tree is
//! captured as a finding in the report instead (see [`crate::report`]).

use crate::tree::Layer;
use std::path::PathBuf;

/// Result type alias for audit operations
pub type Result<T> = std::result::Result<T, AuditError>;

/// Fatal errors that abort a run before a report exists
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    /// Token document could not be read from disk
    #[error("failed to read token document {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Token document is not valid JSON
    #[error("token document {} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The root of a token tree must be a JSON object
    #[error("{layer} tree root must be an object")]
    InvalidRoot { layer: Layer },
}
