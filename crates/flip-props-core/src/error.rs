//! Error types for flip-props
//!
//! Normalization itself never fails: every recoverable problem becomes a
//! diagnostic. `Error` covers the fallible edges around it (strict
//! validation, JSON ingestion, file access).

use thiserror::Error;

use crate::validate::ValidationReport;

/// flip-props error types
#[derive(Debug, Error)]
pub enum Error {
    /// Raw configuration violates the declared schema
    #[error("Validation error: {0}")]
    Validation(ValidationReport),

    /// Raw configuration is well-formed JSON but not usable as a configuration
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON decoding or encoding failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File access failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for flip-props operations
pub type Result<T> = std::result::Result<T, Error>;
