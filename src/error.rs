//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type for document encoding, decoding and validation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised around constraint documents.
///
/// Building an AST never fails; these only arise when a document crosses
/// the wire or is checked against a mission model.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed constraint document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("constraint document '{name}' failed validation with {} error(s)", .errors.len())]
    Invalid {
        name: String,
        errors: Vec<ValidationError>,
    },
}
