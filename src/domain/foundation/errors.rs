//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Envelope errors
    MalformedRequest,

    // Routing errors
    UnrecognizedIntent,
    UnsupportedRequestType,
    IntentNotImplemented,

    // Authorization errors
    ApplicationIdMismatch,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::MalformedRequest => "MALFORMED_REQUEST",
            ErrorCode::UnrecognizedIntent => "UNRECOGNIZED_INTENT",
            ErrorCode::UnsupportedRequestType => "UNSUPPORTED_REQUEST_TYPE",
            ErrorCode::IntentNotImplemented => "INTENT_NOT_IMPLEMENTED",
            ErrorCode::ApplicationIdMismatch => "APPLICATION_ID_MISMATCH",
        };
        write!(f, "{}", s)
    }
}
