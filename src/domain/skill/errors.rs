//! Skill-specific error types.

use thiserror::Error;

use super::Intent;
use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors raised while routing a request to a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkillError {
    /// The intent name is not one of the recognized intents.
    #[error("unrecognized intent: {0}")]
    UnrecognizedIntent(String),

    /// The host sent a request type the skill does not route.
    #[error("unsupported request type: {0}")]
    UnsupportedRequestType(String),

    /// The intent is recognized but has no behavior yet.
    #[error("intent not implemented: {}", .0.name())]
    IntentNotImplemented(Intent),

    /// The request targets a different skill.
    #[error("application id mismatch: expected {expected}, got {actual}")]
    ApplicationIdMismatch { expected: String, actual: String },

    /// The request envelope is missing required data.
    #[error("malformed request: {0}")]
    MalformedRequest(String),
}

impl SkillError {
    pub fn unrecognized_intent(name: impl Into<String>) -> Self {
        SkillError::UnrecognizedIntent(name.into())
    }

    pub fn unsupported_request_type(kind: impl Into<String>) -> Self {
        SkillError::UnsupportedRequestType(kind.into())
    }

    pub fn application_id_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        SkillError::ApplicationIdMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        SkillError::MalformedRequest(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SkillError::UnrecognizedIntent(_) => ErrorCode::UnrecognizedIntent,
            SkillError::UnsupportedRequestType(_) => ErrorCode::UnsupportedRequestType,
            SkillError::IntentNotImplemented(_) => ErrorCode::IntentNotImplemented,
            SkillError::ApplicationIdMismatch { .. } => ErrorCode::ApplicationIdMismatch,
            SkillError::MalformedRequest(_) => ErrorCode::MalformedRequest,
        }
    }
}

impl From<ValidationError> for SkillError {
    fn from(err: ValidationError) -> Self {
        SkillError::MalformedRequest(err.to_string())
    }
}
