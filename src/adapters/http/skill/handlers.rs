//! HTTP handlers for the skill endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{debug, warn};

use crate::application::handlers::skill::SkillExecutor;
use crate::domain::foundation::ErrorCode;
use crate::domain::skill::{InboundRequest, SkillError};

use super::dto::{ErrorResponse, SkillRequestEnvelope, SkillResponseEnvelope};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SkillAppState {
    executor: SkillExecutor,
}

impl SkillAppState {
    pub fn new(executor: SkillExecutor) -> Self {
        Self { executor }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/skill - Handle one request from the host platform
pub async fn handle_skill_request(
    State(state): State<SkillAppState>,
    payload: Result<Json<SkillRequestEnvelope>, JsonRejection>,
) -> Response {
    let Json(envelope) = match payload {
        Ok(envelope) => envelope,
        Err(rejection) => {
            warn!(error = %rejection, "Rejected malformed skill envelope");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(
                    ErrorCode::MalformedRequest,
                    rejection.body_text(),
                )),
            )
                .into_response();
        }
    };

    debug!(request_type = %envelope.request.request_type, "Skill request received");

    let request = match InboundRequest::try_from(envelope) {
        Ok(request) => request,
        Err(e) => return handle_skill_error(e),
    };

    match state.executor.execute(request).await {
        Ok(outcome) => {
            let response: SkillResponseEnvelope = outcome.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_skill_error(e),
    }
}

/// GET /health - Liveness probe
pub async fn health() -> Response {
    (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_skill_error(error: SkillError) -> Response {
    let status = match &error {
        SkillError::UnrecognizedIntent(_)
        | SkillError::UnsupportedRequestType(_)
        | SkillError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
        SkillError::ApplicationIdMismatch { .. } => StatusCode::FORBIDDEN,
        SkillError::IntentNotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
    };
    warn!(%status, error = %error, "Skill request failed");
    (status, Json(ErrorResponse::from(&error))).into_response()
}
