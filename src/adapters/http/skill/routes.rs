//! HTTP routes for the skill endpoint.

use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use super::handlers::{handle_skill_request, health, SkillAppState};

/// Creates the skill router.
///
/// Routes:
/// - `POST /api/skill` - Host platform webhook
/// - `GET /health` - Liveness probe
pub fn skill_routes(state: SkillAppState) -> Router {
    Router::new()
        .route("/api/skill", post(handle_skill_request))
        .route("/health", get(health))
        .with_state(state)
}

/// Skill router wrapped with request tracing and a request timeout.
pub fn skill_app(state: SkillAppState, request_timeout: Duration) -> Router {
    skill_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
}
