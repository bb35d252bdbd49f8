//! SkillHandler - Capability interface a skill implements.
//!
//! The executor calls these hooks; a skill supplies its behavior for launch
//! and for each recognized intent. Session hooks default to logging.

use async_trait::async_trait;
use tracing::info;

use crate::domain::skill::{InboundRequest, Intent, OutgoingResponse, SkillError};

#[async_trait]
pub trait SkillHandler: Send + Sync {
    /// Called before routing when the request opens a new session.
    async fn on_session_started(&self, request: &InboundRequest) {
        info!(
            request_id = %request.request_id,
            session_id = %request.session_id,
            "Session started"
        );
    }

    /// Called when the user opens the skill without asking anything.
    async fn on_launch(&self, request: &InboundRequest) -> OutgoingResponse;

    /// Called for every recognized intent.
    async fn on_intent(
        &self,
        intent: Intent,
        request: &InboundRequest,
    ) -> Result<OutgoingResponse, SkillError>;

    /// Called when the host closes the session. No reply is sent.
    async fn on_session_ended(&self, request: &InboundRequest) {
        info!(
            request_id = %request.request_id,
            session_id = %request.session_id,
            "Session ended"
        );
    }
}
