//! SkillExecutor - Routes one inbound request through a SkillHandler.
//!
//! Order of work for a request:
//! 1. Reject requests addressed to another application id (when one is configured)
//! 2. Run the session-started hook for new sessions
//! 3. Dispatch on the request kind; intent names are parsed into [`Intent`]
//!    and unknown names fail with [`SkillError::UnrecognizedIntent`]

use std::sync::Arc;

use tracing::{debug, warn};

use super::SkillHandler;
use crate::domain::foundation::ApplicationId;
use crate::domain::skill::{InboundRequest, Intent, RequestKind, SkillError, SkillOutcome};

#[derive(Clone)]
pub struct SkillExecutor {
    handler: Arc<dyn SkillHandler>,
    application_id: Option<ApplicationId>,
}

impl SkillExecutor {
    pub fn new(handler: Arc<dyn SkillHandler>) -> Self {
        Self {
            handler,
            application_id: None,
        }
    }

    /// Only accept requests addressed to `application_id`.
    pub fn with_application_id(mut self, application_id: ApplicationId) -> Self {
        self.application_id = Some(application_id);
        self
    }

    pub async fn execute(&self, request: InboundRequest) -> Result<SkillOutcome, SkillError> {
        self.verify_application(&request)?;

        if request.new_session {
            self.handler.on_session_started(&request).await;
        }

        match &request.kind {
            RequestKind::Launch => Ok(SkillOutcome::Reply(self.handler.on_launch(&request).await)),
            RequestKind::Intent { name, .. } => {
                let intent: Intent = name.parse().map_err(|err| {
                    warn!(request_id = %request.request_id, intent = %name, "Unrecognized intent");
                    err
                })?;
                debug!(request_id = %request.request_id, %intent, "Dispatching intent");
                let response = self.handler.on_intent(intent, &request).await?;
                Ok(SkillOutcome::Reply(response))
            }
            RequestKind::SessionEnded { reason } => {
                debug!(request_id = %request.request_id, reason = ?reason, "Session end notification");
                self.handler.on_session_ended(&request).await;
                Ok(SkillOutcome::NoReply)
            }
        }
    }

    fn verify_application(&self, request: &InboundRequest) -> Result<(), SkillError> {
        let Some(expected) = &self.application_id else {
            return Ok(());
        };

        match &request.application_id {
            Some(actual) if actual == expected => Ok(()),
            Some(actual) => Err(SkillError::application_id_mismatch(
                expected.as_str(),
                actual.as_str(),
            )),
            None => Err(SkillError::application_id_mismatch(expected.as_str(), "<missing>")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{RequestId, SessionId};
    use crate::domain::skill::{OutgoingResponse, Slots, SpeechPayload};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records which hooks ran.
    #[derive(Default)]
    struct RecordingHandler {
        hooks: Mutex<Vec<String>>,
    }

    impl RecordingHandler {
        fn hooks(&self) -> Vec<String> {
            self.hooks.lock().unwrap().clone()
        }

        fn record(&self, hook: impl Into<String>) {
            self.hooks.lock().unwrap().push(hook.into());
        }
    }

    #[async_trait]
    impl SkillHandler for RecordingHandler {
        async fn on_session_started(&self, _request: &InboundRequest) {
            self.record("session_started");
        }

        async fn on_launch(&self, _request: &InboundRequest) -> OutgoingResponse {
            self.record("launch");
            OutgoingResponse::tell(SpeechPayload::plain("launched"))
        }

        async fn on_intent(
            &self,
            intent: Intent,
            _request: &InboundRequest,
        ) -> Result<OutgoingResponse, SkillError> {
            self.record(intent.name());
            Ok(OutgoingResponse::tell(SpeechPayload::plain(intent.name())))
        }

        async fn on_session_ended(&self, _request: &InboundRequest) {
            self.record("session_ended");
        }
    }

    fn request_id() -> RequestId {
        RequestId::new("EdwRequestId.1").unwrap()
    }

    fn session_id() -> SessionId {
        SessionId::new("SessionId.1").unwrap()
    }

    fn executor() -> (Arc<RecordingHandler>, SkillExecutor) {
        let handler = Arc::new(RecordingHandler::default());
        let executor = SkillExecutor::new(handler.clone());
        (handler, executor)
    }

    #[tokio::test]
    async fn launch_runs_session_start_then_launch() {
        let (handler, executor) = executor();
        let request = InboundRequest::launch(request_id(), session_id()).starting_session();

        let outcome = executor.execute(request).await.unwrap();

        assert!(outcome.reply().is_some());
        assert_eq!(handler.hooks(), vec!["session_started", "launch"]);
    }

    #[tokio::test]
    async fn existing_session_skips_session_start() {
        let (handler, executor) = executor();
        let request = InboundRequest::launch(request_id(), session_id());

        executor.execute(request).await.unwrap();

        assert_eq!(handler.hooks(), vec!["launch"]);
    }

    #[tokio::test]
    async fn intent_name_is_parsed_and_dispatched() {
        let (handler, executor) = executor();
        let request =
            InboundRequest::intent(request_id(), session_id(), "AMAZON.HelpIntent", Slots::new());

        let outcome = executor.execute(request).await.unwrap();

        assert_eq!(
            outcome.reply().map(|r| r.speech().text().to_string()),
            Some("AMAZON.HelpIntent".to_string())
        );
        assert_eq!(handler.hooks(), vec!["AMAZON.HelpIntent"]);
    }

    #[tokio::test]
    async fn unknown_intent_is_an_error_and_runs_no_handler() {
        let (handler, executor) = executor();
        let request =
            InboundRequest::intent(request_id(), session_id(), "PlayMusicIntent", Slots::new());

        let result = executor.execute(request).await;

        assert_eq!(result, Err(SkillError::unrecognized_intent("PlayMusicIntent")));
        assert!(handler.hooks().is_empty());
    }

    #[tokio::test]
    async fn session_ended_produces_no_reply() {
        let (handler, executor) = executor();
        let request = InboundRequest::session_ended(
            request_id(),
            session_id(),
            Some("USER_INITIATED".to_string()),
        );

        let outcome = executor.execute(request).await.unwrap();

        assert_eq!(outcome, SkillOutcome::NoReply);
        assert_eq!(handler.hooks(), vec!["session_ended"]);
    }

    #[tokio::test]
    async fn matching_application_id_is_accepted() {
        let (_handler, executor) = executor();
        let app_id = ApplicationId::new("amzn1.ask.skill.music").unwrap();
        let executor = executor.with_application_id(app_id.clone());
        let request = InboundRequest::launch(request_id(), session_id()).with_application_id(app_id);

        assert!(executor.execute(request).await.is_ok());
    }

    #[tokio::test]
    async fn mismatched_application_id_is_rejected_before_hooks() {
        let (handler, executor) = executor();
        let executor =
            executor.with_application_id(ApplicationId::new("amzn1.ask.skill.music").unwrap());
        let request = InboundRequest::launch(request_id(), session_id())
            .with_application_id(ApplicationId::new("amzn1.ask.skill.other").unwrap())
            .starting_session();

        let result = executor.execute(request).await;

        assert_eq!(
            result,
            Err(SkillError::application_id_mismatch(
                "amzn1.ask.skill.music",
                "amzn1.ask.skill.other"
            ))
        );
        assert!(handler.hooks().is_empty());
    }

    #[tokio::test]
    async fn missing_application_id_is_rejected_when_enforced() {
        let (_handler, executor) = executor();
        let executor =
            executor.with_application_id(ApplicationId::new("amzn1.ask.skill.music").unwrap());
        let request = InboundRequest::launch(request_id(), session_id());

        assert!(matches!(
            executor.execute(request).await,
            Err(SkillError::ApplicationIdMismatch { .. })
        ));
    }
}
