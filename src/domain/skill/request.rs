//! Inbound requests as seen by the skill.

use std::collections::HashMap;

use crate::domain::foundation::{ApplicationId, RequestId, SessionId};

/// Slot values attached to an intent, keyed by slot name.
///
/// Only slots that carry a value are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slots(HashMap<String, String>);

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a slot value, returning the updated set.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Returns the raw value of a slot, if the user supplied one.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// What the host is asking the skill to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    /// The user opened the skill without a specific question.
    Launch,
    /// The user asked something the language layer mapped to an intent.
    Intent { name: String, slots: Slots },
    /// The session closed; no reply is expected.
    SessionEnded { reason: Option<String> },
}

/// A single inbound request, consumed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundRequest {
    pub request_id: RequestId,
    pub session_id: SessionId,
    /// Skill the host believes it is calling.
    pub application_id: Option<ApplicationId>,
    /// Whether this request opens a new session.
    pub new_session: bool,
    pub kind: RequestKind,
}

impl InboundRequest {
    pub fn new(request_id: RequestId, session_id: SessionId, kind: RequestKind) -> Self {
        Self {
            request_id,
            session_id,
            application_id: None,
            new_session: false,
            kind,
        }
    }

    /// Creates a launch request.
    pub fn launch(request_id: RequestId, session_id: SessionId) -> Self {
        Self::new(request_id, session_id, RequestKind::Launch)
    }

    /// Creates an intent request.
    pub fn intent(
        request_id: RequestId,
        session_id: SessionId,
        name: impl Into<String>,
        slots: Slots,
    ) -> Self {
        Self::new(
            request_id,
            session_id,
            RequestKind::Intent {
                name: name.into(),
                slots,
            },
        )
    }

    /// Creates a session-ended notification.
    pub fn session_ended(
        request_id: RequestId,
        session_id: SessionId,
        reason: Option<String>,
    ) -> Self {
        Self::new(request_id, session_id, RequestKind::SessionEnded { reason })
    }

    /// Sets the application id.
    pub fn with_application_id(mut self, application_id: ApplicationId) -> Self {
        self.application_id = Some(application_id);
        self
    }

    /// Marks the request as the first of its session.
    pub fn starting_session(mut self) -> Self {
        self.new_session = true;
        self
    }

    /// Name of the requested intent, if this is an intent request.
    pub fn intent_name(&self) -> Option<&str> {
        match &self.kind {
            RequestKind::Intent { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Raw value of a slot on an intent request.
    pub fn slot(&self, name: &str) -> Option<&str> {
        match &self.kind {
            RequestKind::Intent { slots, .. } => slots.value(name),
            _ => None,
        }
    }
}
