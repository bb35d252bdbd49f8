//! HTTP DTOs for the skill endpoint.
//!
//! These mirror the host platform's JSON envelopes and decouple them from
//! domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{ApplicationId, RequestId, SessionId};
use crate::domain::skill::{
    CardPayload, InboundRequest, OutgoingResponse, RequestKind, SkillError, SkillOutcome, Slots,
    SpeechFormat, SpeechPayload,
};

/// Envelope version written on every response.
pub const ENVELOPE_VERSION: &str = "1.0";

const LAUNCH_REQUEST: &str = "LaunchRequest";
const INTENT_REQUEST: &str = "IntentRequest";
const SESSION_ENDED_REQUEST: &str = "SessionEndedRequest";

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request envelope posted by the host platform.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequestEnvelope {
    #[serde(default)]
    pub version: Option<String>,
    pub session: Option<SessionDto>,
    pub request: RequestDto,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    #[serde(default)]
    pub new: bool,
    pub session_id: String,
    pub application: Option<ApplicationDto>,
    #[serde(default)]
    pub attributes: Option<serde_json::Value>,
    pub user: Option<UserDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
    pub application_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub user_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDto {
    #[serde(rename = "type")]
    pub request_type: String,
    pub request_id: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub intent: Option<IntentDto>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntentDto {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, SlotDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl TryFrom<SkillRequestEnvelope> for InboundRequest {
    type Error = SkillError;

    fn try_from(envelope: SkillRequestEnvelope) -> Result<Self, Self::Error> {
        let session = envelope
            .session
            .ok_or_else(|| SkillError::malformed("request has no session"))?;
        let request = envelope.request;

        let kind = match request.request_type.as_str() {
            LAUNCH_REQUEST => RequestKind::Launch,
            INTENT_REQUEST => {
                let intent = request
                    .intent
                    .ok_or_else(|| SkillError::malformed("intent request has no intent"))?;
                let slots = intent
                    .slots
                    .into_iter()
                    .filter_map(|(name, slot)| slot.value.map(|value| (name, value)))
                    .fold(Slots::new(), |slots, (name, value)| slots.with(name, value));
                RequestKind::Intent {
                    name: intent.name,
                    slots,
                }
            }
            SESSION_ENDED_REQUEST => RequestKind::SessionEnded {
                reason: request.reason,
            },
            other => return Err(SkillError::unsupported_request_type(other)),
        };

        let mut inbound = InboundRequest::new(
            RequestId::new(request.request_id)?,
            SessionId::new(session.session_id)?,
            kind,
        );
        if let Some(application) = session.application {
            inbound = inbound.with_application_id(ApplicationId::new(application.application_id)?);
        }
        if session.new {
            inbound = inbound.starting_session();
        }
        Ok(inbound)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response envelope returned to the host platform.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponseEnvelope {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<serde_json::Map<String, serde_json::Value>>,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeechDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<RepromptDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum OutputSpeechDto {
    PlainText { text: String },
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepromptDto {
    pub output_speech: OutputSpeechDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CardDto {
    Simple { title: String, content: String },
}

impl From<&SpeechPayload> for OutputSpeechDto {
    fn from(speech: &SpeechPayload) -> Self {
        match speech.format() {
            SpeechFormat::Plain => OutputSpeechDto::PlainText {
                text: speech.text().to_string(),
            },
            SpeechFormat::MarkedUp => OutputSpeechDto::Ssml {
                ssml: speech.text().to_string(),
            },
        }
    }
}

impl From<&CardPayload> for CardDto {
    fn from(card: &CardPayload) -> Self {
        CardDto::Simple {
            title: card.title.clone(),
            content: card.body.clone(),
        }
    }
}

impl From<&OutgoingResponse> for ResponseBody {
    fn from(response: &OutgoingResponse) -> Self {
        Self {
            output_speech: Some(response.speech().into()),
            reprompt: response.reprompt().map(|speech| RepromptDto {
                output_speech: speech.into(),
            }),
            card: response.card().map(Into::into),
            should_end_session: Some(response.should_end_session()),
        }
    }
}

impl From<SkillOutcome> for SkillResponseEnvelope {
    fn from(outcome: SkillOutcome) -> Self {
        match outcome {
            SkillOutcome::Reply(response) => Self {
                version: ENVELOPE_VERSION.to_string(),
                session_attributes: Some(serde_json::Map::new()),
                response: (&response).into(),
            },
            SkillOutcome::NoReply => Self {
                version: ENVELOPE_VERSION.to_string(),
                session_attributes: None,
                response: ResponseBody::default(),
            },
        }
    }
}

/// Error body for rejected requests.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

impl From<&SkillError> for ErrorResponse {
    fn from(error: &SkillError) -> Self {
        Self::new(error.code(), error.to_string())
    }
}
