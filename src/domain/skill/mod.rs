//! Skill domain module.
//!
//! Request, intent and response types for one request/response exchange with
//! the host voice platform. Nothing here outlives a single request.

mod errors;
mod intent;
pub mod messages;
mod request;
mod response;
mod speech;

pub use errors::SkillError;
pub use intent::Intent;
pub use request::{InboundRequest, RequestKind, Slots};
pub use response::{OutgoingResponse, ResponseMode, SkillOutcome};
pub use speech::{CardPayload, SpeechFormat, SpeechPayload};
