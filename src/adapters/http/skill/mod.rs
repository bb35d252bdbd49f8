//! HTTP adapter for the host platform webhook.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, OutputSpeechDto, SkillRequestEnvelope, SkillResponseEnvelope, ENVELOPE_VERSION,
};
pub use handlers::SkillAppState;
pub use routes::{skill_app, skill_routes};
