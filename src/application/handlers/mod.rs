//! Application handlers.
//!
//! Handlers that orchestrate domain operations for one inbound request.

pub mod skill;

pub use skill::{MusicBuffSkill, SkillExecutor, SkillHandler};
