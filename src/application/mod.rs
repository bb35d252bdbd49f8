//! Application layer - Skill handlers and request dispatch.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{MusicBuffSkill, SkillExecutor, SkillHandler};
