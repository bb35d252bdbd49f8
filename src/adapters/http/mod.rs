//! HTTP adapters - REST API implementations.

pub mod skill;

// Re-export key types for convenience
pub use skill::{skill_app, skill_routes, SkillAppState};
