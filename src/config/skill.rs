//! Skill identity and behavior configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::skill::messages::DEFAULT_ARTIST;

/// Skill configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SkillConfig {
    /// Application id registered with the host platform.
    /// Requests for any other id are rejected when set.
    pub application_id: Option<String>,

    /// Artist looked up when the request names none
    #[serde(default = "default_artist")]
    pub default_artist: String,
}

impl SkillConfig {
    /// Application id to enforce, ignoring blank values
    pub fn enforced_application_id(&self) -> Option<&str> {
        self.application_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// Validate skill configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_artist.trim().is_empty() {
            return Err(ValidationError::MissingRequired("SKILL__DEFAULT_ARTIST"));
        }
        Ok(())
    }
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            application_id: None,
            default_artist: default_artist(),
        }
    }
}

fn default_artist() -> String {
    DEFAULT_ARTIST.to_string()
}
