//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MUSIC_BUFF` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a runnable service.
//!
//! # Example
//!
//! ```no_run
//! use music_buff::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod error;
mod server;
mod skill;
mod wikipedia;

pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use skill::SkillConfig;
pub use wikipedia::{WikipediaConfig, DEFAULT_ENDPOINT_PREFIX};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Skill identity and default artist
    #[serde(default)]
    pub skill: SkillConfig,

    /// Encyclopedia API client settings
    #[serde(default)]
    pub wikipedia: WikipediaConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MUSIC_BUFF` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MUSIC_BUFF__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `MUSIC_BUFF__SKILL__APPLICATION_ID=...` -> `skill.application_id = ...`
    /// - `MUSIC_BUFF__WIKIPEDIA__EXTRACTION=structured` -> `wikipedia.extraction`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MUSIC_BUFF")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Besides per-section checks, every lookup attempt, retry and backoff
    /// together must fit inside the lookup deadline so the host always
    /// receives a reply.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.skill.validate()?;
        self.wikipedia.validate()?;
        if self.wikipedia.worst_case_duration() >= self.server.lookup_deadline() {
            return Err(ValidationError::LookupBudgetExceedsRequestTimeout);
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::artist::ExtractionStrategy;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "MUSIC_BUFF__SERVER__PORT",
        "MUSIC_BUFF__SERVER__ENVIRONMENT",
        "MUSIC_BUFF__SKILL__APPLICATION_ID",
        "MUSIC_BUFF__SKILL__DEFAULT_ARTIST",
        "MUSIC_BUFF__WIKIPEDIA__TIMEOUT_SECS",
        "MUSIC_BUFF__WIKIPEDIA__EXTRACTION",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.skill.default_artist, "Nickelback");
        assert_eq!(config.wikipedia.endpoint_prefix, DEFAULT_ENDPOINT_PREFIX);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MUSIC_BUFF__SERVER__PORT", "3000");
        env::set_var("MUSIC_BUFF__SKILL__APPLICATION_ID", "amzn1.ask.skill.test");
        env::set_var("MUSIC_BUFF__SKILL__DEFAULT_ARTIST", "Rick_Astley");
        env::set_var("MUSIC_BUFF__WIKIPEDIA__EXTRACTION", "structured");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.skill.enforced_application_id(),
            Some("amzn1.ask.skill.test")
        );
        assert_eq!(config.skill.default_artist, "Rick_Astley");
        assert_eq!(config.wikipedia.extraction, ExtractionStrategy::Structured);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MUSIC_BUFF__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_lookup_timeout_must_fit_request_timeout() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MUSIC_BUFF__WIKIPEDIA__TIMEOUT_SECS", "30");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::LookupBudgetExceedsRequestTimeout)
        );
    }

    #[test]
    fn test_retry_budget_must_fit_request_timeout() {
        let mut config = AppConfig::default();
        config.server.request_timeout_secs = 2;
        config.wikipedia.timeout_secs = 1;
        config.wikipedia.max_retries = 1;
        config.wikipedia.retry_backoff_ms = 250;

        assert_eq!(
            config.validate(),
            Err(ValidationError::LookupBudgetExceedsRequestTimeout)
        );

        config.wikipedia.max_retries = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_retry_budget_fits_request_timeout() {
        let config = AppConfig::default();
        assert!(config.wikipedia.worst_case_duration() < config.server.lookup_deadline());
        assert!(config.validate().is_ok());
    }
}
