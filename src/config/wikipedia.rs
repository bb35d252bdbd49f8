//! Encyclopedia API client configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::artist::ExtractionStrategy;

/// Query URL prefix; the lookup key is appended as the `titles` value.
pub const DEFAULT_ENDPOINT_PREFIX: &str = "https://en.wikipedia.org/w/api.php?action=query&prop=extracts&format=json&explaintext=&exsectionformat=plain&redirects=&titles=";

/// Encyclopedia API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WikipediaConfig {
    /// Endpoint and query prefix the key is appended to
    #[serde(default = "default_endpoint_prefix")]
    pub endpoint_prefix: String,

    /// Per-attempt timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Retries after a transport failure or timeout
    #[serde(default = "default_retries")]
    pub max_retries: u32,

    /// Delay before the first retry in milliseconds; doubles per attempt
    #[serde(default = "default_backoff")]
    pub retry_backoff_ms: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// How the excerpt is located in the response body
    #[serde(default)]
    pub extraction: ExtractionStrategy,
}

impl WikipediaConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get initial retry backoff as Duration
    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    /// Longest a lookup can take: every attempt timing out plus the backoff
    /// before each retry.
    pub fn worst_case_duration(&self) -> Duration {
        let attempts = self.max_retries + 1;
        let backoff: Duration = (0..self.max_retries)
            .map(|retry| self.retry_backoff() * 2u32.saturating_pow(retry))
            .sum();
        self.timeout() * attempts + backoff
    }

    /// Validate encyclopedia configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.endpoint_prefix.trim().is_empty() {
            return Err(ValidationError::MissingRequired("WIKIPEDIA__ENDPOINT_PREFIX"));
        }
        if !self.endpoint_prefix.starts_with("https://")
            && !self.endpoint_prefix.starts_with("http://")
        {
            return Err(ValidationError::InvalidEndpoint);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.max_retries > 5 {
            return Err(ValidationError::TooManyRetries);
        }
        Ok(())
    }
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            endpoint_prefix: default_endpoint_prefix(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
            retry_backoff_ms: default_backoff(),
            user_agent: default_user_agent(),
            extraction: ExtractionStrategy::default(),
        }
    }
}

fn default_endpoint_prefix() -> String {
    DEFAULT_ENDPOINT_PREFIX.to_string()
}

fn default_timeout() -> u64 {
    5
}

fn default_retries() -> u32 {
    1
}

fn default_backoff() -> u64 {
    250
}

fn default_user_agent() -> String {
    format!("music-buff/{}", env!("CARGO_PKG_VERSION"))
}
