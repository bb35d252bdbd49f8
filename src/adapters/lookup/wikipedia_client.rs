//! Wikipedia Lookup Client - Implementation of ArtistLookup over the
//! MediaWiki query API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = WikipediaConfig {
//!     timeout_secs: 3,
//!     ..Default::default()
//! };
//!
//! let client = WikipediaLookupClient::new(config)?;
//! let excerpt = client.fetch(&LookupKey::normalize("beach house")).await?;
//! ```
//!
//! # Request shape
//!
//! The query URL is the configured endpoint prefix with the lookup key
//! appended verbatim. The key is not percent-encoded, so keys holding `&`,
//! `#` or `?` produce a different query than intended.
//!
//! # Response handling
//!
//! The body is accumulated chunk by chunk until the stream ends and then
//! handed to the configured [`ExtractionStrategy`](crate::domain::artist::ExtractionStrategy).
//! HTTP status codes are logged but not interpreted: an error page simply
//! yields no excerpt.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::WikipediaConfig;
use crate::domain::artist::{ArtistExcerpt, LookupKey};
use crate::ports::{ArtistLookup, LookupError};

/// MediaWiki API lookup client.
pub struct WikipediaLookupClient {
    config: WikipediaConfig,
    client: Client,
}

impl WikipediaLookupClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::InvalidRequest` if the HTTP client cannot be built
    /// (e.g. the user agent is not a valid header value).
    pub fn new(config: WikipediaConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| LookupError::invalid_request(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the query URL for a key.
    pub fn query_url(&self, key: &LookupKey) -> String {
        format!("{}{}", self.config.endpoint_prefix, key)
    }

    /// Translates a reqwest failure into a lookup error.
    fn map_request_error(&self, e: reqwest::Error) -> LookupError {
        if e.is_timeout() {
            LookupError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else if e.is_builder() {
            LookupError::invalid_request(e.to_string())
        } else if e.is_connect() {
            LookupError::transport(format!("Connection failed: {}", e))
        } else {
            LookupError::transport(e.to_string())
        }
    }

    /// Sends the GET request and reads the full body.
    async fn fetch_body(&self, url: &str) -> Result<String, LookupError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, url, "Encyclopedia API returned non-success status");
        }

        let mut body = Vec::new();
        let mut chunks = response.bytes_stream();
        while let Some(chunk) = chunks.next().await {
            let chunk = chunk.map_err(|e| self.map_request_error(e))?;
            body.extend_from_slice(&chunk);
        }

        debug!(%status, bytes = body.len(), "Received encyclopedia response");
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Performs one lookup attempt.
    async fn attempt(&self, key: &LookupKey) -> Result<ArtistExcerpt, LookupError> {
        let url = self.query_url(key);
        let body = self.fetch_body(&url).await?;
        Ok(self.config.extraction.extract(&body)?)
    }

    /// Delay before retry number `retry` (zero-based).
    fn backoff(&self, retry: u32) -> Duration {
        self.config.retry_backoff() * 2u32.saturating_pow(retry)
    }
}

#[async_trait]
impl ArtistLookup for WikipediaLookupClient {
    async fn fetch(&self, key: &LookupKey) -> Result<ArtistExcerpt, LookupError> {
        let mut retry_count = 0;

        loop {
            let started = Instant::now();
            let result = self.attempt(key).await;
            let elapsed_ms = started.elapsed().as_millis() as u64;

            match result {
                Ok(excerpt) => {
                    debug!(%key, attempt = retry_count + 1, elapsed_ms, "Artist lookup succeeded");
                    return Ok(excerpt);
                }
                Err(err) if err.is_retryable() && retry_count < self.config.max_retries => {
                    let delay = self.backoff(retry_count);
                    warn!(
                        %key,
                        attempt = retry_count + 1,
                        elapsed_ms,
                        error = %err,
                        retry_in_ms = delay.as_millis() as u64,
                        "Artist lookup failed, retrying"
                    );
                    sleep(delay).await;
                    retry_count += 1;
                }
                Err(err) => {
                    debug!(%key, attempt = retry_count + 1, elapsed_ms, error = %err, "Artist lookup gave up");
                    return Err(err);
                }
            }
        }
    }
}
