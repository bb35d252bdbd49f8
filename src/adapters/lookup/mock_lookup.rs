//! Mock Artist Lookup for testing.
//!
//! Provides a configurable mock implementation of the ArtistLookup port,
//! allowing tests to run without calling the real encyclopedia API.
//!
//! # Features
//!
//! - Pre-configured excerpts
//! - Simulated delays for timeout testing
//! - Error injection for failure-path testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let lookup = MockArtistLookup::new()
//!     .with_excerpt("Green Day is an American rock band.");
//!
//! let excerpt = lookup.fetch(&LookupKey::normalize("green day")).await?;
//! assert_eq!(lookup.keys(), vec!["Green_Day"]);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::artist::{ArtistExcerpt, ExtractError, LookupKey};
use crate::ports::{ArtistLookup, LookupError};

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockLookupResponse {
    /// Return this excerpt text.
    Excerpt(String),
    /// Return an error.
    Error(LookupError),
}

/// Mock artist lookup for testing.
///
/// Responses are consumed in order; once the queue is empty every call
/// returns a generic excerpt naming the key.
#[derive(Debug, Clone, Default)]
pub struct MockArtistLookup {
    responses: Arc<Mutex<VecDeque<MockLookupResponse>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<LookupKey>>>,
}

impl MockArtistLookup {
    /// Creates a new mock lookup with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a successful excerpt to the queue.
    pub fn with_excerpt(self, text: impl Into<String>) -> Self {
        self.push(MockLookupResponse::Excerpt(text.into()));
        self
    }

    /// Adds an error to the queue.
    pub fn with_error(self, error: LookupError) -> Self {
        self.push(MockLookupResponse::Error(error));
        self
    }

    /// Sets simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns the keys looked up, in call order.
    pub fn keys(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|key| key.as_str().to_string())
            .collect()
    }

    fn push(&self, response: MockLookupResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    fn next_response(&self, key: &LookupKey) -> MockLookupResponse {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockLookupResponse::Excerpt(format!("{} is a musical artist.", key)))
    }
}

#[async_trait]
impl ArtistLookup for MockArtistLookup {
    async fn fetch(&self, key: &LookupKey) -> Result<ArtistExcerpt, LookupError> {
        self.calls.lock().unwrap().push(key.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response(key) {
            MockLookupResponse::Excerpt(text) => {
                ArtistExcerpt::new(text).map_err(|_| LookupError::NotFound(ExtractError::Empty))
            }
            MockLookupResponse::Error(err) => Err(err),
        }
    }
}
