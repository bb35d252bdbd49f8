//! Artist Lookup Port - Interface for fetching an artist summary.
//!
//! The skill depends on this port instead of a concrete HTTP client, so tests
//! can substitute a scripted lookup and the encyclopedia backend can change
//! without touching intent handling.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct FixedLookup;
//!
//! #[async_trait]
//! impl ArtistLookup for FixedLookup {
//!     async fn fetch(&self, key: &LookupKey) -> Result<ArtistExcerpt, LookupError> {
//!         ArtistExcerpt::new(format!("{} is a band.", key)).map_err(|_| LookupError::NotFound(ExtractError::Empty))
//!     }
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::artist::{ArtistExcerpt, ExtractError, LookupKey};

/// Port for looking up a summary of an artist.
#[async_trait]
pub trait ArtistLookup: Send + Sync {
    /// Fetches the first descriptive paragraph for `key`.
    ///
    /// Suspends until the exchange completes, fails or times out.
    async fn fetch(&self, key: &LookupKey) -> Result<ArtistExcerpt, LookupError>;
}

/// Errors from an artist lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The response carried no usable excerpt (no such page, or an
    /// unexpected body shape).
    #[error("no excerpt found: {0}")]
    NotFound(ExtractError),

    /// Connection or stream failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The exchange did not complete in time.
    #[error("lookup timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// The request could not be built (e.g. the key produced an invalid URL).
    #[error("invalid lookup request: {0}")]
    InvalidRequest(String),
}

impl LookupError {
    pub fn transport(message: impl Into<String>) -> Self {
        LookupError::Transport(message.into())
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        LookupError::InvalidRequest(message.into())
    }

    /// Whether another attempt could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LookupError::Transport(_) | LookupError::Timeout { .. })
    }

    /// Whether the lookup reached the backend but found nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound(_))
    }
}

impl From<ExtractError> for LookupError {
    fn from(err: ExtractError) -> Self {
        LookupError::NotFound(err)
    }
}
