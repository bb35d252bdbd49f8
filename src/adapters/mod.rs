//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `lookup` - Encyclopedia lookup clients (MediaWiki, mock)
//! - `http` - Host platform webhook (axum)

pub mod http;
pub mod lookup;

pub use lookup::{MockArtistLookup, WikipediaLookupClient};
