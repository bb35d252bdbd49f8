//! Artist Lookup Adapters.
//!
//! Implementations of the ArtistLookup port.
//!
//! ## Available Adapters
//!
//! - `WikipediaLookupClient` - MediaWiki query API over HTTPS
//! - `MockArtistLookup` - Configurable mock for testing

mod mock_lookup;
mod wikipedia_client;

pub use mock_lookup::{MockArtistLookup, MockLookupResponse};
pub use wikipedia_client::WikipediaLookupClient;
