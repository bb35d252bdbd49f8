//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ArtistLookup` - Port for fetching an artist summary from the encyclopedia

mod artist_lookup;

pub use artist_lookup::{ArtistLookup, LookupError};
