//! Domain layer containing the skill's rules and types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (identifiers, error codes)
//! - `artist` - Lookup key normalization and excerpt extraction
//! - `skill` - Intents, inbound requests and composed responses

pub mod artist;
pub mod foundation;
pub mod skill;
