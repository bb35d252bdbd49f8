//! Artist domain module.
//!
//! Pure rules for turning a spoken artist name into a lookup key and for
//! isolating the first descriptive paragraph from an encyclopedia response.

mod excerpt;
mod lookup_key;

pub use excerpt::{
    extract_structured, extract_textual, ArtistExcerpt, ExtractError, ExtractionStrategy,
    ESCAPED_PARAGRAPH_BREAK, EXTRACT_MARKER,
};
pub use lookup_key::LookupKey;
