//! Lookup key normalization.
//!
//! Turns a spoken artist name into the page title form the encyclopedia
//! expects: words title-cased and joined by underscores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized page title used to query the encyclopedia.
///
/// Only constructed through [`LookupKey::normalize`], so the value is always
/// the output of the normalization rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupKey(String);

impl LookupKey {
    /// Normalizes a raw slot value into a lookup key.
    ///
    /// - Input without a space is returned unchanged.
    /// - Otherwise the input is split on single spaces, the first character of
    ///   every word is upper-cased (the rest is kept as-is) and the words are
    ///   joined with `_`.
    ///
    /// Surrounding whitespace is not trimmed; `" beach"` becomes `"_Beach"`.
    pub fn normalize(raw: &str) -> Self {
        if !raw.contains(' ') {
            return Self(raw.to_string());
        }

        let words: Vec<String> = raw.split(' ').map(capitalize_first).collect();
        Self(words.join("_"))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the key is empty (an empty slot value was normalized).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
