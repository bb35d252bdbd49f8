//! Speech and card payloads.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Root element of marked-up speech.
const SPEAK_OPEN: &str = "<speak>";
const SPEAK_CLOSE: &str = "</speak>";

/// Opening, closing or self-closing speech markup elements. Other
/// angle-bracketed text is left alone.
static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)</?(?:speak|p|s|break|prosody|emphasis|say-as|phoneme|sub|audio|voice|lang|mark|w|amazon:[a-z]+)(?:\s[^<>]*)?/?>",
    )
    .expect("markup tag pattern is valid")
});

/// How the host should interpret speech text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeechFormat {
    /// Text read as-is.
    Plain,
    /// Speech markup wrapped in the `<speak>` root element.
    MarkedUp,
}

/// Text to be spoken, tagged with its format.
///
/// Invariants:
/// - `Plain` text contains no markup tags.
/// - `MarkedUp` text is wrapped in `<speak>...</speak>`.
///
/// Only the constructors below build a payload, so both hold for every value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeechPayload {
    text: String,
    format: SpeechFormat,
}

impl SpeechPayload {
    /// Creates plain speech, stripping speech markup elements from `text`.
    ///
    /// Only element names the host interprets are removed; text such as
    /// `<Untitled>` in an excerpt is kept verbatim.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            text: MARKUP_TAG.replace_all(&text, "").into_owned(),
            format: SpeechFormat::Plain,
        }
    }

    /// Creates marked-up speech, adding the root element unless present.
    pub fn marked_up(text: impl Into<String>) -> Self {
        let text = text.into();
        let trimmed = text.trim();
        let text = if trimmed.starts_with(SPEAK_OPEN) && trimmed.ends_with(SPEAK_CLOSE) {
            text
        } else {
            format!("{}{}{}", SPEAK_OPEN, text, SPEAK_CLOSE)
        };
        Self {
            text,
            format: SpeechFormat::MarkedUp,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn format(&self) -> SpeechFormat {
        self.format
    }
}

/// Visual supplement shown on devices with a screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardPayload {
    pub title: String,
    pub body: String,
}

impl CardPayload {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}
