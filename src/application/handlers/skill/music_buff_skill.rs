//! MusicBuffSkill - Answers questions about music artists.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;
use tracing::{error, info, warn};

use super::SkillHandler;
use crate::domain::artist::LookupKey;
use crate::domain::skill::messages::{
    ARTIST_SLOT, DEFAULT_ARTIST, GOODBYE, HELP_REPROMPT, HELP_SPEECH, LOOKUP_APOLOGY,
    WELCOME_CARD_BODY, WELCOME_CARD_TITLE, WELCOME_REPROMPT, WELCOME_SPEECH,
};
use crate::domain::skill::{
    CardPayload, InboundRequest, Intent, OutgoingResponse, SkillError, SpeechPayload,
};
use crate::ports::{ArtistLookup, LookupError};

/// The music skill.
pub struct MusicBuffSkill {
    lookup: Arc<dyn ArtistLookup>,
    default_artist: LookupKey,
    lookup_deadline: Option<Duration>,
}

impl MusicBuffSkill {
    pub fn new(lookup: Arc<dyn ArtistLookup>) -> Self {
        Self {
            lookup,
            default_artist: LookupKey::normalize(DEFAULT_ARTIST),
            lookup_deadline: None,
        }
    }

    /// Bounds the whole lookup, retries included. A lookup still running at
    /// the deadline is abandoned and answered with the apology.
    pub fn with_lookup_deadline(mut self, deadline: Duration) -> Self {
        self.lookup_deadline = Some(deadline);
        self
    }

    /// Overrides the artist used when the request names none.
    pub fn with_default_artist(mut self, artist: &str) -> Self {
        self.default_artist = LookupKey::normalize(artist);
        self
    }

    /// Welcome reply: marked-up greeting, plain reprompt and a card.
    pub fn welcome() -> OutgoingResponse {
        OutgoingResponse::ask_with_card(
            SpeechPayload::marked_up(WELCOME_SPEECH),
            SpeechPayload::plain(WELCOME_REPROMPT),
            CardPayload::new(WELCOME_CARD_TITLE, WELCOME_CARD_BODY),
        )
    }

    pub fn help() -> OutgoingResponse {
        OutgoingResponse::ask(
            SpeechPayload::plain(HELP_SPEECH),
            SpeechPayload::plain(HELP_REPROMPT),
        )
    }

    pub fn goodbye() -> OutgoingResponse {
        OutgoingResponse::tell(SpeechPayload::plain(GOODBYE))
    }

    /// Key for the artist slot, or the default artist when it is absent or empty.
    pub fn lookup_key(&self, request: &InboundRequest) -> LookupKey {
        match request.slot(ARTIST_SLOT) {
            Some(artist) if !artist.is_empty() => LookupKey::normalize(artist),
            _ => self.default_artist.clone(),
        }
    }

    /// Looks up the artist and tells the first paragraph, or apologizes.
    async fn describe_artist(&self, request: &InboundRequest) -> OutgoingResponse {
        let key = self.lookup_key(request);
        info!(request_id = %request.request_id, %key, "Looking up artist");

        let result = match self.lookup_deadline {
            Some(deadline) => timeout(deadline, self.lookup.fetch(&key))
                .await
                .unwrap_or_else(|_| {
                    Err(LookupError::Timeout {
                        timeout_secs: deadline.as_millis().div_ceil(1000) as u64,
                    })
                }),
            None => self.lookup.fetch(&key).await,
        };

        match result {
            Ok(excerpt) => OutgoingResponse::tell(SpeechPayload::plain(excerpt.into_string())),
            Err(err) if err.is_not_found() => {
                warn!(request_id = %request.request_id, %key, error = %err, "No excerpt for artist");
                OutgoingResponse::tell(SpeechPayload::plain(LOOKUP_APOLOGY))
            }
            Err(err) => {
                error!(request_id = %request.request_id, %key, error = %err, "Artist lookup failed");
                OutgoingResponse::tell(SpeechPayload::plain(LOOKUP_APOLOGY))
            }
        }
    }
}

#[async_trait]
impl SkillHandler for MusicBuffSkill {
    async fn on_launch(&self, request: &InboundRequest) -> OutgoingResponse {
        info!(
            request_id = %request.request_id,
            session_id = %request.session_id,
            "Launch"
        );
        Self::welcome()
    }

    async fn on_intent(
        &self,
        intent: Intent,
        request: &InboundRequest,
    ) -> Result<OutgoingResponse, SkillError> {
        match intent {
            Intent::GetFirstEvent => Ok(self.describe_artist(request).await),
            Intent::GetNextEvent => Err(SkillError::IntentNotImplemented(intent)),
            Intent::Help => Ok(Self::help()),
            Intent::Stop | Intent::Cancel => Ok(Self::goodbye()),
        }
    }
}
