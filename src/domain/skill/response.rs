//! Outgoing responses and the three composition modes.

use super::{CardPayload, SpeechPayload};

/// Shape of a composed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// Single utterance, session ends.
    Tell,
    /// Utterance plus reprompt, session stays open.
    Ask,
    /// Ask plus card.
    AskWithCard,
}

/// A reply handed back to the host transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingResponse {
    speech: SpeechPayload,
    reprompt: Option<SpeechPayload>,
    card: Option<CardPayload>,
}

impl OutgoingResponse {
    /// Composes a response; a reprompt keeps the session open.
    ///
    /// Cards only accompany ask responses, so a card without a reprompt is
    /// dropped.
    pub fn compose(
        speech: SpeechPayload,
        reprompt: Option<SpeechPayload>,
        card: Option<CardPayload>,
    ) -> Self {
        let card = reprompt.as_ref().and(card);
        Self {
            speech,
            reprompt,
            card,
        }
    }

    /// Speaks once and ends the session.
    pub fn tell(speech: SpeechPayload) -> Self {
        Self::compose(speech, None, None)
    }

    /// Speaks and waits for a follow-up, reprompting on silence.
    pub fn ask(speech: SpeechPayload, reprompt: SpeechPayload) -> Self {
        Self::compose(speech, Some(reprompt), None)
    }

    /// Like [`OutgoingResponse::ask`], with a card for screen devices.
    pub fn ask_with_card(speech: SpeechPayload, reprompt: SpeechPayload, card: CardPayload) -> Self {
        Self::compose(speech, Some(reprompt), Some(card))
    }

    pub fn mode(&self) -> ResponseMode {
        match (&self.reprompt, &self.card) {
            (None, _) => ResponseMode::Tell,
            (Some(_), None) => ResponseMode::Ask,
            (Some(_), Some(_)) => ResponseMode::AskWithCard,
        }
    }

    pub fn speech(&self) -> &SpeechPayload {
        &self.speech
    }

    pub fn reprompt(&self) -> Option<&SpeechPayload> {
        self.reprompt.as_ref()
    }

    pub fn card(&self) -> Option<&CardPayload> {
        self.card.as_ref()
    }

    /// Tell modes end the session; ask modes keep it open.
    pub fn should_end_session(&self) -> bool {
        self.reprompt.is_none()
    }
}

/// Result of handling one inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillOutcome {
    /// A reply for the host to deliver.
    Reply(OutgoingResponse),
    /// Lifecycle notification; nothing to say.
    NoReply,
}

impl SkillOutcome {
    /// Returns the reply, if any.
    pub fn reply(&self) -> Option<&OutgoingResponse> {
        match self {
            SkillOutcome::Reply(response) => Some(response),
            SkillOutcome::NoReply => None,
        }
    }
}
