//! Fixed phrases spoken or displayed by the skill.

/// Slot carrying the spoken artist name.
pub const ARTIST_SLOT: &str = "artist";

/// Artist looked up when the user names none.
pub const DEFAULT_ARTIST: &str = "Nickelback";

/// Welcome speech body; wrapped in the markup root when composed.
pub const WELCOME_SPEECH: &str =
    "<p>Music buff.</p> <p>What artist do you want to learn more about?</p>";

/// Spoken again when the user stays silent after the welcome or a lookup prompt.
pub const WELCOME_REPROMPT: &str = "With Music Buff, you can get information about any artist. \
     For example, you could say Beach House or Tame Impala. \
     Now, which artist do you want to learn about?";

pub const WELCOME_CARD_TITLE: &str = "Music Buff your expert in all things music";

pub const WELCOME_CARD_BODY: &str = "Music Buff. What artist do you want to learn more about?";

pub const HELP_SPEECH: &str = "With Music Buff, you can get information for any artist on Wikipedia. \
     For example, you could say Beach House or Green Day. \
     Now which artist do you want to know more about?";

pub const HELP_REPROMPT: &str = "Which artist do you want to know more about?";

pub const GOODBYE: &str = "Goodbye";

/// Spoken whenever a lookup yields no excerpt, whatever the cause.
pub const LOOKUP_APOLOGY: &str =
    "There is a problem connecting to Wikipedia at this time. Please try again later.";
