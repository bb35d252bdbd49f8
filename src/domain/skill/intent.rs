//! The fixed set of intents the skill recognizes.

use std::fmt;
use std::str::FromStr;

use super::SkillError;

/// A recognized intent.
///
/// Parsing from the host's intent name is the dispatch table: any name not
/// listed here is rejected with [`SkillError::UnrecognizedIntent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Look up an artist and speak the first paragraph about them.
    GetFirstEvent,
    /// Reserved for paging through further facts; has no behavior.
    GetNextEvent,
    Help,
    Stop,
    Cancel,
}

impl Intent {
    /// Every recognized intent.
    pub const ALL: [Intent; 5] = [
        Intent::GetFirstEvent,
        Intent::GetNextEvent,
        Intent::Help,
        Intent::Stop,
        Intent::Cancel,
    ];

    /// Canonical name used by the host platform.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::GetFirstEvent => "GetFirstEventIntent",
            Intent::GetNextEvent => "GetNextEventIntent",
            Intent::Help => "AMAZON.HelpIntent",
            Intent::Stop => "AMAZON.StopIntent",
            Intent::Cancel => "AMAZON.CancelIntent",
        }
    }
}

impl FromStr for Intent {
    type Err = SkillError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "GetFirstEventIntent" => Ok(Intent::GetFirstEvent),
            "GetNextEventIntent" => Ok(Intent::GetNextEvent),
            "AMAZON.HelpIntent" | "Help" => Ok(Intent::Help),
            "AMAZON.StopIntent" | "Stop" => Ok(Intent::Stop),
            "AMAZON.CancelIntent" | "Cancel" => Ok(Intent::Cancel),
            other => Err(SkillError::unrecognized_intent(other)),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
