//! Accent and voice-gender enumerations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Regional pronunciation variant of a word.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AccentType {
    #[default]
    American,
    British,
}

impl AccentType {
    /// Every supported accent, in table order.
    pub const ALL: [Self; 2] = [Self::American, Self::British];

    /// BCP-47 language-region code understood by the TTS service.
    #[must_use]
    pub const fn language_code(self) -> &'static str {
        match self {
            Self::American => "en-US",
            Self::British => "en-GB",
        }
    }

    /// Lowercase label used in configuration and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::American => "american",
            Self::British => "british",
        }
    }
}

impl fmt::Display for AccentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known accent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown accent '{0}' (expected 'american' or 'british')")]
pub struct ParseAccentError(pub String);

impl FromStr for AccentType {
    type Err = ParseAccentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "american" | "us" | "en-us" => Ok(Self::American),
            "british" | "uk" | "gb" | "en-gb" => Ok(Self::British),
            other => Err(ParseAccentError(other.to_string())),
        }
    }
}

/// Gender of the synthetic voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceGender {
    Male,
    Female,
}

impl VoiceGender {
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for VoiceGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known voice gender.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown voice gender '{0}' (expected 'male' or 'female')")]
pub struct ParseGenderError(pub String);

impl FromStr for VoiceGender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(ParseGenderError(other.to_string())),
        }
    }
}
