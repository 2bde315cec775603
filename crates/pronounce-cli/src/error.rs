//! CLI-specific error types and mappings.
//!
//! Maps library errors to exit codes and user-facing messages.

use pronounce_core::{SettingsError, SynthesisError};
use pronounce_voice::PlaybackError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The TTS service could not produce audio.
    #[error("Speech synthesis failed: {0}")]
    Synthesis(String),

    /// Audio could not be decoded or played.
    #[error("Playback failed: {0}")]
    Playback(String),

    /// IO error writing output files.
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code (see sysexits.h).
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 78,    // EX_CONFIG
            Self::Synthesis(_) => 69, // EX_UNAVAILABLE
            Self::Playback(_) => 71,  // EX_OSERR
            Self::Io(_) => 74,        // EX_IOERR
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<SynthesisError> for CliError {
    fn from(err: SynthesisError) -> Self {
        Self::Synthesis(err.to_string())
    }
}

impl From<PlaybackError> for CliError {
    fn from(err: PlaybackError) -> Self {
        match err {
            PlaybackError::Synthesis(inner) => inner.into(),
            other => Self::Playback(other.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
