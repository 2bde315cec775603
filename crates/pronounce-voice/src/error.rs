//! Playback error types.

use pronounce_core::SynthesisError;

/// Errors that can occur while pronouncing a word.
///
/// Every variant is raised before the caller is suspended on playback; once
/// audio has started the only outcomes are natural completion or interruption.
#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    /// Speech synthesis failed.
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    /// The synthesized bytes are not a playable audio container.
    #[error("Failed to decode synthesized audio: {0}")]
    Decode(String),

    /// The audio output device/session could not be activated.
    #[error("Failed to activate audio output: {0}")]
    AudioSession(String),

    /// The dedicated audio thread exited while a request was in flight.
    #[error("Audio thread died unexpectedly")]
    AudioThreadDied,
}
