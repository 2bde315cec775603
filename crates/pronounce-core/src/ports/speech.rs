//! Speech synthesis port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{AccentType, VoiceGender};

/// Errors produced while turning text into synthesized audio bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    /// The voice table has no entry for the requested pair.
    #[error("No voice configured for {accent} {gender}")]
    InvalidVoiceSelection {
        accent: AccentType,
        gender: VoiceGender,
    },

    /// The TTS service could not be reached (DNS, connect, transport timeout).
    #[error("Network error reaching TTS service: {0}")]
    Network(String),

    /// The TTS service answered with a non-200 status.
    #[error("TTS service returned HTTP {status}")]
    Service { status: u16 },

    /// The response body was not JSON or lacked a usable `audioContent`.
    #[error("Malformed TTS response: {0}")]
    MalformedResponse(String),
}

/// Backend-agnostic text-to-speech requester.
///
/// Implementations perform exactly one synthesis request per call and never
/// retry. They must be `Send + Sync` so the playback controller can hold them
/// behind an `Arc` across `.await` points.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` with the voice selected by `accent` and `voice`,
    /// returning the encoded audio container bytes (MP3 for Google TTS).
    async fn synthesize(
        &self,
        text: &str,
        accent: AccentType,
        voice: VoiceGender,
    ) -> Result<Vec<u8>, SynthesisError>;
}
