//! Core domain types and port definitions for `pronounce`.
//!
//! This crate has no I/O: it defines the accent and voice vocabulary, the
//! static voice table, application settings, and the [`SpeechSynthesizer`]
//! port that adapter crates implement.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{AccentType, ParseAccentError, ParseGenderError, VoiceGender, VoiceMapping};
pub use ports::{SpeechSynthesizer, SynthesisError};
pub use settings::{
    API_KEY_ENV, DEFAULT_TTS_ENDPOINT, Settings, SettingsError, validate_settings,
};

#[cfg(test)]
use serde_json as _;
