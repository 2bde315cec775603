//! Spoken word pronunciation: Google Cloud TTS synthesis plus single-session
//! playback that reports whether the audio finished or was interrupted.
//!
//! ```no_run
//! # async fn demo() -> Result<(), pronounce_voice::PlaybackError> {
//! use pronounce_core::AccentType;
//! use pronounce_voice::{GoogleTtsConfig, PronunciationPlayer};
//!
//! let player = PronunciationPlayer::google(GoogleTtsConfig::new("API_KEY"))?;
//! let finished = player.play_word_audio("schedule", AccentType::British).await?;
//! println!("finished naturally: {finished}");
//! # Ok(())
//! # }
//! ```
#![deny(unused_crate_dependencies)]

pub mod audio_io;
pub mod audio_local;
mod audio_thread;
pub mod clip;
pub mod controller;
pub mod error;
pub mod google;
mod playback;

// Re-export key types for convenience
pub use audio_io::{AudioOutput, PlaybackDoneCallback};
pub use audio_local::LocalAudioOutput;
pub use clip::AudioClip;
pub use controller::{DEFAULT_VOICE, PlayerState, PronunciationPlayer};
pub use error::PlaybackError;
pub use google::{GoogleTtsClient, GoogleTtsConfig};

// Dev-dependencies used only by integration tests
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use wiremock as _;
