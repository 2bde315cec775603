//! `AudioOutput` trait abstraction for playback.
//!
//! This trait decouples the [`PronunciationPlayer`](crate::controller::PronunciationPlayer)
//! from any specific audio backend:
//!
//! | Implementor | Where used |
//! |---|---|
//! | [`LocalAudioOutput`](crate::audio_local::LocalAudioOutput) | Desktop / CLI, rodio playback on the local machine |
//! | test fakes | Drive the completion callback by hand, no audio hardware |
//!
//! The trait is **object-safe** (`Arc<dyn AudioOutput>`). All methods take
//! `&self`; implementations use interior mutability.

use crate::clip::AudioClip;
use crate::error::PlaybackError;

/// Callback invoked when playback finishes naturally (all queued audio drained).
///
/// Never invoked for playback halted by [`AudioOutput::stop`].
pub type PlaybackDoneCallback = Box<dyn FnOnce() + Send + 'static>;

/// Abstraction over a platform audio output.
pub trait AudioOutput: Send + Sync {
    /// Make the output ready for playback (open the device / audio session).
    ///
    /// Idempotent: activating an already active output is a no-op.
    fn activate(&self) -> Result<(), PlaybackError>;

    /// Begin playing `clip`, replacing anything already playing.
    ///
    /// `on_done` fires at most once, when the clip drains on its own. It must
    /// be invoked from another thread, never synchronously inside `start`.
    fn start(&self, clip: AudioClip, on_done: PlaybackDoneCallback) -> Result<(), PlaybackError>;

    /// Halt playback immediately. A no-op when nothing is playing.
    fn stop(&self);
}
