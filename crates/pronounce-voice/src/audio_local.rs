//! Local (rodio) adapter for the [`AudioOutput`] trait.
//!
//! Activation lazily spawns the [`AudioThreadHandle`], which opens the default
//! output device. The thread stays up for the adapter's lifetime so repeated
//! pronunciations do not reopen the device; dropping the adapter releases it.

use std::sync::{Mutex, MutexGuard};

use crate::audio_io::{AudioOutput, PlaybackDoneCallback};
use crate::audio_thread::AudioThreadHandle;
use crate::clip::AudioClip;
use crate::error::PlaybackError;

/// Local audio output. Delegates to rodio via [`AudioThreadHandle`].
#[derive(Default)]
pub struct LocalAudioOutput {
    handle: Mutex<Option<AudioThreadHandle>>,
}

impl LocalAudioOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<AudioThreadHandle>> {
        self.handle
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl AudioOutput for LocalAudioOutput {
    fn activate(&self) -> Result<(), PlaybackError> {
        let mut guard = self.lock();
        if guard.is_none() {
            *guard = Some(AudioThreadHandle::spawn()?);
        }
        Ok(())
    }

    fn start(&self, clip: AudioClip, on_done: PlaybackDoneCallback) -> Result<(), PlaybackError> {
        let guard = self.lock();
        let handle = guard.as_ref().ok_or_else(|| {
            PlaybackError::AudioSession("audio output has not been activated".to_string())
        })?;
        handle.play(clip, on_done)
    }

    fn stop(&self) {
        if let Some(handle) = self.lock().as_ref() {
            handle.stop();
        }
    }
}
