//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use tokio::sync::mpsc;

use pronounce_voice::{AudioClip, AudioOutput, PlaybackDoneCallback, PlaybackError};

/// Minimal 16-bit PCM mono WAV container.
pub fn wav_bytes(sample_rate: u32, samples: &[i16]) -> Vec<u8> {
    let data_len = u32::try_from(samples.len() * 2).unwrap();
    let mut out = Vec::with_capacity(44 + samples.len() * 2);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    for s in samples {
        out.extend_from_slice(&s.to_le_bytes());
    }
    out
}

/// A short, valid clip: 4 ms of silence at 8 kHz.
pub fn short_wav() -> Vec<u8> {
    wav_bytes(8_000, &[0; 32])
}

/// A real encoder-produced MP3: 22.05 kHz mono, about a second long.
pub fn sample_mp3() -> Vec<u8> {
    include_bytes!("../fixtures/sample.mp3").to_vec()
}

/// Audio output that never touches hardware.
///
/// Each started clip's completion callback is kept so a test can play the
/// part of the native "finished" notification, and every start is announced
/// on a channel so tests can wait until playback has begun.
pub struct FakeOutput {
    callbacks: Mutex<Vec<Option<PlaybackDoneCallback>>>,
    clips: Mutex<Vec<AudioClip>>,
    playing: Mutex<bool>,
    stops: Mutex<usize>,
    fail_activation: bool,
    started_tx: mpsc::UnboundedSender<usize>,
}

impl FakeOutput {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<usize>) {
        Self::build(false)
    }

    pub fn failing_activation() -> (Self, mpsc::UnboundedReceiver<usize>) {
        Self::build(true)
    }

    fn build(fail_activation: bool) -> (Self, mpsc::UnboundedReceiver<usize>) {
        let (started_tx, started_rx) = mpsc::unbounded_channel();
        let output = Self {
            callbacks: Mutex::new(Vec::new()),
            clips: Mutex::new(Vec::new()),
            playing: Mutex::new(false),
            stops: Mutex::new(0),
            fail_activation,
            started_tx,
        };
        (output, started_rx)
    }

    /// Fire the completion callback of the `index`-th started clip.
    ///
    /// Returns `false` if it was already fired.
    pub fn finish(&self, index: usize) -> bool {
        let callback = self.callbacks.lock().unwrap()[index].take();
        match callback {
            Some(cb) => {
                *self.playing.lock().unwrap() = false;
                cb();
                true
            }
            None => false,
        }
    }

    pub fn starts(&self) -> usize {
        self.callbacks.lock().unwrap().len()
    }

    /// The `index`-th clip handed to `start`.
    pub fn clip(&self, index: usize) -> AudioClip {
        self.clips.lock().unwrap()[index].clone()
    }

    pub fn stops(&self) -> usize {
        *self.stops.lock().unwrap()
    }

    pub fn is_playing(&self) -> bool {
        *self.playing.lock().unwrap()
    }
}

impl AudioOutput for FakeOutput {
    fn activate(&self) -> Result<(), PlaybackError> {
        if self.fail_activation {
            return Err(PlaybackError::AudioSession("no output device".to_string()));
        }
        Ok(())
    }

    fn start(&self, clip: AudioClip, on_done: PlaybackDoneCallback) -> Result<(), PlaybackError> {
        self.clips.lock().unwrap().push(clip);
        let index = {
            let mut callbacks = self.callbacks.lock().unwrap();
            callbacks.push(Some(on_done));
            callbacks.len() - 1
        };
        *self.playing.lock().unwrap() = true;
        let _ = self.started_tx.send(index);
        Ok(())
    }

    fn stop(&self) {
        *self.playing.lock().unwrap() = false;
        *self.stops.lock().unwrap() += 1;
    }
}
