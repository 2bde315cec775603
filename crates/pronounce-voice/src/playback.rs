//! Audio playback module: pronunciation output via `rodio`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};

use crate::audio_io::PlaybackDoneCallback;
use crate::clip::AudioClip;
use crate::error::PlaybackError;

/// One rodio sink plus the flag that tells its watcher it was stopped.
struct ActiveSink {
    sink: Arc<Sink>,
    stopped: Arc<AtomicBool>,
}

/// Audio playback handle.
///
/// Wraps a `rodio` output stream. At most one sink is live: starting a new
/// clip stops the previous one first.
pub struct AudioPlayback {
    /// rodio output stream (must be kept alive).
    _stream: OutputStream,

    /// Handle used to create sinks.
    stream_handle: OutputStreamHandle,

    /// Current playback sink (if any).
    current: Option<ActiveSink>,
}

impl AudioPlayback {
    /// Open the default output device.
    pub fn new() -> Result<Self, PlaybackError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| PlaybackError::AudioSession(e.to_string()))?;

        tracing::info!("Audio playback initialized on default output device");

        Ok(Self {
            _stream: stream,
            stream_handle,
            current: None,
        })
    }

    /// Play `clip` and spawn a watcher that invokes `on_done` when the sink
    /// drains naturally.
    pub fn play_with_completion(
        &mut self,
        clip: AudioClip,
        on_done: PlaybackDoneCallback,
    ) -> Result<(), PlaybackError> {
        // Stop any existing playback
        self.stop();

        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| PlaybackError::AudioSession(e.to_string()))?;

        let duration = clip.duration();
        sink.append(SamplesBuffer::new(clip.channels, clip.sample_rate, clip.samples));

        let active = ActiveSink {
            sink: Arc::new(sink),
            stopped: Arc::new(AtomicBool::new(false)),
        };
        Self::spawn_completion_watcher(&active, on_done)?;
        self.current = Some(active);

        tracing::debug!(?duration, "Audio playback started");
        Ok(())
    }

    /// Spawn a background thread that blocks until the sink drains or is
    /// stopped. Only a natural drain fires `on_done`.
    fn spawn_completion_watcher(
        active: &ActiveSink,
        on_done: PlaybackDoneCallback,
    ) -> Result<(), PlaybackError> {
        let sink = Arc::clone(&active.sink);
        let stopped = Arc::clone(&active.stopped);

        // `sleep_until_end()` returns as soon as the queue drains or `stop()`
        // drops the queued sources.
        std::thread::Builder::new()
            .name("pronounce-playback-watch".into())
            .spawn(move || {
                sink.sleep_until_end();

                if stopped.swap(true, Ordering::SeqCst) {
                    return;
                }

                tracing::debug!("Playback finished naturally");
                on_done();
            })
            .map(|_| ())
            .map_err(|e| PlaybackError::AudioSession(format!("failed to spawn watcher: {e}")))
    }

    /// Stop any active playback immediately.
    pub fn stop(&mut self) {
        if let Some(active) = self.current.take() {
            // Mark first so the watcher never reports this sink as finished.
            active.stopped.store(true, Ordering::SeqCst);
            active.sink.stop();
            tracing::debug!("Audio playback stopped");
        }
    }
}
