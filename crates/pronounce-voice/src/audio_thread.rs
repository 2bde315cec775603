//! Dedicated audio I/O thread. Isolates `!Send` audio resources from the async runtime.
//!
//! `rodio::OutputStream` is `!Send` on some platforms. Rather than using
//! `unsafe impl Send/Sync`, it is confined to a single OS thread and driven
//! through channels.
//!
//! The public [`AudioThreadHandle`] is the `Send + Sync` proxy that the
//! local output adapter holds. Every call becomes an [`AudioCommand`] sent to
//! the actor thread.

use std::sync::mpsc;
use std::thread;

use crate::audio_io::PlaybackDoneCallback;
use crate::clip::AudioClip;
use crate::error::PlaybackError;
use crate::playback::AudioPlayback;

// ── Commands ───────────────────────────────────────────────────────

/// A command sent to the audio thread.
enum AudioCommand {
    /// Start playing a decoded clip, replacing any current playback.
    Play {
        clip: AudioClip,
        on_done: PlaybackDoneCallback,
        reply: mpsc::Sender<Result<(), PlaybackError>>,
    },

    /// Stop any active playback immediately (fire-and-forget).
    Stop,

    /// Shut down the audio thread, releasing the output device.
    Shutdown,
}

// ── Handle (Send + Sync proxy) ─────────────────────────────────────

/// `Send + Sync` handle to the dedicated audio thread.
///
/// Request–reply methods block the caller until the audio thread responds;
/// the latency is local channel I/O plus creating a rodio sink.
pub struct AudioThreadHandle {
    cmd_tx: mpsc::Sender<AudioCommand>,
    thread: Option<thread::JoinHandle<()>>,
}

impl AudioThreadHandle {
    /// Spawn the audio thread, open the output device, and return the handle.
    ///
    /// Errors from [`AudioPlayback::new`] are propagated back to the caller
    /// via a one-shot init channel.
    pub fn spawn() -> Result<Self, PlaybackError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<AudioCommand>();
        let (init_tx, init_rx) = mpsc::channel::<Result<(), PlaybackError>>();

        let thread = thread::Builder::new()
            .name("pronounce-audio".into())
            .spawn(move || {
                Self::run(&cmd_rx, &init_tx);
            })
            .map_err(|e| PlaybackError::AudioSession(format!("failed to spawn audio thread: {e}")))?;

        // Wait for the audio thread to finish initialisation.
        init_rx.recv().map_err(|_| PlaybackError::AudioThreadDied)??;

        Ok(Self {
            cmd_tx,
            thread: Some(thread),
        })
    }

    /// Start playing `clip`; `on_done` fires when it drains naturally.
    pub fn play(&self, clip: AudioClip, on_done: PlaybackDoneCallback) -> Result<(), PlaybackError> {
        let (reply, rx) = mpsc::channel();
        self.cmd_tx
            .send(AudioCommand::Play {
                clip,
                on_done,
                reply,
            })
            .map_err(|_| PlaybackError::AudioThreadDied)?;
        rx.recv().map_err(|_| PlaybackError::AudioThreadDied)?
    }

    /// Stop any active playback immediately (fire-and-forget).
    pub fn stop(&self) {
        let _ = self.cmd_tx.send(AudioCommand::Stop);
    }

    // ── Audio thread event loop ────────────────────────────────────

    /// Body of the audio thread. Owns [`AudioPlayback`] for its entire
    /// lifetime; it never crosses thread boundaries.
    fn run(cmd_rx: &mpsc::Receiver<AudioCommand>, init_tx: &mpsc::Sender<Result<(), PlaybackError>>) {
        let mut playback = match AudioPlayback::new() {
            Ok(p) => p,
            Err(e) => {
                let _ = init_tx.send(Err(e));
                return;
            }
        };

        if init_tx.send(Ok(())).is_err() {
            // Caller dropped, nothing to do.
            return;
        }

        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                AudioCommand::Play {
                    clip,
                    on_done,
                    reply,
                } => {
                    let _ = reply.send(playback.play_with_completion(clip, on_done));
                }

                AudioCommand::Stop => playback.stop(),

                AudioCommand::Shutdown => break,
            }
        }

        playback.stop();
        tracing::debug!("Audio thread shutting down");
    }
}

impl Drop for AudioThreadHandle {
    fn drop(&mut self) {
        // Best-effort shutdown; the thread may already be dead.
        let _ = self.cmd_tx.send(AudioCommand::Shutdown);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}
