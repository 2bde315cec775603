//! `PronunciationPlayer`: synthesize a word and await its playback.
//!
//! # Session model
//!
//! The player owns at most one `PlaybackSession`:
//!
//! ```text
//! Idle → Preparing → Playing → {Completed | Stopped}
//! ```
//!
//! A session is `Preparing` while the word is synthesized and decoded, and
//! `Playing` once audio has started and a [`PendingCompletion`] holds the
//! suspended caller. Completed and stopped sessions are discarded. Starting a
//! new pronunciation from any state stops the current session first, so the
//! most recent request always wins.
//!
//! # Completion bridge
//!
//! The audio backend reports a natural end of audio through a callback on a
//! background thread. That callback and [`PronunciationPlayer::stop_audio`]
//! race to resolve the same one-shot channel; whichever takes the
//! `PendingCompletion` out of the session first resolves it, and the other
//! finds the slot empty and does nothing. Each session carries an id so a
//! callback from a replaced session can never resolve a newer one.
//!
//! # Locking discipline
//!
//! The session slot sits behind a std `Mutex` that is never held across an
//! `.await` point. It is held while the backend starts a clip, so a `stop` on
//! another task cannot slip in between arming the completion and starting
//! audio.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::oneshot;

use pronounce_core::{AccentType, SpeechSynthesizer, VoiceGender};

use crate::audio_io::{AudioOutput, PlaybackDoneCallback};
use crate::audio_local::LocalAudioOutput;
use crate::clip::AudioClip;
use crate::error::PlaybackError;
use crate::google::{GoogleTtsClient, GoogleTtsConfig};

/// Voice gender used for every pronunciation.
pub const DEFAULT_VOICE: VoiceGender = VoiceGender::Female;

/// Observable state of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// No session.
    Idle,
    /// Synthesizing or decoding audio.
    Preparing,
    /// Audio is playing and a caller is awaiting the outcome.
    Playing,
}

// ── Pending completion ─────────────────────────────────────────────

/// Single-use handle for the caller suspended in
/// [`PronunciationPlayer::play_word_audio`].
///
/// Resolving consumes the handle, so a completion can only be resolved once.
#[derive(Debug)]
pub struct PendingCompletion {
    tx: oneshot::Sender<bool>,
}

impl PendingCompletion {
    fn new() -> (Self, oneshot::Receiver<bool>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    /// Resolve with `true` (finished naturally) or `false` (interrupted).
    fn resolve(self, completed: bool) {
        if self.tx.send(completed).is_err() {
            tracing::debug!(completed, "Pronunciation caller already gone");
        }
    }
}

// ── Session slot ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionPhase {
    Preparing,
    Playing,
}

/// One in-flight pronunciation.
#[derive(Debug)]
struct PlaybackSession {
    id: u64,
    phase: SessionPhase,
    duration: Option<Duration>,
    pending: Option<PendingCompletion>,
}

#[derive(Debug, Default)]
struct SessionSlot {
    next_id: u64,
    session: Option<PlaybackSession>,
}

impl SessionSlot {
    fn current_mut(&mut self, id: u64) -> Option<&mut PlaybackSession> {
        self.session.as_mut().filter(|s| s.id == id)
    }

    /// Handle a natural end-of-audio signal for session `id`.
    ///
    /// Returns `true` if it resolved the pending completion.
    fn finish(&mut self, id: u64) -> bool {
        let Some(session) = self.current_mut(id) else {
            tracing::debug!(session = id, "Ignoring completion for a replaced session");
            return false;
        };
        let Some(pending) = session.pending.take() else {
            tracing::debug!(session = id, "Ignoring completion with nothing pending");
            return false;
        };

        let duration = session.duration;
        self.session = None;
        pending.resolve(true);
        tracing::info!(session = id, ?duration, "Pronunciation finished");
        true
    }
}

fn lock_slot(slot: &Mutex<SessionSlot>) -> MutexGuard<'_, SessionSlot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

// ── Player ─────────────────────────────────────────────────────────

/// Plays synthesized pronunciations, one at a time.
///
/// All methods take `&self`; the player is `Send + Sync` and is usually
/// shared behind an `Arc` so that one task can await
/// [`play_word_audio`](Self::play_word_audio) while another calls
/// [`stop_audio`](Self::stop_audio).
pub struct PronunciationPlayer {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    output: Arc<dyn AudioOutput>,
    slot: Arc<Mutex<SessionSlot>>,
}

impl PronunciationPlayer {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>, output: Arc<dyn AudioOutput>) -> Self {
        Self {
            synthesizer,
            output,
            slot: Arc::new(Mutex::new(SessionSlot::default())),
        }
    }

    /// Player backed by Google Cloud TTS and the local audio device.
    pub fn google(config: GoogleTtsConfig) -> Result<Self, PlaybackError> {
        let client = GoogleTtsClient::new(config)?;
        Ok(Self::new(
            Arc::new(client),
            Arc::new(LocalAudioOutput::new()),
        ))
    }

    /// Current session state.
    pub fn state(&self) -> PlayerState {
        match lock_slot(&self.slot).session.as_ref().map(|s| s.phase) {
            None => PlayerState::Idle,
            Some(SessionPhase::Preparing) => PlayerState::Preparing,
            Some(SessionPhase::Playing) => PlayerState::Playing,
        }
    }

    /// Synthesize `word` in `accent` and play it to the end.
    ///
    /// Returns `Ok(true)` when the audio finished on its own and `Ok(false)`
    /// when it was interrupted by [`stop_audio`](Self::stop_audio) or by a
    /// newer call to this method. Errors are reported before any audio plays.
    ///
    /// Dropping the returned future stops this call's playback.
    pub async fn play_word_audio(
        &self,
        word: &str,
        accent: AccentType,
    ) -> Result<bool, PlaybackError> {
        self.output.activate()?;

        let id = self.begin_session();
        let _guard = SessionGuard { player: self, id };

        tracing::info!(session = id, word, %accent, "Pronouncing word");

        let synthesized = self
            .synthesizer
            .synthesize(word, accent, DEFAULT_VOICE)
            .await;
        if !self.is_current(id) {
            tracing::debug!(session = id, "Superseded during synthesis");
            return Ok(false);
        }
        let bytes = synthesized?;

        let clip = tokio::task::spawn_blocking(move || AudioClip::decode(bytes))
            .await
            .map_err(|e| PlaybackError::Decode(format!("decode task failed: {e}")))??;

        let completion = {
            let mut slot = lock_slot(&self.slot);
            let Some(session) = slot.current_mut(id) else {
                tracing::debug!(session = id, "Superseded during decode");
                return Ok(false);
            };

            let (pending, rx) = PendingCompletion::new();
            session.duration = Some(clip.duration());
            self.output.start(clip, self.completion_callback(id))?;
            session.phase = SessionPhase::Playing;
            session.pending = Some(pending);
            rx
        };

        tracing::debug!(session = id, "Awaiting end of playback");

        // A dropped sender means the session was torn down without an outcome.
        let completed = completion.await.unwrap_or(false);
        Ok(completed)
    }

    /// Stop the current pronunciation, if any.
    ///
    /// Never blocks on audio and never fails. A caller awaiting
    /// [`play_word_audio`](Self::play_word_audio) receives `Ok(false)`.
    pub fn stop_audio(&self) {
        let previous = lock_slot(&self.slot).session.take();
        match previous {
            Some(session) => self.interrupt(session),
            None => tracing::debug!("stop_audio with no active session"),
        }
    }

    /// Replace any current session with a fresh `Preparing` one.
    fn begin_session(&self) -> u64 {
        let mut slot = lock_slot(&self.slot);
        if let Some(previous) = slot.session.take() {
            self.interrupt(previous);
        }

        slot.next_id += 1;
        let id = slot.next_id;
        slot.session = Some(PlaybackSession {
            id,
            phase: SessionPhase::Preparing,
            duration: None,
            pending: None,
        });
        id
    }

    fn is_current(&self, id: u64) -> bool {
        lock_slot(&self.slot).current_mut(id).is_some()
    }

    /// Tear down a session that was taken out of the slot.
    fn interrupt(&self, session: PlaybackSession) {
        if session.phase == SessionPhase::Playing {
            self.output.stop();
        }
        if let Some(pending) = session.pending {
            pending.resolve(false);
        }
        tracing::info!(session = session.id, "Pronunciation interrupted");
    }

    /// Drop session `id` if it is still the current one.
    fn discard(&self, id: u64) {
        let mut slot = lock_slot(&self.slot);
        if slot.current_mut(id).is_none() {
            return;
        }
        if let Some(session) = slot.session.take() {
            self.interrupt(session);
        }
    }

    /// Completion observer handed to the audio backend for session `id`.
    fn completion_callback(&self, id: u64) -> PlaybackDoneCallback {
        let slot = Arc::downgrade(&self.slot);
        Box::new(move || {
            if let Some(slot) = slot.upgrade() {
                lock_slot(&slot).finish(id);
            }
        })
    }
}

impl Drop for PronunciationPlayer {
    fn drop(&mut self) {
        self.stop_audio();
    }
}

/// Cleans up a session whose `play_word_audio` call ended early: an error,
/// or the future being dropped.
struct SessionGuard<'a> {
    player: &'a PronunciationPlayer,
    id: u64,
}

impl Drop for SessionGuard<'_> {
    fn drop(&mut self) {
        self.player.discard(self.id);
    }
}
