//! `say`: play a word and wait for it to finish.

use std::future::Future;
use std::sync::Arc;

use pronounce_core::AccentType;
use pronounce_voice::PronunciationPlayer;

use crate::error::CliError;

/// How a `say` invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SayOutcome {
    Finished,
    Interrupted,
}

/// Play `word`, stopping early when `cancel` resolves (Ctrl-C in `main`).
pub async fn execute(
    player: Arc<PronunciationPlayer>,
    word: &str,
    accent: AccentType,
    cancel: impl Future<Output = ()>,
) -> Result<SayOutcome, CliError> {
    let mut task = {
        let player = Arc::clone(&player);
        let word = word.to_string();
        tokio::spawn(async move { player.play_word_audio(&word, accent).await })
    };

    let joined = tokio::select! {
        joined = &mut task => Some(joined),
        () = cancel => None,
    };
    let joined = match joined {
        Some(joined) => joined,
        None => {
            tracing::info!("Stopping playback");
            player.stop_audio();
            task.await
        }
    };
    let finished =
        joined.map_err(|e| CliError::Playback(format!("playback task failed: {e}")))??;

    Ok(if finished {
        SayOutcome::Finished
    } else {
        SayOutcome::Interrupted
    })
}
