//! `save`: synthesize a word and write the MP3 to disk.

use std::path::Path;

use pronounce_core::{AccentType, SpeechSynthesizer, VoiceGender};

use crate::error::CliError;

/// Synthesize `word` and write the encoded audio to `output`.
///
/// Returns the number of bytes written.
pub async fn execute(
    synthesizer: &dyn SpeechSynthesizer,
    word: &str,
    accent: AccentType,
    gender: VoiceGender,
    output: &Path,
) -> Result<usize, CliError> {
    let audio = synthesizer.synthesize(word, accent, gender).await?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(output, &audio).await?;

    tracing::info!(bytes = audio.len(), path = %output.display(), "Saved pronunciation");
    Ok(audio.len())
}
