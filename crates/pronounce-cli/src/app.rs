//! Command dispatch.
//!
//! Settings are only resolved for commands that talk to the TTS service, so
//! `voices` keeps working with a broken environment.

use std::sync::Arc;

use pronounce_core::Settings;
use pronounce_voice::{GoogleTtsClient, GoogleTtsConfig, PronunciationPlayer};

use crate::bootstrap::resolve_settings;
use crate::commands::Commands;
use crate::error::CliError;
use crate::handlers::{save, say, voices};
use crate::parser::Cli;

/// Run the parsed command, reading configuration through `env`.
pub async fn run(cli: Cli, env: impl Fn(&str) -> Option<String>) -> Result<(), CliError> {
    match &cli.command {
        Commands::Voices => voices::execute(),
        Commands::Say { word, accent } => {
            let (settings, config) = service_config(&cli, &env)?;
            let player = Arc::new(PronunciationPlayer::google(config)?);
            let accent = accent.unwrap_or_else(|| settings.effective_accent());

            let ctrl_c = async {
                if tokio::signal::ctrl_c().await.is_err() {
                    // No signal handler available: never cancel.
                    std::future::pending::<()>().await;
                }
            };

            match say::execute(player, word, accent, ctrl_c).await? {
                say::SayOutcome::Finished => println!("{word} ({accent})"),
                say::SayOutcome::Interrupted => println!("{word} ({accent}), interrupted"),
            }
        }
        Commands::Save {
            word,
            output,
            accent,
            gender,
        } => {
            let (settings, config) = service_config(&cli, &env)?;
            let client = GoogleTtsClient::new(config)?;
            let accent = accent.unwrap_or_else(|| settings.effective_accent());
            let bytes = save::execute(&client, word, accent, *gender, output).await?;
            println!("Wrote {bytes} bytes to {}", output.display());
        }
    }

    Ok(())
}

/// Layer flags over `env` and build the TTS client configuration.
fn service_config(
    cli: &Cli,
    env: impl Fn(&str) -> Option<String>,
) -> Result<(Settings, GoogleTtsConfig), CliError> {
    let settings = resolve_settings(cli, Settings::from_lookup(env)?)?;
    let config = GoogleTtsConfig::from_settings(&settings)?;
    Ok((settings, config))
}
