//! Composition helpers: logging setup and settings resolution.

use tracing_subscriber::EnvFilter;

use pronounce_core::{Settings, validate_settings};

use crate::error::CliError;
use crate::parser::Cli;

/// Install the `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Layer command-line flags over `base` and validate the result.
pub fn resolve_settings(cli: &Cli, base: Settings) -> Result<Settings, CliError> {
    let mut settings = base;
    if let Some(ref key) = cli.api_key {
        settings.api_key = Some(key.clone());
    }
    if let Some(ref endpoint) = cli.endpoint {
        settings.tts_endpoint = Some(endpoint.clone());
    }
    if let Some(secs) = cli.timeout_secs {
        settings.request_timeout_secs = Some(secs);
    }
    validate_settings(&settings)?;
    tracing::debug!(?settings, "Resolved settings");
    Ok(settings)
}
