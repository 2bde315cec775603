//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Speak a word aloud with an American or British accent.
#[derive(Parser, Debug)]
#[command(name = "pronounce")]
#[command(about = "Hear how a word is pronounced, via Google Cloud Text-to-Speech")]
#[command(version)]
pub struct Cli {
    /// Google Cloud API key
    #[arg(long = "api-key", env = "GOOGLE_TTS_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Override the synthesize endpoint URL
    #[arg(long = "endpoint", global = true)]
    pub endpoint: Option<String>,

    /// Abort the TTS request after this many seconds
    #[arg(long = "timeout", global = true)]
    pub timeout_secs: Option<u64>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
