//! Subcommand definitions.

use std::path::PathBuf;

use clap::Subcommand;

use pronounce_core::{AccentType, VoiceGender};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Speak a word through the default audio output (Ctrl-C stops)
    Say {
        /// Word or short phrase to pronounce
        word: String,

        /// Accent: american or british [default: PRONOUNCE_ACCENT or american]
        #[arg(short, long)]
        accent: Option<AccentType>,
    },

    /// Write the synthesized MP3 to a file instead of playing it
    Save {
        /// Word or short phrase to pronounce
        word: String,

        /// Destination file
        #[arg(short, long)]
        output: PathBuf,

        /// Accent: american or british
        #[arg(short, long)]
        accent: Option<AccentType>,

        /// Voice gender: female or male
        #[arg(short, long, default_value = "female")]
        gender: VoiceGender,
    },

    /// List the voice table
    Voices,
}
