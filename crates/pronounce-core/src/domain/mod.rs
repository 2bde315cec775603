//! Domain vocabulary: accents, voice genders, and the voice table.

mod accent;
mod voices;

pub use accent::{AccentType, ParseAccentError, ParseGenderError, VoiceGender};
pub use voices::VoiceMapping;
