//! Static (accent, gender) → voice identifier table.

use std::collections::BTreeMap;

use super::{AccentType, VoiceGender};

/// Read-only lookup from (accent, gender) to a TTS voice identifier.
///
/// The table is fixed once constructed. [`VoiceMapping::default`] yields the
/// Google Cloud Neural2 voices, which cover every declared accent and gender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceMapping {
    voices: BTreeMap<(AccentType, VoiceGender), String>,
}

impl VoiceMapping {
    /// Google Cloud Text-to-Speech Neural2 voices.
    #[must_use]
    pub fn google_neural2() -> Self {
        Self::from_entries([
            (AccentType::American, VoiceGender::Male, "en-US-Neural2-D"),
            (AccentType::American, VoiceGender::Female, "en-US-Neural2-A"),
            (AccentType::British, VoiceGender::Male, "en-GB-Neural2-B"),
            (AccentType::British, VoiceGender::Female, "en-GB-Neural2-C"),
        ])
    }

    /// Build a table from explicit entries. Later duplicates win.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (AccentType, VoiceGender, S)>,
        S: Into<String>,
    {
        let voices = entries
            .into_iter()
            .map(|(accent, gender, id)| ((accent, gender), id.into()))
            .collect();
        Self { voices }
    }

    /// Voice identifier for the pair, if the table has one.
    #[must_use]
    pub fn voice_id(&self, accent: AccentType, gender: VoiceGender) -> Option<&str> {
        self.voices.get(&(accent, gender)).map(String::as_str)
    }

    /// Iterate over all entries in (accent, gender) order.
    pub fn iter(&self) -> impl Iterator<Item = (AccentType, VoiceGender, &str)> {
        self.voices
            .iter()
            .map(|(&(accent, gender), id)| (accent, gender, id.as_str()))
    }

    /// Whether every declared (accent, gender) pair has a non-empty entry.
    #[must_use]
    pub fn is_total(&self) -> bool {
        AccentType::ALL.iter().all(|&accent| {
            VoiceGender::ALL
                .iter()
                .all(|&gender| self.voice_id(accent, gender).is_some_and(|id| !id.is_empty()))
        })
    }
}

impl Default for VoiceMapping {
    fn default() -> Self {
        Self::google_neural2()
    }
}
