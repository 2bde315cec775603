//! `voices`: print the voice table.

use std::fmt::Write as _;

use pronounce_core::VoiceMapping;

/// Render the table as aligned text.
pub fn render(voices: &VoiceMapping) -> String {
    let mut out = format!("{:<10} {:<8} {:<10} {}\n", "ACCENT", "GENDER", "LANGUAGE", "VOICE");
    for (accent, gender, id) in voices.iter() {
        let _ = writeln!(
            out,
            "{:<10} {:<8} {:<10} {}",
            accent,
            gender,
            accent.language_code(),
            id
        );
    }
    out
}

pub fn execute() {
    print!("{}", render(&VoiceMapping::default()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_every_voice() {
        let text = render(&VoiceMapping::default());
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("en-GB-Neural2-B"));
        assert!(text.contains("en-US-Neural2-A"));
        assert!(text.lines().any(|l| l.starts_with("british") && l.contains("en-GB")));
    }
}
