//! Decoded audio buffers.
//!
//! The TTS service returns an encoded container (MP3). [`AudioClip::decode`]
//! turns it into interleaved f32 PCM so that playback never has to touch the
//! container again and decode failures surface before any audio starts.

use std::io::Cursor;
use std::time::Duration;

use rodio::{Decoder, Source};

use crate::error::PlaybackError;

/// Interleaved f32 PCM audio ready for playback.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    /// Interleaved samples in `[-1.0, 1.0]`.
    pub samples: Vec<f32>,

    /// Number of interleaved channels.
    pub channels: u16,

    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl AudioClip {
    /// Decode an encoded audio container (MP3 or WAV) into PCM.
    pub fn decode(bytes: Vec<u8>) -> Result<Self, PlaybackError> {
        if bytes.is_empty() {
            return Err(PlaybackError::Decode("empty audio payload".to_string()));
        }

        let decoder =
            Decoder::new(Cursor::new(bytes)).map_err(|e| PlaybackError::Decode(e.to_string()))?;

        let channels = decoder.channels();
        let sample_rate = decoder.sample_rate();
        if channels == 0 || sample_rate == 0 {
            return Err(PlaybackError::Decode(format!(
                "invalid stream parameters ({channels} channels @ {sample_rate} Hz)"
            )));
        }

        let samples: Vec<f32> = decoder.map(|s| f32::from(s) / 32_768.0).collect();

        tracing::debug!(
            channels,
            sample_rate,
            frames = samples.len() / usize::from(channels),
            "Decoded synthesized audio"
        );

        Ok(Self {
            samples,
            channels,
            sample_rate,
        })
    }

    /// Playback length of the clip.
    #[must_use]
    pub fn duration(&self) -> Duration {
        if self.channels == 0 || self.sample_rate == 0 {
            return Duration::ZERO;
        }
        let frames = self.samples.len() / usize::from(self.channels);
        #[allow(clippy::cast_precision_loss)]
        Duration::from_secs_f64(frames as f64 / f64::from(self.sample_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal 16-bit PCM mono WAV container.
    fn wav_bytes(sample_rate: u32, samples: &[i16]) -> Vec<u8> {
        let data_len = u32::try_from(samples.len() * 2).unwrap();
        let mut out = Vec::with_capacity(44 + samples.len() * 2);
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(36 + data_len).to_le_bytes());
        out.extend_from_slice(b"WAVE");
        out.extend_from_slice(b"fmt ");
        out.extend_from_slice(&16u32.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // PCM
        out.extend_from_slice(&1u16.to_le_bytes()); // mono
        out.extend_from_slice(&sample_rate.to_le_bytes());
        out.extend_from_slice(&(sample_rate * 2).to_le_bytes());
        out.extend_from_slice(&2u16.to_le_bytes());
        out.extend_from_slice(&16u16.to_le_bytes());
        out.extend_from_slice(b"data");
        out.extend_from_slice(&data_len.to_le_bytes());
        for s in samples {
            out.extend_from_slice(&s.to_le_bytes());
        }
        out
    }

    #[test]
    fn decodes_wav_container() {
        let clip = AudioClip::decode(wav_bytes(8_000, &[0, 16_384, -16_384, 0])).unwrap();
        assert_eq!(clip.channels, 1);
        assert_eq!(clip.sample_rate, 8_000);
        assert_eq!(clip.samples.len(), 4);
        assert!((clip.samples[1] - 0.5).abs() < 1e-4);
        assert!((clip.samples[2] + 0.5).abs() < 1e-4);
    }

    #[test]
    fn decodes_mp3_container() {
        // LAME-encoded MPEG-2 Layer III, 22.05 kHz mono, ~1.1 s, with an ID3v2 tag.
        let bytes = include_bytes!("../tests/fixtures/sample.mp3").to_vec();
        let clip = AudioClip::decode(bytes).unwrap();

        assert_eq!(clip.channels, 1);
        assert_eq!(clip.sample_rate, 22_050);
        assert!(!clip.samples.is_empty());
        assert!(clip.samples.iter().all(|s| (-1.0..=1.0).contains(s)));
        let secs = clip.duration().as_secs_f64();
        assert!((0.5..1.5).contains(&secs), "duration {secs}");
    }

    #[test]
    fn rejects_id3_tag_without_audio_frames() {
        let bytes = include_bytes!("../tests/fixtures/sample.mp3");
        // ID3 header only, no audio frames.
        let err = AudioClip::decode(bytes[..32].to_vec()).unwrap_err();
        assert!(matches!(err, PlaybackError::Decode(_)), "got {err:?}");
    }

    #[test]
    fn duration_from_frames() {
        let clip = AudioClip {
            samples: vec![0.0; 16_000],
            channels: 2,
            sample_rate: 8_000,
        };
        assert_eq!(clip.duration(), Duration::from_secs(1));
    }

    #[test]
    fn rejects_non_audio_bytes() {
        let err = AudioClip::decode(b"definitely not audio".to_vec()).unwrap_err();
        assert!(matches!(err, PlaybackError::Decode(_)), "got {err:?}");
    }

    #[test]
    fn rejects_empty_payload() {
        let err = AudioClip::decode(Vec::new()).unwrap_err();
        assert!(matches!(err, PlaybackError::Decode(_)));
    }
}
