//! Google Cloud Text-to-Speech requester.
//!
//! Implements [`SpeechSynthesizer`] against the `v1/text:synthesize` REST
//! endpoint using API-key authentication. One POST per call, no retries:
//!
//! ```text
//! POST {endpoint}?key=<API_KEY>
//! { "input": { "text": "..." },
//!   "voice": { "languageCode": "en-GB", "name": "en-GB-Neural2-C" },
//!   "audioConfig": { "audioEncoding": "MP3" } }
//! ```
//!
//! A 200 response carries `{"audioContent": "<base64 MP3>"}`.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use pronounce_core::{
    AccentType, DEFAULT_TTS_ENDPOINT, Settings, SettingsError, SpeechSynthesizer,
    SynthesisError, VoiceGender, VoiceMapping,
};

/// Audio encoding requested from the service.
pub const AUDIO_ENCODING: &str = "MP3";

// ── Wire types ─────────────────────────────────────────────────────

/// JSON body of a synthesize request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeRequest {
    pub input: SynthesisInput,
    pub voice: VoiceSelectionParams,
    pub audio_config: AudioConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynthesisInput {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSelectionParams {
    pub language_code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioConfig {
    pub audio_encoding: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: Option<String>,
}

// ── Configuration ──────────────────────────────────────────────────

/// Connection settings for [`GoogleTtsClient`].
#[derive(Clone)]
pub struct GoogleTtsConfig {
    /// API key sent as the `key` query parameter.
    pub api_key: String,

    /// Synthesize endpoint URL.
    pub endpoint: String,

    /// Whole-request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,

    /// Voice table used to resolve (accent, gender).
    pub voices: VoiceMapping,
}

impl GoogleTtsConfig {
    /// Config for the public endpoint with the default voice table.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_TTS_ENDPOINT.to_string(),
            timeout: None,
            voices: VoiceMapping::default(),
        }
    }

    /// Derive the config from application settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, SettingsError> {
        pronounce_core::validate_settings(settings)?;
        let api_key = settings.require_api_key()?;
        Ok(Self {
            api_key: api_key.to_string(),
            endpoint: settings.effective_endpoint().to_string(),
            timeout: settings.request_timeout(),
            voices: VoiceMapping::default(),
        })
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_voices(mut self, voices: VoiceMapping) -> Self {
        self.voices = voices;
        self
    }
}

impl std::fmt::Debug for GoogleTtsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTtsConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// Speech requester backed by Google Cloud Text-to-Speech.
#[derive(Debug, Clone)]
pub struct GoogleTtsClient {
    http: reqwest::Client,
    config: GoogleTtsConfig,
}

impl GoogleTtsClient {
    pub fn new(config: GoogleTtsConfig) -> Result<Self, SynthesisError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| SynthesisError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    /// Build the JSON request body for `text`.
    pub fn build_request(
        &self,
        text: &str,
        accent: AccentType,
        voice: VoiceGender,
    ) -> Result<SynthesizeRequest, SynthesisError> {
        let name = self
            .config
            .voices
            .voice_id(accent, voice)
            .ok_or(SynthesisError::InvalidVoiceSelection {
                accent,
                gender: voice,
            })?;

        Ok(SynthesizeRequest {
            input: SynthesisInput {
                text: text.to_string(),
            },
            voice: VoiceSelectionParams {
                language_code: accent.language_code().to_string(),
                name: name.to_string(),
            },
            audio_config: AudioConfig {
                audio_encoding: AUDIO_ENCODING.to_string(),
            },
        })
    }
}

/// Extract and decode `audioContent` from a 200 response body.
pub fn parse_audio_content(body: &[u8]) -> Result<Vec<u8>, SynthesisError> {
    let response: SynthesizeResponse = serde_json::from_slice(body)
        .map_err(|e| SynthesisError::MalformedResponse(format!("invalid JSON: {e}")))?;

    let encoded = response.audio_content.ok_or_else(|| {
        SynthesisError::MalformedResponse("response has no audioContent".to_string())
    })?;

    STANDARD
        .decode(encoded.trim())
        .map_err(|e| SynthesisError::MalformedResponse(format!("audioContent is not base64: {e}")))
}

#[async_trait]
impl SpeechSynthesizer for GoogleTtsClient {
    async fn synthesize(
        &self,
        text: &str,
        accent: AccentType,
        voice: VoiceGender,
    ) -> Result<Vec<u8>, SynthesisError> {
        let body = self.build_request(text, accent, voice)?;

        tracing::info!(
            text,
            language = %body.voice.language_code,
            voice = %body.voice.name,
            "Requesting speech synthesis"
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| SynthesisError::Network(e.without_url().to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                body = %detail.chars().take(200).collect::<String>(),
                "TTS service rejected request"
            );
            return Err(SynthesisError::Service {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::Network(e.without_url().to_string()))?;

        let audio = parse_audio_content(&bytes)?;
        tracing::debug!(bytes = audio.len(), "Speech synthesis complete");
        Ok(audio)
    }
}
