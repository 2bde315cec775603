//! Settings domain types and validation.
//!
//! These are pure domain types with no infrastructure dependencies. Values are
//! read from the process environment by [`Settings::from_env`]; the CLI layers
//! its own flags on top.

use std::fmt;
use std::time::Duration;

use crate::domain::AccentType;

/// Google Cloud Text-to-Speech REST endpoint.
pub const DEFAULT_TTS_ENDPOINT: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";

/// Environment variable holding the Google Cloud API key.
pub const API_KEY_ENV: &str = "GOOGLE_TTS_API_KEY";

/// Environment variable overriding the TTS endpoint.
pub const ENDPOINT_ENV: &str = "PRONOUNCE_TTS_ENDPOINT";

/// Environment variable setting the request timeout in whole seconds.
pub const TIMEOUT_ENV: &str = "PRONOUNCE_TTS_TIMEOUT_SECS";

/// Environment variable selecting the default accent.
pub const ACCENT_ENV: &str = "PRONOUNCE_ACCENT";

/// Application settings structure.
///
/// All fields are optional to support partial configuration and graceful
/// defaults.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Google Cloud API key, sent as the `key` query parameter.
    pub api_key: Option<String>,

    /// Override for the synthesize endpoint (used by tests and proxies).
    pub tts_endpoint: Option<String>,

    /// Whole-request timeout. `None` means no timeout.
    pub request_timeout_secs: Option<u64>,

    /// Accent used when a command does not name one.
    pub default_accent: Option<AccentType>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            api_key: None,
            tts_endpoint: None,
            request_timeout_secs: None,
            default_accent: Some(AccentType::American),
        }
    }

    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let request_timeout_secs = get(TIMEOUT_ENV)
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| SettingsError::InvalidTimeout(raw.clone()))
            })
            .transpose()?;

        let default_accent = get(ACCENT_ENV)
            .map(|raw| {
                raw.parse::<AccentType>()
                    .map_err(|e| SettingsError::InvalidAccent(e.0))
            })
            .transpose()?;

        Ok(Self {
            api_key: get(API_KEY_ENV),
            tts_endpoint: get(ENDPOINT_ENV),
            request_timeout_secs,
            default_accent,
        })
    }

    /// Get the effective TTS endpoint (with default fallback).
    #[must_use]
    pub fn effective_endpoint(&self) -> &str {
        self.tts_endpoint.as_deref().unwrap_or(DEFAULT_TTS_ENDPOINT)
    }

    /// Get the effective default accent.
    #[must_use]
    pub fn effective_accent(&self) -> AccentType {
        self.default_accent.unwrap_or_default()
    }

    /// Request timeout as a [`Duration`], if one is configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// The API key, or [`SettingsError::MissingApiKey`].
    pub fn require_api_key(&self) -> Result<&str, SettingsError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(SettingsError::MissingApiKey)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("tts_endpoint", &self.tts_endpoint)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("default_accent", &self.default_accent)
            .finish()
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("No API key configured; set {API_KEY_ENV} or pass --api-key")]
    MissingApiKey,

    #[error("TTS endpoint must be an http(s) URL, got '{0}'")]
    InvalidEndpoint(String),

    #[error("Request timeout must be a positive number of seconds, got '{0}'")]
    InvalidTimeout(String),

    #[error("Invalid default accent '{0}'")]
    InvalidAccent(String),
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(ref endpoint) = settings.tts_endpoint {
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(SettingsError::InvalidEndpoint(endpoint.clone()));
        }
    }

    if settings.request_timeout_secs == Some(0) {
        return Err(SettingsError::InvalidTimeout("0".to_string()));
    }

    Ok(())
}
