//! HTTP contract tests for the Google TTS requester.
//!
//! A wiremock server stands in for `texttospeech.googleapis.com`; the
//! end-to-end cases pair it with the fake audio output to drive a full
//! pronunciation without audio hardware.

mod support;

use std::sync::Arc;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pronounce_core::{AccentType, SpeechSynthesizer, SynthesisError, VoiceGender};
use pronounce_voice::{
    GoogleTtsClient, GoogleTtsConfig, PlaybackError, PlayerState, PronunciationPlayer,
};

use support::{FakeOutput, sample_mp3};

const SYNTH_PATH: &str = "/v1/text:synthesize";

fn client_for(server: &MockServer) -> GoogleTtsClient {
    let config =
        GoogleTtsConfig::new("test-key").with_endpoint(format!("{}{SYNTH_PATH}", server.uri()));
    GoogleTtsClient::new(config).unwrap()
}

fn audio_response(bytes: &[u8]) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "audioContent": STANDARD.encode(bytes) }))
}

#[tokio::test]
async fn posts_json_body_with_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SYNTH_PATH))
        .and(query_param("key", "test-key"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "input": { "text": "hello" },
            "voice": { "languageCode": "en-US", "name": "en-US-Neural2-A" },
            "audioConfig": { "audioEncoding": "MP3" }
        })))
        .respond_with(audio_response(b"ID3 fake mp3"))
        .expect(1)
        .mount(&server)
        .await;

    let audio = client_for(&server)
        .synthesize("hello", AccentType::American, VoiceGender::Female)
        .await
        .unwrap();
    assert_eq!(audio, b"ID3 fake mp3".to_vec());
}

#[tokio::test]
async fn british_male_selects_neural2_b() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({
            "input": { "text": "schedule" },
            "voice": { "languageCode": "en-GB", "name": "en-GB-Neural2-B" },
            "audioConfig": { "audioEncoding": "MP3" }
        })))
        .respond_with(audio_response(b"abc"))
        .expect(1)
        .mount(&server)
        .await;

    let audio = client_for(&server)
        .synthesize("schedule", AccentType::British, VoiceGender::Male)
        .await
        .unwrap();
    assert_eq!(audio, b"abc".to_vec());
}

#[tokio::test]
async fn non_200_is_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .synthesize("hello", AccentType::American, VoiceGender::Female)
        .await
        .unwrap_err();
    assert_eq!(err, SynthesisError::Service { status: 403 });
}

#[tokio::test]
async fn error_body_without_audio_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "quota" })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .synthesize("hello", AccentType::American, VoiceGender::Female)
        .await
        .unwrap_err();
    assert!(matches!(err, SynthesisError::MalformedResponse(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_service_is_network_error() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    drop(server);

    let err = client
        .synthesize("hello", AccentType::American, VoiceGender::Female)
        .await
        .unwrap_err();
    assert!(matches!(err, SynthesisError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn configured_timeout_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(audio_response(b"late").set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let config = GoogleTtsConfig::new("test-key")
        .with_endpoint(format!("{}{SYNTH_PATH}", server.uri()))
        .with_timeout(Duration::from_millis(200));
    let client = GoogleTtsClient::new(config).unwrap();

    let err = client
        .synthesize("hello", AccentType::American, VoiceGender::Female)
        .await
        .unwrap_err();
    assert!(matches!(err, SynthesisError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn network_error_does_not_leak_api_key() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    drop(server);

    let err = client
        .synthesize("hello", AccentType::American, VoiceGender::Female)
        .await
        .unwrap_err();
    assert!(!err.to_string().contains("test-key"), "{err}");
}

// ── End to end through the player ──────────────────────────────────

#[tokio::test]
async fn play_hello_then_finish_resolves_true() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SYNTH_PATH))
        .respond_with(audio_response(&sample_mp3()))
        .mount(&server)
        .await;

    let (output, mut started) = FakeOutput::new();
    let output = Arc::new(output);
    let player = Arc::new(PronunciationPlayer::new(
        Arc::new(client_for(&server)),
        output.clone(),
    ));

    let task = {
        let player = Arc::clone(&player);
        tokio::spawn(async move { player.play_word_audio("hello", AccentType::American).await })
    };

    assert_eq!(started.recv().await, Some(0));
    let clip = output.clip(0);
    assert_eq!((clip.channels, clip.sample_rate), (1, 22_050));
    assert!(!clip.samples.is_empty());

    assert!(output.finish(0));
    assert!(task.await.unwrap().unwrap());
    assert_eq!(player.state(), PlayerState::Idle);
}

#[tokio::test]
async fn play_with_forbidden_key_fails_with_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let (output, _started) = FakeOutput::new();
    let output = Arc::new(output);
    let player = PronunciationPlayer::new(Arc::new(client_for(&server)), output.clone());

    let err = player
        .play_word_audio("hello", AccentType::American)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PlaybackError::Synthesis(SynthesisError::Service { status: 403 })
    ));
    assert_eq!(player.state(), PlayerState::Idle);
    assert_eq!(output.starts(), 0);
}
