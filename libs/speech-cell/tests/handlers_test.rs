use std::sync::Arc;

use axum::{extract::State, Json};
use base64::{engine::general_purpose, Engine as _};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared_config::AppConfig;
use shared_models::error::AppError;
use speech_cell::handlers;
use speech_cell::models::TtsRequest;

fn configured(base_url: &str) -> Arc<AppConfig> {
    let mut config = AppConfig::unconfigured();
    config.elevenlabs_api_key = "test-key".to_string();
    config.elevenlabs_voice_id = "test-voice".to_string();
    config.elevenlabs_base_url = base_url.to_string();
    Arc::new(config)
}

fn request(text: Option<&str>) -> TtsRequest {
    TtsRequest {
        text: text.map(str::to_string),
    }
}

#[tokio::test]
async fn rejects_missing_text() {
    let state = Arc::new(AppConfig::unconfigured());
    let result = handlers::tts(State(state), Json(request(None))).await;
    match result {
        Err(AppError::BadRequest(code)) => assert_eq!(code, "text_required"),
        other => panic!("expected bad request, got {other:?}"),
    }
}

#[tokio::test]
async fn unconfigured_returns_null_audio_with_marker() {
    let state = Arc::new(AppConfig::unconfigured());
    let response = handlers::tts(State(state), Json(request(Some("hello"))))
        .await
        .unwrap();
    assert_eq!(response.0.audio_base64, None);
    assert_eq!(response.0.debug.as_deref(), Some("no-credentials"));
}

#[tokio::test]
async fn streaming_endpoint_success_returns_base64_audio() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/text-to-speech/test-voice/stream"))
        .and(header("xi-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"mp3-bytes".to_vec()))
        .mount(&mock_server)
        .await;

    let response = handlers::tts(State(configured(&mock_server.uri())), Json(request(Some("hi"))))
        .await
        .unwrap();
    assert_eq!(
        response.0.audio_base64.as_deref(),
        Some(general_purpose::STANDARD.encode(b"mp3-bytes").as_str())
    );
    assert_eq!(response.0.debug, None);
}

#[tokio::test]
async fn falls_back_to_plain_endpoint_when_stream_fails() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/text-to-speech/test-voice/stream"))
        .respond_with(ResponseTemplate::new(500).set_body_string("no stream"))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/text-to-speech/test-voice"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"plain-audio".to_vec()))
        .mount(&mock_server)
        .await;

    let response = handlers::tts(State(configured(&mock_server.uri())), Json(request(Some("hi"))))
        .await
        .unwrap();
    assert_eq!(
        response.0.audio_base64.as_deref(),
        Some(general_purpose::STANDARD.encode(b"plain-audio").as_str())
    );
}

#[tokio::test]
async fn total_upstream_failure_still_reports_success_with_null_audio() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .mount(&mock_server)
        .await;

    let response = handlers::tts(State(configured(&mock_server.uri())), Json(request(Some("hi"))))
        .await
        .unwrap();
    assert_eq!(response.0.audio_base64, None);
    assert_eq!(response.0.debug.as_deref(), Some("synthesis_failed"));
}
