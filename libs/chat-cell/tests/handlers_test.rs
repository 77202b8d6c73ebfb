use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use chat_cell::handlers;
use chat_cell::models::ChatRequest;
use chat_cell::services::completion::{trim_reply_for_voice, TEXT_MODEL, VISION_MODEL};
use chat_cell::services::fallback::{
    fallback_reply, FEVER_FALLBACK, GENERIC_FALLBACK, NUTRITION_FALLBACK, PAIN_FALLBACK,
    SKIN_FALLBACK,
};
use shared_config::AppConfig;
use shared_models::error::AppError;

fn request(message: Option<&str>, image: Option<&str>, is_nutrition: Option<bool>) -> ChatRequest {
    ChatRequest {
        message: message.map(str::to_string),
        image: image.map(str::to_string),
        is_nutrition,
    }
}

fn configured(base_url: &str) -> Arc<AppConfig> {
    let mut config = AppConfig::unconfigured();
    config.groq_api_key = "test-key".to_string();
    config.groq_base_url = base_url.to_string();
    Arc::new(config)
}

// ---------------------------------------------------------------------------
// validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn rejects_when_message_and_image_both_missing() {
    let state = Arc::new(AppConfig::unconfigured());
    let result = handlers::chat(State(state), Json(request(None, None, None))).await;
    match result {
        Err(AppError::BadRequest(code)) => assert_eq!(code, "message or image required"),
        other => panic!("expected bad request, got {other:?}"),
    }
}

#[tokio::test]
async fn rejects_image_without_message() {
    let state = Arc::new(AppConfig::unconfigured());
    let result = handlers::chat(
        State(state),
        Json(request(None, Some("data:image/png;base64,aGk="), None)),
    )
    .await;
    match result {
        Err(AppError::BadRequest(code)) => assert_eq!(code, "message required when sending image"),
        other => panic!("expected bad request, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// degraded mode
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unconfigured_fever_message_gets_canned_fever_reply() {
    let state = Arc::new(AppConfig::unconfigured());
    let response = handlers::chat(State(state), Json(request(Some("I have a fever"), None, None)))
        .await
        .unwrap();
    assert_eq!(response.0.reply, FEVER_FALLBACK);
}

#[tokio::test]
async fn unconfigured_nutrition_request_gets_nutrition_fallback() {
    let state = Arc::new(AppConfig::unconfigured());
    let response = handlers::chat(
        State(state),
        Json(request(Some("plan my meals"), None, Some(true))),
    )
    .await
    .unwrap();
    assert_eq!(response.0.reply, NUTRITION_FALLBACK);
}

#[tokio::test]
async fn upstream_failure_is_indistinguishable_from_unconfigured() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&mock_server)
        .await;

    let response = handlers::chat(
        State(configured(&mock_server.uri())),
        Json(request(Some("I have a fever"), None, None)),
    )
    .await
    .unwrap();
    assert_eq!(response.0.reply, FEVER_FALLBACK);
}

#[test]
fn fallback_reply_keyword_routing() {
    assert_eq!(fallback_reply("high temperature today", false), FEVER_FALLBACK);
    assert_eq!(fallback_reply("my chest hurts", false), PAIN_FALLBACK);
    assert_eq!(fallback_reply("itchy skin", false), SKIN_FALLBACK);
    assert_eq!(fallback_reply("I feel off", false), GENERIC_FALLBACK);
    assert_eq!(fallback_reply("anything", true), NUTRITION_FALLBACK);
}

// ---------------------------------------------------------------------------
// configured path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn text_request_uses_text_model_and_returns_reply() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({ "model": TEXT_MODEL })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "Rest and hydrate." } }]
        })))
        .mount(&mock_server)
        .await;

    let response = handlers::chat(
        State(configured(&mock_server.uri())),
        Json(request(Some("I have a cold"), None, None)),
    )
    .await
    .unwrap();
    assert_eq!(response.0.reply, "Rest and hydrate.");
}

#[tokio::test]
async fn image_request_uses_vision_model() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({ "model": VISION_MODEL })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "Looks like a mild rash." } }]
        })))
        .mount(&mock_server)
        .await;

    let response = handlers::chat(
        State(configured(&mock_server.uri())),
        Json(request(
            Some("what is this?"),
            Some("data:image/png;base64,aGk="),
            None,
        )),
    )
    .await
    .unwrap();
    assert_eq!(response.0.reply, "Looks like a mild rash.");
}

#[tokio::test]
async fn missing_content_in_response_degrades_to_fallback() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&mock_server)
        .await;

    let response = handlers::chat(
        State(configured(&mock_server.uri())),
        Json(request(Some("hello"), None, None)),
    )
    .await
    .unwrap();
    assert_eq!(response.0.reply, GENERIC_FALLBACK);
}

// ---------------------------------------------------------------------------
// reply trimming
// ---------------------------------------------------------------------------

#[test]
fn short_replies_pass_through_untrimmed() {
    assert_eq!(trim_reply_for_voice("Rest well."), "Rest well.");
}

#[test]
fn long_replies_are_cut_on_sentence_boundaries() {
    let one = "word ".repeat(25).trim_end().to_string();
    let reply = format!("{one}. {one}. {one}.");
    let trimmed = trim_reply_for_voice(&reply);
    // Only the first 25-word sentence fits under the 40-word cap.
    assert_eq!(trimmed.split_whitespace().count(), 25);
    assert!(trimmed.ends_with('.'));
}

#[test]
fn trimmed_reply_accumulates_whole_sentences() {
    let short = "a b c d e";
    let long = "x ".repeat(50).trim_end().to_string();
    let reply = format!("{short}. {short}. {long}.");
    let trimmed = trim_reply_for_voice(&reply);
    assert_eq!(trimmed, format!("{short}. {short}."));
}
