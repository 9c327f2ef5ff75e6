//! Drives [`GeminiClient`] against a local stand-in for the Gemini API.

use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use dreamjournal_core::journal::FALLBACK_INTERPRETATION;
use dreamjournal_interpreter::{
    GeminiClient, GeminiConfig, GenerationError, InterpretationService, TextGenerator,
};
use serde_json::{json, Value};

/// What the fake server saw on its last request.
#[derive(Default)]
struct Captured {
    model_call: Option<String>,
    api_key: Option<String>,
    body: Option<Value>,
}

#[derive(Clone)]
struct FakeGemini {
    status: StatusCode,
    reply: Value,
    captured: Arc<Mutex<Captured>>,
}

async fn generate_content(
    State(fake): State<FakeGemini>,
    Path(model_call): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut captured = fake.captured.lock().unwrap();
    captured.model_call = Some(model_call);
    captured.api_key = headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    captured.body = Some(body);
    (fake.status, Json(fake.reply.clone()))
}

/// Start the fake API and return a client pointed at it.
async fn start_fake(status: StatusCode, reply: Value) -> (GeminiClient, Arc<Mutex<Captured>>) {
    let captured = Arc::new(Mutex::new(Captured::default()));
    let fake = FakeGemini {
        status,
        reply,
        captured: Arc::clone(&captured),
    };
    let app = Router::new()
        .route("/v1beta/models/{model_call}", post(generate_content))
        .with_state(fake);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let mut config = GeminiConfig::new("test-key");
    config.base_url = format!("http://{addr}");
    config.timeout_secs = 5;
    (GeminiClient::new(config).unwrap(), captured)
}

fn reply_with(text: &str) -> Value {
    json!({
        "candidates": [
            { "content": { "role": "model", "parts": [ { "text": text } ] } }
        ]
    })
}

// ---------------------------------------------------------------------------
// Test: successful generation returns candidate text and sends the prompt
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generate_returns_candidate_text() {
    let (client, captured) = start_fake(StatusCode::OK, reply_with("You seek freedom.")).await;

    let text = client.generate("interpret this").await.unwrap();

    assert_eq!(text, "You seek freedom.");

    let captured = captured.lock().unwrap();
    assert_eq!(
        captured.model_call.as_deref(),
        Some("gemini-1.5-flash:generateContent")
    );
    assert_eq!(captured.api_key.as_deref(), Some("test-key"));
    assert_eq!(
        captured.body.as_ref().unwrap()["contents"][0]["parts"][0]["text"],
        "interpret this"
    );
}

// ---------------------------------------------------------------------------
// Test: non-2xx status maps to ApiError with the body preserved
// ---------------------------------------------------------------------------

#[tokio::test]
async fn quota_error_maps_to_api_error() {
    let (client, _) = start_fake(
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "error": { "message": "Resource has been exhausted" } }),
    )
    .await;

    let err = client.generate("prompt").await.unwrap_err();

    assert_matches!(err, GenerationError::ApiError { status: 429, ref body } if body.contains("exhausted"));
}

// ---------------------------------------------------------------------------
// Test: a reply without candidates is an EmptyResponse error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn blocked_prompt_is_empty_response() {
    let (client, _) = start_fake(
        StatusCode::OK,
        json!({ "promptFeedback": { "blockReason": "SAFETY" } }),
    )
    .await;

    let err = client.generate("prompt").await.unwrap_err();

    assert_matches!(err, GenerationError::EmptyResponse);
}

// ---------------------------------------------------------------------------
// Test: unreachable host is a Request error, and the service falls back
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_host_falls_back_in_service() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut config = GeminiConfig::new("test-key");
    config.base_url = format!("http://{addr}");
    config.timeout_secs = 5;
    let client = GeminiClient::new(config).unwrap();

    assert_matches!(
        client.generate("prompt").await,
        Err(GenerationError::Request(_))
    );

    let service = InterpretationService::new(Arc::new(client));
    let text = service.interpret("flying", "joy", "wings").await;
    assert_eq!(text, FALLBACK_INTERPRETATION);
}
