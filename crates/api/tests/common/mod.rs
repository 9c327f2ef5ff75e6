#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use dreamjournal_api::router::build_app_router;
use dreamjournal_api::state::AppState;
use dreamjournal_db::EntryStore;
use dreamjournal_interpreter::{GenerationError, InterpretationService, TextGenerator};

/// Stand-in for the language model: answers with fixed text or always fails,
/// and records every prompt it receives.
pub struct StubGenerator {
    answer: Option<String>,
    delay: Option<Duration>,
    pub prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn answering(text: &str) -> Arc<Self> {
        Arc::new(Self {
            answer: Some(text.to_string()),
            delay: None,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            answer: None,
            delay: None,
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Fails only after `delay`, like a provider call that hits its timeout.
    pub fn failing_after(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            answer: None,
            delay: Some(delay),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.answer {
            Some(text) => Ok(text.clone()),
            None => Err(GenerationError::ApiError {
                status: 429,
                body: "quota exceeded".into(),
            }),
        }
    }
}

/// A router wired to a throwaway journal file and a stub generator.
pub struct TestApp {
    pub router: Router,
    pub store: EntryStore,
    pub generator: Arc<StubGenerator>,
    _dir: TempDir,
}

/// Build the full application router (same middleware stack as production)
/// around a fresh temp-dir journal.
pub fn build_test_app(generator: Arc<StubGenerator>) -> TestApp {
    build_test_app_with_timeout(generator, Duration::from_secs(30))
}

/// Same as [`build_test_app`] with a custom request timeout.
pub fn build_test_app_with_timeout(
    generator: Arc<StubGenerator>,
    request_timeout: Duration,
) -> TestApp {
    let dir = TempDir::new().unwrap();
    let store = EntryStore::new(dir.path().join("data").join("dreams.json"));

    let state = AppState {
        store: store.clone(),
        interpreter: Arc::new(InterpretationService::new(generator.clone())),
    };

    TestApp {
        router: build_app_router(state, request_timeout),
        store,
        generator,
        _dir: dir,
    }
}

pub async fn get(app: &TestApp, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

/// POST an urlencoded form. Values are encoded here; pass them raw.
pub async fn post_form(app: &TestApp, uri: &str, fields: &[(&str, &str)]) -> Response {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", form_encode(k), form_encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

/// POST with an arbitrary body and no content type.
pub async fn post_raw(app: &TestApp, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::from(body))
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// `application/x-www-form-urlencoded` encoding of one key or value.
fn form_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
