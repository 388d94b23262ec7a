#![allow(dead_code)]

//! Test infrastructure for blog-server API tests

use blog_auth::JwtValidator;
use blog_core::{ArticleRules, CompletionProvider, CoreError, Result as CoreResult};
use blog_db::{InMemoryArticleRepository, InMemoryPromptLogRepository};
use blog_server::{AppState, build_router};
use blog_service::{AiAssistService, BlogService};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "test-supabase-jwt-secret-with-32-plus-chars";

/// Completion provider that replays a canned reply and records prompts.
#[derive(Default)]
pub struct CannedCompletion {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl CannedCompletion {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for CannedCompletion {
    async fn complete(&self, prompt: &str) -> CoreResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply
            .clone()
            .ok_or_else(|| CoreError::completion("provider unavailable"))
    }
}

/// AppState over in-memory stores with authentication disabled
pub fn create_test_app_state(provider: Arc<CannedCompletion>) -> AppState {
    build_state(provider, None)
}

/// AppState over in-memory stores that requires Supabase-style tokens
pub fn create_auth_app_state(provider: Arc<CannedCompletion>) -> AppState {
    let validator = JwtValidator::with_hs256(TEST_JWT_SECRET.as_bytes(), "authenticated");
    build_state(provider, Some(validator))
}

fn build_state(provider: Arc<CannedCompletion>, validator: Option<JwtValidator>) -> AppState {
    let blog = BlogService::new(
        Arc::new(InMemoryArticleRepository::new()),
        ArticleRules::default(),
    );
    let assistant = AiAssistService::new(Arc::new(InMemoryPromptLogRepository::new()), provider);

    AppState::new(blog, assistant, validator, "memory")
}

pub fn create_test_app() -> Router {
    build_router(create_test_app_state(Arc::new(CannedCompletion::failing())))
}

/// Sign an access token the way Supabase Auth does.
pub fn create_test_token(sub: &str, audience: &str, expires_in_secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = json!({
        "sub": sub,
        "aud": audience,
        "role": "authenticated",
        "iat": now,
        "exp": now + expires_in_secs,
    });

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

/// Send one request through the router and decode the JSON body (Null when empty).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// Create an article through the API and return its JSON.
pub async fn create_article(app: &Router, title: &str, category: &str, content: &str) -> Value {
    let (status, json) = send(
        app,
        "POST",
        "/api/articles",
        Some(json!({ "title": title, "category": category, "content": content })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {json}");
    json
}
