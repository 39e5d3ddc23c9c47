//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use formgen_api::auth::jwt::{generate_access_token, JwtConfig};
use formgen_api::config::ServerConfig;
use formgen_api::gateway::PresentationGateway;
use formgen_api::router::build_app_router;
use formgen_api::state::AppState;
use formgen_core::generation::{FormGenerator, GenerationError};
use formgen_pipeline::GenerationPipeline;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_ORIGIN: &str = "http://localhost:3001";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
        access_token_expiry_mins: 15,
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://unused-in-tests".to_string(),
        database_max_connections: 5,
        cors_origins: vec![TEST_ORIGIN.to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        jwt: test_jwt_config(),
    }
}

/// Build the application router around `generator`, with the same middleware
/// stack production uses.
pub fn build_test_app_with_generator(pool: PgPool, generator: Arc<dyn FormGenerator>) -> Router {
    let config = test_config();
    let pipeline = Arc::new(GenerationPipeline::new(pool.clone(), generator));
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        gateway: Arc::new(PresentationGateway::new(pipeline)),
    };
    build_app_router(state, &config)
}

/// Build the application router with a generator that returns
/// [`feedback_payload`].
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_generator(pool, Arc::new(StaticGenerator::new(feedback_payload())))
}

/// A valid bearer token for `user_id`.
pub fn token_for(user_id: &str) -> String {
    generate_access_token(user_id, &test_jwt_config()).expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Stub generators
// ---------------------------------------------------------------------------

/// Returns a fixed payload and counts how often it was asked.
pub struct StaticGenerator {
    payload: serde_json::Value,
    calls: AtomicUsize,
}

impl StaticGenerator {
    pub fn new(payload: serde_json::Value) -> Self {
        Self {
            payload,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FormGenerator for StaticGenerator {
    async fn generate(&self, _description: &str) -> Result<serde_json::Value, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.payload.clone())
    }
}

/// Always fails as if the endpoint were unreachable.
pub struct UnreachableGenerator;

#[async_trait]
impl FormGenerator for UnreachableGenerator {
    async fn generate(&self, _description: &str) -> Result<serde_json::Value, GenerationError> {
        Err(GenerationError::Unavailable(
            "connection refused at 10.0.0.7:443".into(),
        ))
    }
}

pub fn feedback_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Feedback Survey",
        "questions": [
            {
                "text": "How would you rate your experience?",
                "fieldType": "RadioGroup",
                "fieldOptions": ["1", "2", "3", "4", "5"]
            },
            { "text": "Any other comments?", "fieldType": "Textarea" }
        ]
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn request(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header("Authorization", format!("Bearer {token}")),
        None => builder,
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, request(Method::GET, uri, None).body(Body::empty()).unwrap()).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(
        app,
        request(Method::GET, uri, Some(token))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(
        app,
        request(Method::POST, uri, None)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(
        app,
        request(Method::POST, uri, Some(token))
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

/// POST a raw body labelled as JSON, with or without a token.
pub async fn post_raw(app: Router, uri: &str, body: &str, token: Option<&str>) -> Response<Body> {
    send(
        app,
        request(Method::POST, uri, token)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(
        app,
        request(Method::POST, uri, Some(token))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(
        app,
        request(Method::DELETE, uri, Some(token))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}
