//! Full-router tests: API, liveness, readiness, OpenAPI and 404 handling.

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use core_config::AppInfo;
use domain_embedding::{
    EMBEDDING_DIMENSION, EmbeddingError, EmbeddingResult, EmbeddingService, TextEmbedder,
};
use http_body_util::BodyExt;
use semantic_embedding::build_router;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

struct FixedEmbedder {
    dimension: usize,
}

#[async_trait]
impl TextEmbedder for FixedEmbedder {
    fn dimension(&self) -> usize {
        self.dimension
    }

    async fn embed(&self, _text: &str) -> EmbeddingResult<Vec<f32>> {
        Ok(vec![0.01; self.dimension])
    }
}

/// Counts inference calls and fails every one of them.
struct BrokenEmbedder {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl TextEmbedder for BrokenEmbedder {
    fn dimension(&self) -> usize {
        EMBEDDING_DIMENSION
    }

    async fn embed(&self, _text: &str) -> EmbeddingResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(EmbeddingError::Model("onnx session lost".to_string()))
    }
}

/// Counts inference calls and always succeeds.
struct CountingEmbedder {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl TextEmbedder for CountingEmbedder {
    fn dimension(&self) -> usize {
        EMBEDDING_DIMENSION
    }

    async fn embed(&self, _text: &str) -> EmbeddingResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![0.01; EMBEDDING_DIMENSION])
    }
}

const APP: AppInfo = AppInfo {
    name: "semantic_embedding",
    version: "0.1.0",
};

fn app_with_dimension(dimension: usize) -> Router {
    build_router(APP, EmbeddingService::new(FixedEmbedder { dimension }))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_embed_route_is_mounted() {
    let response = app_with_dimension(EMBEDDING_DIMENSION)
        .oneshot(
            Request::post("/embed")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "text": "hello" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_reports_identity() {
    let (status, body) = get(app_with_dimension(EMBEDDING_DIMENSION), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["name"], "semantic_embedding");
}

#[tokio::test]
async fn test_ready_when_model_has_expected_width() {
    let (status, body) = get(app_with_dimension(EMBEDDING_DIMENSION), "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["model"], "connected");
}

#[tokio::test]
async fn test_not_ready_when_model_width_is_wrong() {
    let (status, body) = get(app_with_dimension(768), "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "not ready");
    assert!(body["model_error"].as_str().unwrap().contains("768"));
}

#[tokio::test]
async fn test_not_ready_when_inference_fails() {
    let calls = Arc::new(AtomicUsize::new(0));
    let app = build_router(
        APP,
        EmbeddingService::new(BrokenEmbedder {
            calls: Arc::clone(&calls),
        }),
    );

    let (status, body) = get(app.clone(), "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["model_error"].as_str().unwrap().contains("onnx session lost"));

    get(app, "/ready").await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_ready_caches_successful_self_check() {
    let calls = Arc::new(AtomicUsize::new(0));
    let app = build_router(
        APP,
        EmbeddingService::new(CountingEmbedder {
            calls: Arc::clone(&calls),
        }),
    );

    for _ in 0..3 {
        let (status, _) = get(app.clone(), "/ready").await;
        assert_eq!(status, StatusCode::OK);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_openapi_document_lists_embed() {
    let (status, body) = get(
        app_with_dimension(EMBEDDING_DIMENSION),
        "/api-docs/openapi.json",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/embed"]["post"].is_object());
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (status, body) = get(app_with_dimension(EMBEDDING_DIMENSION), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}
