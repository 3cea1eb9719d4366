//! Full-router tests: readiness after bootstrap, CORS, OpenAPI and 404 handling.

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use core_config::AppInfo;
use domain_documents::{
    DocumentError, DocumentPoint, DocumentRepository, DocumentResult, DocumentService,
    EmbeddingClient, SearchHit, VECTOR_DIMENSION,
};
use http_body_util::BodyExt;
use semantic_search::build_router;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

struct ConstantEmbedder;

#[async_trait]
impl EmbeddingClient for ConstantEmbedder {
    async fn embed(&self, _text: &str) -> DocumentResult<Vec<f32>> {
        Ok(vec![0.5; VECTOR_DIMENSION])
    }
}

/// Repository whose collection lookup and health can be scripted.
#[derive(Default)]
struct ScriptedRepository {
    exists: bool,
    unreachable: bool,
    creates: Arc<AtomicUsize>,
}

#[async_trait]
impl DocumentRepository for ScriptedRepository {
    async fn collection_exists(&self, _collection: &str) -> DocumentResult<bool> {
        if self.unreachable {
            return Err(DocumentError::VectorStore("connection refused".to_string()));
        }
        Ok(self.exists)
    }

    async fn create_collection(&self, _collection: &str, _dimension: u64) -> DocumentResult<()> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn insert(&self, _collection: &str, _point: DocumentPoint) -> DocumentResult<()> {
        Ok(())
    }

    async fn search(
        &self,
        _collection: &str,
        _vector: Vec<f32>,
        _limit: u64,
    ) -> DocumentResult<Vec<SearchHit>> {
        Ok(Vec::new())
    }

    async fn health_check(&self) -> DocumentResult<()> {
        if self.unreachable {
            return Err(DocumentError::VectorStore("connection refused".to_string()));
        }
        Ok(())
    }
}

const APP: AppInfo = AppInfo {
    name: "semantic_search",
    version: "0.1.0",
};

async fn bootstrapped_app(repo: ScriptedRepository) -> Router {
    let service = Arc::new(DocumentService::new(ConstantEmbedder, repo));
    service.bootstrap().await;
    build_router(APP, service)
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
async fn test_ready_after_successful_bootstrap() {
    let creates = Arc::new(AtomicUsize::new(0));
    let app = bootstrapped_app(ScriptedRepository {
        exists: false,
        creates: Arc::clone(&creates),
        ..Default::default()
    })
    .await;

    let (status, body) = get(app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["collection"], "connected");
    assert_eq!(body["qdrant"], "connected");
    assert_eq!(creates.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_existing_collection_is_not_recreated() {
    let creates = Arc::new(AtomicUsize::new(0));
    let app = bootstrapped_app(ScriptedRepository {
        exists: true,
        creates: Arc::clone(&creates),
        ..Default::default()
    })
    .await;

    let (status, _) = get(app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(creates.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_bootstrap_failure_keeps_serving_but_not_ready() {
    let app = bootstrapped_app(ScriptedRepository {
        unreachable: true,
        ..Default::default()
    })
    .await;

    let (status, body) = get(app.clone(), "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "not ready");
    assert_eq!(body["collection"], "disconnected");
    assert!(
        body["collection_error"]
            .as_str()
            .unwrap()
            .contains("connection refused")
    );

    let (status, body) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "semantic_search");
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin_with_credentials() {
    let app = bootstrapped_app(ScriptedRepository::default()).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/search")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn test_search_response_carries_cors_headers() {
    let app = bootstrapped_app(ScriptedRepository::default()).await;

    let response = app
        .oneshot(
            Request::post("/search")
                .header(header::ORIGIN, "http://example.test")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "query": "hi" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://example.test"
    );
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let app = bootstrapped_app(ScriptedRepository::default()).await;

    let (status, body) = get(app, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/add-document"]["post"].is_object());
    assert!(body["paths"]["/search"]["post"].is_object());
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = bootstrapped_app(ScriptedRepository::default()).await;

    let (status, body) = get(app, "/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}
