//! Readiness for the embedding service.
//!
//! The model is loaded before the listener binds. Readiness additionally
//! runs one real embedding and checks its output, caching the first success.

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use domain_embedding::{EmbeddingService, TextEmbedder};
use std::sync::Arc;

pub async fn ready_handler<E: TextEmbedder>(
    State(service): State<Arc<EmbeddingService<E>>>,
) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "model",
        Box::pin(async { service.self_check().await.map_err(|e| e.to_string()) }),
    )];

    run_health_checks(checks).await.into_response()
}

/// Router exposing `GET /ready`
pub fn ready_router<E: TextEmbedder + 'static>(service: Arc<EmbeddingService<E>>) -> Router {
    Router::new()
        .route("/ready", get(ready_handler::<E>))
        .with_state(service)
}
