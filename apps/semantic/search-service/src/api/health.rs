//! Readiness check backed by the collection bootstrap and a live Qdrant ping.

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use domain_documents::{DocumentRepository, DocumentService, EmbeddingClient};
use std::sync::Arc;

/// Ready only when the `documents` collection was bootstrapped and Qdrant
/// still answers.
pub async fn ready_handler<C: EmbeddingClient, R: DocumentRepository>(
    State(service): State<Arc<DocumentService<C, R>>>,
) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![
        ("collection", Box::pin(service.readiness().check())),
        ("qdrant", Box::pin(service.check_vector_store())),
    ];

    run_health_checks(checks).await.into_response()
}

pub fn ready_router<C, R>(service: Arc<DocumentService<C, R>>) -> Router
where
    C: EmbeddingClient + 'static,
    R: DocumentRepository + 'static,
{
    Router::new()
        .route("/ready", get(ready_handler::<C, R>))
        .with_state(service)
}
