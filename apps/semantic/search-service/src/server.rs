//! HTTP server initialization and lifecycle management
//!
//! This module handles all server setup:
//! - color-eyre and tracing initialization
//! - Qdrant and embedding clients
//! - Best-effort `documents` collection bootstrap
//! - Router assembly (API, OpenAPI, health, readiness, CORS)
//! - Server startup with graceful shutdown

use std::sync::Arc;

use axum::Router;
use axum_helpers::create_dev_cors_layer;
use axum_helpers::server::{create_app, create_router, health_router, with_request_tracing};
use core_config::AppInfo;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_documents::{
    ApiDoc, DocumentRepository, DocumentService, EmbeddingClient, HttpEmbeddingClient,
    QdrantRepository, handlers,
};
use eyre::{Result, WrapErr};
use tracing::info;

use crate::api::health::ready_router;
use crate::config::Config;

/// Assemble the full router around an already constructed service
pub fn build_router<C, R>(app: AppInfo, service: Arc<DocumentService<C, R>>) -> Router
where
    C: EmbeddingClient + 'static,
    R: DocumentRepository + 'static,
{
    let router = create_router::<ApiDoc>(handlers::router(Arc::clone(&service)))
        .merge(health_router(app))
        .merge(ready_router(service))
        .layer(create_dev_cors_layer());

    with_request_tracing(router)
}

/// Run the search service
///
/// 1. Installs color-eyre and structured logging
/// 2. Builds the Qdrant and embedding clients
/// 3. Ensures the `documents` collection exists; a failure here is logged and
///    reported through `/ready` but does not stop startup
/// 4. Serves the API with a permissive CORS policy
///
/// # Errors
///
/// Returns an error if configuration is invalid, the Qdrant client cannot be
/// built, or the server fails to bind or run.
pub async fn run() -> Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Using Qdrant at {}", config.qdrant.url);
    let repository =
        QdrantRepository::new(config.qdrant.clone()).wrap_err("Failed to build Qdrant client")?;

    info!("Using embedding service at {}", config.embedding.url);
    let embedder = HttpEmbeddingClient::new(config.embedding.clone());

    let service = Arc::new(DocumentService::new(embedder, repository));
    service.bootstrap().await;

    let router = build_router(config.app, service);

    create_app(router, &config.server)
        .await
        .wrap_err("Search service terminated with an error")?;

    Ok(())
}
