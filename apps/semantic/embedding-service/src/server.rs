//! HTTP server initialization and lifecycle management
//!
//! This module handles all server setup:
//! - color-eyre and tracing initialization
//! - Model loading (fatal on failure)
//! - Router assembly (API, OpenAPI, health, readiness)
//! - Server startup with graceful shutdown

use std::sync::Arc;

use axum::Router;
use axum_helpers::server::{create_app, create_router, health_router, with_request_tracing};
use core_config::AppInfo;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_embedding::{
    ApiDoc, EmbeddingService, FastEmbedModel, MODEL_NAME, TextEmbedder, handlers,
};
use eyre::{Result, WrapErr};
use tracing::info;

use crate::api::health::ready_router;
use crate::config::Config;

/// Assemble the full router around an already constructed service
pub fn build_router<E: TextEmbedder + 'static>(
    app: AppInfo,
    service: EmbeddingService<E>,
) -> Router {
    let service = Arc::new(service);

    let router = create_router::<ApiDoc>(handlers::router(Arc::clone(&service)))
        .merge(health_router(app))
        .merge(ready_router(service));

    with_request_tracing(router)
}

/// Run the embedding service
///
/// 1. Installs color-eyre and structured logging
/// 2. Loads all-MiniLM-L6-v2 (downloading it on first start)
/// 3. Serves `/embed`, `/health`, `/ready` and the OpenAPI docs
///
/// # Errors
///
/// Returns an error if configuration is invalid, the model cannot be
/// loaded, or the server fails to bind or run.
pub async fn run() -> Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(model = MODEL_NAME, "Loading embedding model...");
    let model_config = config.model.clone();
    let model = tokio::task::spawn_blocking(move || FastEmbedModel::load(&model_config))
        .await
        .wrap_err("Model loading task panicked")?
        .wrap_err("Failed to load embedding model")?;

    let router = build_router(config.app, EmbeddingService::new(model));

    create_app(router, &config.server)
        .await
        .wrap_err("Embedding service terminated with an error")?;

    Ok(())
}
