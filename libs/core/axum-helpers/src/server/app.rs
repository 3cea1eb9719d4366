use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use axum::Router;
use core_config::server::ServerConfig;
use std::io;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if the TCP listener fails to bind to the configured
/// address or the server fails while running.
///
/// # Example
/// ```ignore
/// let router = Router::new();
/// create_app(router, &ServerConfig::new("0.0.0.0".into(), 8000)).await?;
/// ```
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Wraps service routes with the cross-cutting pieces every service shares:
///
/// - OpenAPI document at `/api-docs/openapi.json` and Swagger UI at `/swagger-ui`
/// - Service routes mounted at the root (the public contract has no prefix)
/// - JSON 404 fallback
///
/// Routes passed in must already have their state applied. Liveness and
/// readiness routes are merged by the caller afterwards, and the finished
/// router goes through [`with_request_tracing`] last.
///
/// ```ignore
/// #[derive(OpenApi)]
/// #[openapi(paths(embed))]
/// struct ApiDoc;
///
/// let router = create_router::<ApiDoc>(handlers::router(service));
/// ```
pub fn create_router<T>(apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(apis)
        .fallback(not_found)
}

/// Traces every request at `INFO`.
///
/// Layers only wrap routes that exist when they are added, so apply this
/// after all routers have been merged.
pub fn with_request_tracing(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}
