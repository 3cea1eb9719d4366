//! Server infrastructure module.
//!
//! - Router assembly with OpenAPI documentation and a JSON 404 fallback
//! - Liveness and readiness helpers
//! - Graceful shutdown on Ctrl+C / SIGTERM
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router, with_request_tracing};
//! use core_config::app_info;
//!
//! let app = create_router::<ApiDoc>(api_routes).merge(health_router(app_info!()));
//! create_app(with_request_tracing(app), &server_config).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_router, with_request_tracing};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::shutdown_signal;
