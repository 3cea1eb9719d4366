use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Embedding service unreachable: {0}")]
    EmbeddingUnavailable(String),

    #[error("Embedding service returned {status}: {body}")]
    EmbeddingRejected { status: u16, body: String },

    #[error("Embedding service response is malformed: {0}")]
    UpstreamContract(String),

    #[error("Embedding has {actual} dimensions, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Vector store error: {0}")]
    VectorStore(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type DocumentResult<T> = Result<T, DocumentError>;

impl From<qdrant_client::QdrantError> for DocumentError {
    fn from(err: qdrant_client::QdrantError) -> Self {
        DocumentError::VectorStore(err.to_string())
    }
}

impl From<core_config::ConfigError> for DocumentError {
    fn from(err: core_config::ConfigError) -> Self {
        DocumentError::Config(err.to_string())
    }
}

/// Convert DocumentError to AppError for standardized HTTP error responses
impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::EmbeddingUnavailable(msg) => {
                AppError::ServiceUnavailable(format!("Embedding service unreachable: {}", msg))
            }
            err @ (DocumentError::EmbeddingRejected { .. }
            | DocumentError::UpstreamContract(_)
            | DocumentError::DimensionMismatch { .. }) => {
                AppError::UpstreamContract(err.to_string())
            }
            DocumentError::VectorStore(msg) => AppError::VectorStore(msg),
            DocumentError::Validation(msg) => AppError::BadRequest(msg),
            DocumentError::Config(msg) => {
                AppError::InternalServerError(format!("Config error: {}", msg))
            }
        }
    }
}

impl IntoResponse for DocumentError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
