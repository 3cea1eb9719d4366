use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("Model error: {0}")]
    Model(String),

    #[error("Model produced {actual} dimensions, expected {expected}")]
    Dimension { expected: usize, actual: usize },

    #[error("Model produced a non-finite value at index {index}")]
    NonFinite { index: usize },
}

pub type EmbeddingResult<T> = Result<T, EmbeddingError>;

impl From<tokio::task::JoinError> for EmbeddingError {
    fn from(err: tokio::task::JoinError) -> Self {
        EmbeddingError::Model(format!("inference task failed: {}", err))
    }
}

impl From<EmbeddingError> for AppError {
    fn from(err: EmbeddingError) -> Self {
        AppError::EmbeddingFailed(err.to_string())
    }
}

impl IntoResponse for EmbeddingError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
