//! Type-safe error codes for API responses.
//!
//! Each code has a client-facing string identifier, an integer for logs and
//! monitoring, and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::UpstreamContract;
//! assert_eq!(code.as_str(), "UPSTREAM_CONTRACT");
//! assert_eq!(code.code(), 3002);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// JSON extraction from request body failed
    JsonExtraction,

    /// Requested resource was not found
    NotFound,

    /// An unexpected internal server error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    // Vector store errors (2000-2999)
    /// The vector database rejected or failed an operation
    VectorStoreError,

    // Upstream errors (3000-3999)
    /// An upstream service answered with an unexpected shape or status
    UpstreamContract,

    // Model errors (4000-4999)
    /// The embedding model failed to produce a vector
    EmbeddingFailed,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier for programmatic handling by clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::VectorStoreError => "VECTOR_STORE_ERROR",
            Self::UpstreamContract => "UPSTREAM_CONTRACT",
            Self::EmbeddingFailed => "EMBEDDING_FAILED",
        }
    }

    /// Integer code for structured logs and metrics.
    ///
    /// - 1000-1999: client errors
    /// - 2000-2999: vector store errors
    /// - 3000-3999: upstream service errors
    /// - 4000-4999: model errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::ServiceUnavailable => 1011,

            Self::VectorStoreError => 2001,

            Self::UpstreamContract => 3002,

            Self::EmbeddingFailed => 4001,
        }
    }

    /// Default user-facing message. Handlers may supply a more specific one.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::InternalError => "An internal server error occurred",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
            Self::VectorStoreError => "Vector database operation failed",
            Self::UpstreamContract => "Upstream service returned an unexpected response",
            Self::EmbeddingFailed => "Failed to compute embedding",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
