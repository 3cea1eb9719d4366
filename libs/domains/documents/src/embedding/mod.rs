mod http_client;

pub use http_client::{HttpEmbeddingClient, parse_embedding_response};

use async_trait::async_trait;

use crate::error::DocumentResult;

/// Client for the remote embedding service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmbeddingClient: Send + Sync {
    /// Embed a single text
    async fn embed(&self, text: &str) -> DocumentResult<Vec<f32>>;
}
