use async_trait::async_trait;

use crate::error::EmbeddingResult;

/// A loaded sentence-embedding model.
///
/// Implementations are constructed once at process start and shared across
/// requests; `embed` must be safe to call concurrently.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextEmbedder: Send + Sync {
    /// Width of the vectors this model produces
    fn dimension(&self) -> usize;

    /// Embed a single text
    async fn embed(&self, text: &str) -> EmbeddingResult<Vec<f32>>;
}
