use async_trait::async_trait;

use crate::error::DocumentResult;
use crate::models::{DocumentPoint, SearchHit};

/// Repository trait for document vector storage
///
/// This trait abstracts the underlying vector database (Qdrant).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    // ===== Collection Management =====

    /// Whether a collection with this name exists
    async fn collection_exists(&self, collection: &str) -> DocumentResult<bool>;

    /// Create a cosine-distance collection of the given dimension
    async fn create_collection(&self, collection: &str, dimension: u64) -> DocumentResult<()>;

    // ===== Points =====

    /// Insert a point and wait until the write is applied
    async fn insert(&self, collection: &str, point: DocumentPoint) -> DocumentResult<()>;

    /// Nearest neighbours of `vector`, best first, at most `limit` results
    async fn search(
        &self,
        collection: &str,
        vector: Vec<f32>,
        limit: u64,
    ) -> DocumentResult<Vec<SearchHit>>;

    // ===== Health =====

    /// Whether the database answers at all
    async fn health_check(&self) -> DocumentResult<()>;
}
