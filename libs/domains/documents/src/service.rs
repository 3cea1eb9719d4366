use std::sync::Arc;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::config::{COLLECTION_NAME, VECTOR_DIMENSION};
use crate::embedding::EmbeddingClient;
use crate::error::{DocumentError, DocumentResult};
use crate::models::{AddDocumentResponse, DocumentPoint, SearchResponse};
use crate::readiness::Readiness;
use crate::repository::DocumentRepository;

/// Document use cases: index text and search it by meaning.
///
/// The collection name and dimension are fixed; the embedding client and
/// repository are injected so either side can be swapped in tests.
pub struct DocumentService<C: EmbeddingClient, R: DocumentRepository> {
    embedder: Arc<C>,
    repository: Arc<R>,
    readiness: Readiness,
    collection: String,
}

impl<C: EmbeddingClient, R: DocumentRepository> DocumentService<C, R> {
    pub fn new(embedder: C, repository: R) -> Self {
        Self {
            embedder: Arc::new(embedder),
            repository: Arc::new(repository),
            readiness: Readiness::new(),
            collection: COLLECTION_NAME.to_string(),
        }
    }

    pub fn readiness(&self) -> &Readiness {
        &self.readiness
    }

    /// Creates the collection if it is missing. Returns `true` when it was created.
    ///
    /// Check-then-create is not atomic: two instances starting together may
    /// both try to create, and the loser gets a vector store error.
    pub async fn ensure_collection(&self) -> DocumentResult<bool> {
        if self.repository.collection_exists(&self.collection).await? {
            return Ok(false);
        }

        self.repository
            .create_collection(&self.collection, VECTOR_DIMENSION as u64)
            .await?;
        Ok(true)
    }

    /// Best-effort startup bootstrap.
    ///
    /// Never fails: errors are logged and recorded in [`Readiness`] so the
    /// process keeps serving and `/ready` reports the problem.
    pub async fn bootstrap(&self) {
        match self.ensure_collection().await {
            Ok(created) => {
                info!(collection = %self.collection, created, "Collection bootstrap complete");
                self.readiness.mark_ready().await;
            }
            Err(e) => {
                error!(collection = %self.collection, "Collection bootstrap failed: {}", e);
                self.readiness.mark_failed(e.to_string()).await;
            }
        }
    }

    #[instrument(skip(self, text), fields(chars = text.len()))]
    pub async fn add_document(&self, text: String) -> DocumentResult<AddDocumentResponse> {
        let vector = self.embed(&text).await?;
        let id = Uuid::new_v4();

        self.repository
            .insert(
                &self.collection,
                DocumentPoint {
                    id,
                    vector,
                    text: text.clone(),
                },
            )
            .await?;

        info!(%id, "Document added");
        Ok(AddDocumentResponse::success(id, text))
    }

    #[instrument(skip(self, query), fields(chars = query.len()))]
    pub async fn search(&self, query: &str, top_k: i64) -> DocumentResult<SearchResponse> {
        let limit = u64::try_from(top_k)
            .ok()
            .filter(|k| *k > 0)
            .ok_or_else(|| DocumentError::Validation("top_k must be at least 1".to_string()))?;

        let vector = self.embed(query).await?;
        let results = self
            .repository
            .search(&self.collection, vector, limit)
            .await?;

        Ok(SearchResponse { results })
    }

    /// Vector database reachability, as a readiness check
    pub async fn check_vector_store(&self) -> Result<(), String> {
        self.repository.health_check().await.map_err(|e| e.to_string())
    }

    async fn embed(&self, text: &str) -> DocumentResult<Vec<f32>> {
        let vector = self.embedder.embed(text).await?;

        if vector.len() != VECTOR_DIMENSION {
            return Err(DocumentError::DimensionMismatch {
                expected: VECTOR_DIMENSION,
                actual: vector.len(),
            });
        }

        Ok(vector)
    }
}
