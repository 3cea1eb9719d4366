use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{info, instrument};

use crate::error::{EmbeddingError, EmbeddingResult};
use crate::model::TextEmbedder;
use crate::models::{EMBEDDING_DIMENSION, EmbedResponse};

const SELF_CHECK_TEXT: &str = "readiness check";

/// Embedding use case: run the model and check what comes back before it
/// leaves the service.
pub struct EmbeddingService<E: TextEmbedder> {
    model: Arc<E>,
    verified: OnceCell<()>,
}

impl<E: TextEmbedder> EmbeddingService<E> {
    pub fn new(model: E) -> Self {
        Self {
            model: Arc::new(model),
            verified: OnceCell::new(),
        }
    }

    #[instrument(skip(self, text), fields(chars = text.len()))]
    pub async fn embed(&self, text: &str) -> EmbeddingResult<EmbedResponse> {
        let embedding = self.model.embed(text).await?;

        let expected = self.model.dimension();
        if embedding.len() != expected {
            return Err(EmbeddingError::Dimension {
                expected,
                actual: embedding.len(),
            });
        }

        if let Some(index) = embedding.iter().position(|v| !v.is_finite()) {
            return Err(EmbeddingError::NonFinite { index });
        }

        Ok(EmbedResponse { embedding })
    }

    /// Runs one real embedding through the same output checks as `embed`.
    ///
    /// Success is cached, so only the first passing call pays for inference.
    /// Failures are not cached and the next call tries again.
    pub async fn self_check(&self) -> EmbeddingResult<()> {
        self.verified
            .get_or_try_init(|| async {
                let actual = self.model.dimension();
                if actual != EMBEDDING_DIMENSION {
                    return Err(EmbeddingError::Dimension {
                        expected: EMBEDDING_DIMENSION,
                        actual,
                    });
                }
                self.embed(SELF_CHECK_TEXT).await?;
                info!("Model self-check passed");
                Ok(())
            })
            .await?;
        Ok(())
    }
}
