use async_trait::async_trait;
use core_config::{ConfigError, FromEnv, env_optional, env_parse_or};
use fastembed::{EmbeddingModel, TextEmbedding, TextInitOptions};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

use super::provider::TextEmbedder;
use crate::error::{EmbeddingError, EmbeddingResult};
use crate::models::{EMBEDDING_DIMENSION, MODEL_NAME};

/// Where and how the model weights are fetched
#[derive(Debug, Clone, Default)]
pub struct ModelConfig {
    /// Directory for downloaded ONNX weights; fastembed's default when unset
    pub cache_dir: Option<PathBuf>,
    pub show_download_progress: bool,
}

impl FromEnv for ModelConfig {
    /// Reads `EMBEDDING_CACHE_DIR` and `EMBEDDING_SHOW_DOWNLOAD_PROGRESS`
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            cache_dir: env_optional("EMBEDDING_CACHE_DIR").map(PathBuf::from),
            show_download_progress: env_parse_or("EMBEDDING_SHOW_DOWNLOAD_PROGRESS", false)?,
        })
    }
}

/// all-MiniLM-L6-v2 running in-process through ONNX Runtime.
///
/// Inference is CPU-bound and needs `&mut TextEmbedding`, so calls are
/// serialized behind a mutex and run on the blocking pool.
#[derive(Clone)]
pub struct FastEmbedModel {
    model: Arc<Mutex<TextEmbedding>>,
}

impl FastEmbedModel {
    /// Loads the model, downloading weights on first use.
    ///
    /// This blocks for as long as the download and ONNX session setup take;
    /// call it before the server starts accepting requests.
    pub fn load(config: &ModelConfig) -> EmbeddingResult<Self> {
        let mut options = TextInitOptions::new(EmbeddingModel::AllMiniLML6V2)
            .with_show_download_progress(config.show_download_progress);
        if let Some(dir) = &config.cache_dir {
            options = options.with_cache_dir(dir.clone());
        }

        let model = TextEmbedding::try_new(options)
            .map_err(|e| EmbeddingError::Model(format!("failed to load {}: {}", MODEL_NAME, e)))?;

        info!(model = MODEL_NAME, dimension = EMBEDDING_DIMENSION, "Model loaded");

        Ok(Self {
            model: Arc::new(Mutex::new(model)),
        })
    }
}

#[async_trait]
impl TextEmbedder for FastEmbedModel {
    fn dimension(&self) -> usize {
        EMBEDDING_DIMENSION
    }

    async fn embed(&self, text: &str) -> EmbeddingResult<Vec<f32>> {
        let model = Arc::clone(&self.model);
        let text = text.to_owned();

        debug!(chars = text.len(), "Running inference");

        tokio::task::spawn_blocking(move || {
            let mut model = model
                .lock()
                .map_err(|_| EmbeddingError::Model("model lock poisoned".to_string()))?;

            let mut vectors = model
                .embed(vec![text], None)
                .map_err(|e| EmbeddingError::Model(e.to_string()))?;

            vectors
                .pop()
                .ok_or_else(|| EmbeddingError::Model("model returned no vectors".to_string()))
        })
        .await?
    }
}
