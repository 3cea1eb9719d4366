use core_config::{ConfigError, FromEnv, env_or_default};

/// Qdrant collection holding every document
pub const COLLECTION_NAME: &str = "documents";

/// Vector width produced by the embedding service (all-MiniLM-L6-v2)
pub const VECTOR_DIMENSION: usize = 384;

/// Payload key under which the original text is stored
pub const TEXT_PAYLOAD_KEY: &str = "text";

/// Results returned by `/search` when the request omits `top_k`
pub const DEFAULT_TOP_K: i64 = 5;

pub const DEFAULT_EMBEDDING_URL: &str = "http://localhost:8001/embed";

/// Where the embedding service lives
#[derive(Debug, Clone)]
pub struct EmbeddingClientConfig {
    /// Full URL of the `POST /embed` endpoint
    pub url: String,
}

impl EmbeddingClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl FromEnv for EmbeddingClientConfig {
    /// Reads `EMBEDDING_URL`
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_or_default("EMBEDDING_URL", DEFAULT_EMBEDDING_URL),
        })
    }
}

impl Default for EmbeddingClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EMBEDDING_URL)
    }
}
