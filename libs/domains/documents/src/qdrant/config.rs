use core_config::{ConfigError, FromEnv, env_optional, env_or_default, env_parse_or};

pub const DEFAULT_QDRANT_URL: &str = "http://localhost:6334";

/// Qdrant connection configuration
#[derive(Debug, Clone)]
pub struct QdrantConfig {
    /// gRPC endpoint
    pub url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl QdrantConfig {
    pub fn new(url: String) -> Self {
        Self {
            url,
            api_key: None,
            timeout_secs: 30,
        }
    }

    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.api_key = Some(api_key);
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl FromEnv for QdrantConfig {
    /// Reads `QDRANT_URL`, `QDRANT_API_KEY` and `QDRANT_TIMEOUT_SECS`
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_or_default("QDRANT_URL", DEFAULT_QDRANT_URL),
            api_key: env_optional("QDRANT_API_KEY"),
            timeout_secs: env_parse_or("QDRANT_TIMEOUT_SECS", 30)?,
        })
    }
}

impl Default for QdrantConfig {
    fn default() -> Self {
        Self::new(DEFAULT_QDRANT_URL.to_string())
    }
}
