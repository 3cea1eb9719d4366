use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use domain_documents::{EmbeddingClientConfig, QdrantConfig};

pub use core_config::Environment;

pub const DEFAULT_PORT: u16 = 8000;

/// Search service configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub qdrant: QdrantConfig,
    pub embedding: EmbeddingClientConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env_with_port(DEFAULT_PORT)?;
        let qdrant = QdrantConfig::from_env()?;
        let embedding = EmbeddingClientConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            qdrant,
            embedding,
        })
    }
}
