use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use domain_embedding::ModelConfig;

pub use core_config::Environment;

pub const DEFAULT_PORT: u16 = 8001;

/// Embedding service configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub model: ModelConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env_with_port(DEFAULT_PORT)?;
        let model = ModelConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let vars = [
            "HOST",
            "PORT",
            "APP_ENV",
            "EMBEDDING_CACHE_DIR",
            "EMBEDDING_SHOW_DOWNLOAD_PROGRESS",
        ];
        temp_env::with_vars_unset(vars, || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.server.address(), "0.0.0.0:8001");
            assert_eq!(config.environment, Environment::Development);
            assert_eq!(config.app.name, "semantic_embedding");
            assert!(config.model.cache_dir.is_none());
        });
    }

    #[test]
    fn test_invalid_port_fails() {
        temp_env::with_var("PORT", Some("eighty"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
