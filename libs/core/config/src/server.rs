use crate::{ConfigError, env_or_default, env_parse_or};
use std::net::Ipv4Addr;

/// Listen address for an HTTP service
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self { host, port }
    }

    /// Reads `HOST` and `PORT`, using `default_port` when `PORT` is unset.
    ///
    /// Each service has its own well-known port (the embedding service is
    /// addressed by the search service at `:8001` by default), so the fallback
    /// is supplied by the caller rather than fixed here.
    pub fn from_env_with_port(default_port: u16) -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_parse_or("PORT", default_port)?;

        Ok(Self { host, port })
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
