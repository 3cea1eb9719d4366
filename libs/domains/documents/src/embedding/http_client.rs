use async_trait::async_trait;
use core_config::FromEnv;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::EmbeddingClient;
use crate::config::EmbeddingClientConfig;
use crate::error::{DocumentError, DocumentResult};

/// Calls `POST {EMBEDDING_URL}` with `{"text": ...}`
#[derive(Debug, Clone)]
pub struct HttpEmbeddingClient {
    client: Client,
    config: EmbeddingClientConfig,
}

impl HttpEmbeddingClient {
    pub fn new(config: EmbeddingClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn from_env() -> DocumentResult<Self> {
        Ok(Self::new(EmbeddingClientConfig::from_env()?))
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }
}

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    text: &'a str,
}

#[async_trait]
impl EmbeddingClient for HttpEmbeddingClient {
    async fn embed(&self, text: &str) -> DocumentResult<Vec<f32>> {
        let response = self
            .client
            .post(&self.config.url)
            .json(&EmbedRequest { text })
            .send()
            .await
            .map_err(|e| DocumentError::EmbeddingUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                debug!(error = %e, "Failed to read embedding service error body");
                String::new()
            });
            return Err(DocumentError::EmbeddingRejected {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DocumentError::EmbeddingUnavailable(e.to_string()))?;

        let embedding = parse_embedding_response(&bytes)?;
        debug!(dimension = embedding.len(), "Received embedding");

        Ok(embedding)
    }
}

/// Extracts `embedding` from an embedding service response body.
///
/// The body must be a JSON object whose `embedding` key holds an array of
/// numbers that fit in an `f32`. Anything else is an
/// [`DocumentError::UpstreamContract`] error.
pub fn parse_embedding_response(body: &[u8]) -> DocumentResult<Vec<f32>> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        DocumentError::UpstreamContract(format!("response is not valid JSON: {}", e))
    })?;

    let embedding = value.get("embedding").ok_or_else(|| {
        DocumentError::UpstreamContract("response is missing the `embedding` field".to_string())
    })?;

    let items = embedding.as_array().ok_or_else(|| {
        DocumentError::UpstreamContract("`embedding` is not an array".to_string())
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let value = item.as_f64().ok_or_else(|| {
                DocumentError::UpstreamContract(format!("`embedding[{}]` is not a number", index))
            })? as f32;
            if !value.is_finite() {
                return Err(DocumentError::UpstreamContract(format!(
                    "`embedding[{}]` is out of range for f32",
                    index
                )));
            }
            Ok(value)
        })
        .collect()
}
