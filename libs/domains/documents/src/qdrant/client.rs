use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use qdrant_client::Qdrant;
use qdrant_client::qdrant::{
    self, CreateCollectionBuilder, Distance, PointId, PointStruct, ScoredPoint,
    SearchPointsBuilder, UpsertPointsBuilder, Value as QdrantValue, VectorParamsBuilder,
};
use tracing::{debug, info};

use super::QdrantConfig;
use crate::config::TEXT_PAYLOAD_KEY;
use crate::error::{DocumentError, DocumentResult};
use crate::models::{DocumentPoint, SearchHit};
use crate::repository::DocumentRepository;

/// Qdrant-backed implementation of DocumentRepository
pub struct QdrantRepository {
    client: Qdrant,
}

impl QdrantRepository {
    /// Builds the gRPC client. No request is sent until first use.
    pub fn new(config: QdrantConfig) -> DocumentResult<Self> {
        let mut builder = Qdrant::from_url(&config.url);

        if let Some(api_key) = config.api_key {
            builder = builder.api_key(api_key);
        }

        builder = builder.timeout(Duration::from_secs(config.timeout_secs));

        let client = builder
            .build()
            .map_err(|e| DocumentError::VectorStore(format!("Failed to build client: {}", e)))?;

        Ok(Self { client })
    }

    pub fn from_client(client: Qdrant) -> Self {
        Self { client }
    }
}

fn point_id_to_string(point_id: &PointId) -> DocumentResult<String> {
    match &point_id.point_id_options {
        Some(qdrant::point_id::PointIdOptions::Uuid(uuid)) => Ok(uuid.clone()),
        Some(qdrant::point_id::PointIdOptions::Num(num)) => Ok(num.to_string()),
        None => Err(DocumentError::VectorStore("Missing point ID".to_string())),
    }
}

/// Reads the stored text; absent or non-string values yield `None`
fn text_from_payload(payload: &HashMap<String, QdrantValue>) -> Option<String> {
    match payload.get(TEXT_PAYLOAD_KEY).and_then(|v| v.kind.as_ref()) {
        Some(qdrant::value::Kind::StringValue(text)) => Some(text.clone()),
        _ => None,
    }
}

fn scored_point_to_hit(point: ScoredPoint) -> DocumentResult<SearchHit> {
    let id = point
        .id
        .as_ref()
        .map(point_id_to_string)
        .transpose()?
        .ok_or_else(|| DocumentError::VectorStore("Missing point ID".to_string()))?;

    Ok(SearchHit {
        id,
        score: point.score,
        text: text_from_payload(&point.payload),
    })
}

#[async_trait]
impl DocumentRepository for QdrantRepository {
    async fn collection_exists(&self, collection: &str) -> DocumentResult<bool> {
        Ok(self.client.collection_exists(collection).await?)
    }

    async fn create_collection(&self, collection: &str, dimension: u64) -> DocumentResult<()> {
        self.client
            .create_collection(
                CreateCollectionBuilder::new(collection)
                    .vectors_config(VectorParamsBuilder::new(dimension, Distance::Cosine)),
            )
            .await?;

        info!(collection, dimension, "Created collection");
        Ok(())
    }

    async fn insert(&self, collection: &str, point: DocumentPoint) -> DocumentResult<()> {
        let mut payload = HashMap::new();
        payload.insert(TEXT_PAYLOAD_KEY.to_string(), QdrantValue::from(point.text));

        let point = PointStruct::new(PointId::from(point.id.to_string()), point.vector, payload);

        self.client
            .upsert_points(UpsertPointsBuilder::new(collection, vec![point]).wait(true))
            .await?;

        Ok(())
    }

    async fn search(
        &self,
        collection: &str,
        vector: Vec<f32>,
        limit: u64,
    ) -> DocumentResult<Vec<SearchHit>> {
        let builder = SearchPointsBuilder::new(collection, vector, limit).with_payload(true);

        let response = self.client.search_points(builder).await?;
        debug!(collection, hits = response.result.len(), "Search completed");

        response.result.into_iter().map(scored_point_to_hit).collect()
    }

    async fn health_check(&self) -> DocumentResult<()> {
        self.client.health_check().await?;
        Ok(())
    }
}
