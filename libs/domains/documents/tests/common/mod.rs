#![allow(dead_code)]

use async_trait::async_trait;
use domain_documents::{
    DocumentError, DocumentPoint, DocumentRepository, DocumentResult, EmbeddingClient, SearchHit,
    VECTOR_DIMENSION,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// Deterministic bag-of-bytes embedding; equal text gives equal vectors.
pub struct StubEmbeddingClient;

pub fn stub_vector(text: &str) -> Vec<f32> {
    let mut vector = vec![0.0f32; VECTOR_DIMENSION];
    vector[0] = 1.0;
    for (i, byte) in text.bytes().enumerate() {
        vector[1 + (i * 31 + byte as usize) % (VECTOR_DIMENSION - 1)] += 1.0;
    }
    vector
}

#[async_trait]
impl EmbeddingClient for StubEmbeddingClient {
    async fn embed(&self, text: &str) -> DocumentResult<Vec<f32>> {
        Ok(stub_vector(text))
    }
}

struct StoredPoint {
    id: String,
    vector: Vec<f32>,
    text: Option<String>,
}

/// Brute-force cosine search over points kept in memory.
#[derive(Default)]
pub struct InMemoryRepository {
    collections: Mutex<HashMap<String, Vec<StoredPoint>>>,
}

impl InMemoryRepository {
    pub fn with_collection(name: &str) -> Self {
        let repo = Self::default();
        repo.collections
            .lock()
            .unwrap()
            .insert(name.to_string(), Vec::new());
        repo
    }

    /// Writes a point directly, bypassing the service (e.g. without a text payload)
    pub fn insert_raw(&self, collection: &str, id: &str, vector: Vec<f32>, text: Option<&str>) {
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(StoredPoint {
                id: id.to_string(),
                vector,
                text: text.map(str::to_string),
            });
    }
}

fn missing_collection(collection: &str) -> DocumentError {
    DocumentError::VectorStore(format!("collection `{collection}` not found"))
}

fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    dot / (norm_a * norm_b)
}

#[async_trait]
impl DocumentRepository for InMemoryRepository {
    async fn collection_exists(&self, collection: &str) -> DocumentResult<bool> {
        Ok(self.collections.lock().unwrap().contains_key(collection))
    }

    async fn create_collection(&self, collection: &str, _dimension: u64) -> DocumentResult<()> {
        let mut collections = self.collections.lock().unwrap();
        if collections.contains_key(collection) {
            return Err(DocumentError::VectorStore(format!(
                "collection `{collection}` already exists"
            )));
        }
        collections.insert(collection.to_string(), Vec::new());
        Ok(())
    }

    async fn insert(&self, collection: &str, point: DocumentPoint) -> DocumentResult<()> {
        let mut collections = self.collections.lock().unwrap();
        let points = collections
            .get_mut(collection)
            .ok_or_else(|| missing_collection(collection))?;
        points.push(StoredPoint {
            id: point.id.to_string(),
            vector: point.vector,
            text: Some(point.text),
        });
        Ok(())
    }

    async fn search(
        &self,
        collection: &str,
        vector: Vec<f32>,
        limit: u64,
    ) -> DocumentResult<Vec<SearchHit>> {
        let collections = self.collections.lock().unwrap();
        let points = collections
            .get(collection)
            .ok_or_else(|| missing_collection(collection))?;

        let mut hits: Vec<SearchHit> = points
            .iter()
            .map(|p| SearchHit {
                id: p.id.clone(),
                score: cosine(&vector, &p.vector),
                text: p.text.clone(),
            })
            .collect();
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(limit as usize);
        Ok(hits)
    }

    async fn health_check(&self) -> DocumentResult<()> {
        Ok(())
    }
}
