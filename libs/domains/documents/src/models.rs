use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::config::DEFAULT_TOP_K;

/// A document ready to be written to the vector store
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentPoint {
    pub id: Uuid,
    pub vector: Vec<f32>,
    pub text: String,
}

/// One nearest-neighbour match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchHit {
    /// Point id as stored (UUID string, or a decimal for numeric ids)
    pub id: String,
    /// Cosine similarity; higher is closer
    pub score: f32,
    /// Stored text; `null` when the payload has no string `text`
    pub text: Option<String>,
}

// ===== Request/Response DTOs =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct AddDocumentRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AddDocumentResponse {
    /// Always `"success"`
    #[schema(example = "success")]
    pub status: String,
    pub id: String,
    pub text: String,
}

impl AddDocumentResponse {
    pub fn success(id: Uuid, text: String) -> Self {
        Self {
            status: "success".to_string(),
            id: id.to_string(),
            text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_top_k")]
    #[validate(range(min = 1, message = "top_k must be at least 1"))]
    #[schema(default = 5, minimum = 1)]
    pub top_k: i64,
}

fn default_top_k() -> i64 {
    DEFAULT_TOP_K
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
}
