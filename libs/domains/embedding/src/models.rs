use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Output width of all-MiniLM-L6-v2
pub const EMBEDDING_DIMENSION: usize = 384;

/// Name reported in logs and the model-loaded message
pub const MODEL_NAME: &str = "sentence-transformers/all-MiniLM-L6-v2";

/// Request body for `POST /embed`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct EmbedRequest {
    /// Text to embed. The empty string is accepted.
    pub text: String,
}

/// Response body for `POST /embed`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmbedResponse {
    /// 384 floats, in model output order
    pub embedding: Vec<f32>,
}
