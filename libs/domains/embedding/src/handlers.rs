use axum::{Json, Router, extract::State, routing::post};
use axum_helpers::{ErrorResponse, ValidatedJson};
use axum_helpers::errors::responses::InternalServerErrorResponse;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::EmbeddingResult;
use crate::model::TextEmbedder;
use crate::models::{EmbedRequest, EmbedResponse};
use crate::service::EmbeddingService;

/// OpenAPI documentation for the embedding API
#[derive(OpenApi)]
#[openapi(
    paths(embed),
    components(
        schemas(EmbedRequest, EmbedResponse, ErrorResponse),
        responses(InternalServerErrorResponse)
    ),
    tags(
        (name = "embedding", description = "Sentence embeddings with all-MiniLM-L6-v2")
    )
)]
pub struct ApiDoc;

/// Router exposing `POST /embed`
pub fn router<E: TextEmbedder + 'static>(service: Arc<EmbeddingService<E>>) -> Router {
    Router::new()
        .route("/embed", post(embed::<E>))
        .with_state(service)
}

/// Embed a text into a 384-dimensional vector
#[utoipa::path(
    post,
    path = "/embed",
    tag = "embedding",
    request_body = EmbedRequest,
    responses(
        (status = 200, description = "Embedding vector", body = EmbedResponse),
        (status = 422, description = "Body is not `{\"text\": string}`"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn embed<E: TextEmbedder>(
    State(service): State<Arc<EmbeddingService<E>>>,
    ValidatedJson(request): ValidatedJson<EmbedRequest>,
) -> EmbeddingResult<Json<EmbedResponse>> {
    let response = service.embed(&request.text).await?;
    Ok(Json(response))
}
