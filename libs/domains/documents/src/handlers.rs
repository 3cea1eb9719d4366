use axum::{Json, Router, extract::State, routing::post};
use axum_helpers::errors::responses::{
    BadGatewayResponse, BadRequestValidationResponse, ServiceUnavailableResponse,
};
use axum_helpers::{ErrorResponse, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::embedding::EmbeddingClient;
use crate::error::DocumentResult;
use crate::models::{
    AddDocumentRequest, AddDocumentResponse, SearchHit, SearchRequest, SearchResponse,
};
use crate::repository::DocumentRepository;
use crate::service::DocumentService;

/// OpenAPI documentation for the documents API
#[derive(OpenApi)]
#[openapi(
    paths(add_document, search),
    components(
        schemas(
            AddDocumentRequest, AddDocumentResponse,
            SearchRequest, SearchResponse, SearchHit,
            ErrorResponse
        ),
        responses(BadRequestValidationResponse, BadGatewayResponse, ServiceUnavailableResponse)
    ),
    tags(
        (name = "documents", description = "Index and semantically search text documents")
    )
)]
pub struct ApiDoc;

/// Router exposing `POST /add-document` and `POST /search`
pub fn router<C, R>(service: Arc<DocumentService<C, R>>) -> Router
where
    C: EmbeddingClient + 'static,
    R: DocumentRepository + 'static,
{
    Router::new()
        .route("/add-document", post(add_document::<C, R>))
        .route("/search", post(search::<C, R>))
        .with_state(service)
}

/// Embed a text and store it in the `documents` collection
#[utoipa::path(
    post,
    path = "/add-document",
    tag = "documents",
    request_body = AddDocumentRequest,
    responses(
        (status = 200, description = "Document stored", body = AddDocumentResponse),
        (status = 502, response = BadGatewayResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
pub async fn add_document<C: EmbeddingClient, R: DocumentRepository>(
    State(service): State<Arc<DocumentService<C, R>>>,
    ValidatedJson(request): ValidatedJson<AddDocumentRequest>,
) -> DocumentResult<Json<AddDocumentResponse>> {
    let response = service.add_document(request.text).await?;
    Ok(Json(response))
}

/// Return the stored documents closest in meaning to the query
#[utoipa::path(
    post,
    path = "/search",
    tag = "documents",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matches, best first", body = SearchResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 502, response = BadGatewayResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
pub async fn search<C: EmbeddingClient, R: DocumentRepository>(
    State(service): State<Arc<DocumentService<C, R>>>,
    ValidatedJson(request): ValidatedJson<SearchRequest>,
) -> DocumentResult<Json<SearchResponse>> {
    let response = service.search(&request.query, request.top_k).await?;
    Ok(Json(response))
}
