//! Documents Domain
//!
//! Stores text alongside its sentence embedding in Qdrant and finds stored
//! documents by semantic similarity.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Handlers   │  POST /add-document, POST /search
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐        ┌─────────────────┐
//! │   Service    │───────►│ EmbeddingClient │  HTTP, POST {EMBEDDING_URL}
//! └──────┬───────┘        └─────────────────┘
//!        │
//! ┌──────▼───────┐
//! │  Repository  │  trait; QdrantRepository over gRPC
//! └──────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use domain_documents::{DocumentService, HttpEmbeddingClient, QdrantConfig, QdrantRepository};
//!
//! let repository = QdrantRepository::new(QdrantConfig::from_env()?)?;
//! let service = DocumentService::new(HttpEmbeddingClient::from_env()?, repository);
//! service.bootstrap().await;
//! ```

pub mod config;
pub mod embedding;
pub mod error;
pub mod handlers;
pub mod models;
pub mod qdrant;
pub mod readiness;
pub mod repository;
pub mod service;

pub use config::{
    COLLECTION_NAME, DEFAULT_EMBEDDING_URL, DEFAULT_TOP_K, EmbeddingClientConfig,
    TEXT_PAYLOAD_KEY, VECTOR_DIMENSION,
};
pub use embedding::{EmbeddingClient, HttpEmbeddingClient};
pub use error::{DocumentError, DocumentResult};
pub use handlers::ApiDoc;
pub use models::{
    AddDocumentRequest, AddDocumentResponse, DocumentPoint, SearchHit, SearchRequest,
    SearchResponse,
};
pub use qdrant::{QdrantConfig, QdrantRepository};
pub use readiness::{BootstrapState, Readiness};
pub use repository::DocumentRepository;
pub use service::DocumentService;
