//! Search Service
//!
//! Stores documents with their embeddings in Qdrant and answers semantic
//! search queries.
//!
//! ## Architecture
//!
//! ```text
//! Browser (any origin, credentials allowed)
//!   ↓ (POST /add-document, POST /search)
//! domain_documents handlers
//!   ↓
//! DocumentService
//!   ↓                         ↓
//! HttpEmbeddingClient     QdrantRepository
//!   ↓ (HTTP)                  ↓ (gRPC)
//! Embedding Service        Qdrant, collection `documents`
//! ```
//!
//! ## Modules
//!
//! - `config`: Environment configuration
//! - `server`: Client construction, collection bootstrap and server lifecycle
//! - `api`: Readiness endpoint (bootstrap state + Qdrant reachability)

pub mod api;
pub mod config;
pub mod server;

pub use server::{build_router, run};
