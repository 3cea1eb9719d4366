//! Embedding Service
//!
//! HTTP service that turns text into 384-dimensional all-MiniLM-L6-v2
//! sentence embeddings.
//!
//! ## Architecture
//!
//! ```text
//! Search Service
//!   ↓ (POST /embed, JSON)
//! domain_embedding handlers
//!   ↓
//! EmbeddingService (output checks)
//!   ↓
//! FastEmbedModel (ONNX Runtime, blocking pool)
//! ```
//!
//! ## Modules
//!
//! - `config`: Environment configuration
//! - `server`: Model loading, router assembly and server lifecycle
//! - `api`: Service-specific readiness endpoint

pub mod api;
pub mod config;
pub mod server;

pub use server::{build_router, run};
