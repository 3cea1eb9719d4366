//! Embedding Domain
//!
//! Turns text into all-MiniLM-L6-v2 sentence embeddings (384 dimensions).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  POST /embed
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  output checks (dimension, finite values)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ TextEmbedder│  trait; FastEmbedModel runs ONNX on the blocking pool
//! └─────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use domain_embedding::{EmbeddingService, FastEmbedModel, ModelConfig, handlers};
//!
//! let model = FastEmbedModel::load(&ModelConfig::from_env()?)?;
//! let router = handlers::router(Arc::new(EmbeddingService::new(model)));
//! ```

pub mod error;
pub mod handlers;
pub mod model;
pub mod models;
pub mod service;

pub use error::{EmbeddingError, EmbeddingResult};
pub use handlers::ApiDoc;
pub use model::{FastEmbedModel, ModelConfig, TextEmbedder};
pub use models::{EMBEDDING_DIMENSION, EmbedRequest, EmbedResponse, MODEL_NAME};
pub use service::EmbeddingService;
