mod minilm;
mod provider;

pub use minilm::{FastEmbedModel, ModelConfig};
pub use provider::TextEmbedder;

#[cfg(test)]
pub use provider::MockTextEmbedder;
