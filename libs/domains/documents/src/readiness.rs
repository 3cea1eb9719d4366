use std::sync::Arc;
use tokio::sync::RwLock;

/// Outcome of the startup collection bootstrap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapState {
    Pending,
    Ready,
    Failed(String),
}

/// Shared, cloneable record of whether the collection bootstrap succeeded.
///
/// Written once at startup, read by `/ready`.
#[derive(Debug, Clone)]
pub struct Readiness {
    state: Arc<RwLock<BootstrapState>>,
}

impl Readiness {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(BootstrapState::Pending)),
        }
    }

    pub async fn mark_ready(&self) {
        *self.state.write().await = BootstrapState::Ready;
    }

    pub async fn mark_failed(&self, reason: impl Into<String>) {
        *self.state.write().await = BootstrapState::Failed(reason.into());
    }

    pub async fn state(&self) -> BootstrapState {
        self.state.read().await.clone()
    }

    /// `Ok` only once bootstrap has succeeded
    pub async fn check(&self) -> Result<(), String> {
        match self.state().await {
            BootstrapState::Ready => Ok(()),
            BootstrapState::Pending => Err("collection bootstrap has not completed".to_string()),
            BootstrapState::Failed(reason) => Err(reason),
        }
    }
}

impl Default for Readiness {
    fn default() -> Self {
        Self::new()
    }
}
