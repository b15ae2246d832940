use buybye_config::ConfigError;
use buybye_core::CoreError;
use thiserror::Error;

/// Errors surfaced by [`crate::PurchaseEngine`].
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Engine state lock poisoned by a panicked writer")]
    StatePoisoned,
}

impl EngineError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, EngineError::Core(CoreError::InvalidInput(_)))
    }
}
