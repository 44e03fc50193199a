use thiserror::Error;
use crate::actor_framework::FrameworkError;

/// Errors that can occur during water-type registry operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    #[error("Water type not found: {0}")]
    NotFound(String),
    #[error("Water type validation error: {0}")]
    Validation(String),
    #[error("Registry unavailable: {0}")]
    Network(String),
}

impl From<FrameworkError> for RegistryError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::NotFound(id) => RegistryError::NotFound(id),
            FrameworkError::Validation(msg) => RegistryError::Validation(msg),
            e @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                RegistryError::Network(e.to_string())
            }
        }
    }
}
