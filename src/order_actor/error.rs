use thiserror::Error;
use crate::actor_framework::FrameworkError;
use crate::water_type_actor::RegistryError;

/// Errors that can occur while placing or reading orders.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order validation error: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Order conflict: {0}")]
    Conflict(String),
    #[error("Order service unavailable: {0}")]
    Network(String),
}

impl From<FrameworkError> for OrderError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::Validation(msg) => OrderError::Validation(msg),
            e @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                OrderError::Network(e.to_string())
            }
        }
    }
}

impl From<RegistryError> for OrderError {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::NotFound(id) => OrderError::NotFound(format!("water type {}", id)),
            RegistryError::Validation(msg) => OrderError::Validation(msg),
            RegistryError::Network(msg) => OrderError::Network(msg),
        }
    }
}
