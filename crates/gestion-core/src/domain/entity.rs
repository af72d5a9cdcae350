//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all stored records.
//! All entities must have a unique ID and be thread-safe.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Display + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;

    /// Stamps the identifier assigned by the storage layer
    fn set_id(&mut self, id: Self::Id);
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum DomainError {
    /// The database could not be opened. Fatal for the session.
    #[error("Initialization failed: {0}")]
    Initialization(String),
    /// The storage handle was used before initialization completed.
    #[error("Database not initialized")]
    NotInitialized,
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Render error: {0}")]
    Render(String),
    #[error("Export error: {0}")]
    Export(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// True for errors raised by the storage gateway
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            DomainError::Storage(_) | DomainError::NotInitialized | DomainError::Initialization(_)
        )
    }
}
