//! Repository Layer - Core Traits
//!
//! The storage gateway contract shared by both collections.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type. Every call resolves exactly once; callers
/// sequence operations on the same collection by awaiting them in order.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Insert a new entity and return the identifier the database assigned.
    /// The incoming id is ignored.
    async fn add(&self, entity: &T) -> DomainResult<T::Id>;

    /// Find entity by ID
    async fn get(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities (insertion order)
    async fn get_all(&self) -> DomainResult<Vec<T>>;

    /// Upsert by primary key
    async fn update(&self, entity: &T) -> DomainResult<()>;

    /// Delete entity by ID. Missing ids are not an error.
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}
