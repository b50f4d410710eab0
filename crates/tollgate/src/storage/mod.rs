//! Storage abstraction layer for tollgate.
//!
//! This module provides the generic [`Repository`] contract and the shared
//! handle type used to pass one store around a process.
//!
//! # Architecture
//!
//! The contract is generic over any [`Entity`]. Mutating methods take
//! `&mut self`, so a single writer at a time is enforced by the borrow checker
//! (or by the write half of the [`SharedRepository`] lock). A search can
//! therefore never observe a concurrent mutation of the same store.
//!
//! Only [`Repository::search_async`] is async: it offloads the filter to a
//! blocking worker and resumes the caller when the full result is ready. The
//! trait stays object-safe so backends can be used as
//! `Box<dyn Repository<T>>`.
//!
//! # Example
//!
//! ```
//! use tollgate::domain::{Vehicle, VehicleId, VehicleType};
//! use tollgate::storage::Repository;
//! use tollgate::storage::in_memory::InMemoryRepository;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let mut store = InMemoryRepository::<Vehicle>::seeded();
//!
//!     store.add(Vehicle::new(5, "Dhaka-Metro-1234", VehicleType::Car, 50.0))?;
//!     assert!(store.find_by_id(VehicleId(5)).is_some());
//!
//!     let hits = store.search_async("Dhaka").await?;
//!     assert_eq!(hits.len(), 1);
//!     Ok(())
//! }
//! ```

use crate::domain::Entity;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

// Storage backend implementations
pub mod in_memory;

/// Core storage contract for entity records.
///
/// # Method Categories
///
/// - **CRUD**: `add`, `find_by_id`, `update`, `delete`, `delete_by_id`
/// - **Queries**: `search`, `search_async`, `iter`, `len`
/// - **Lifecycle**: `dispose`
///
/// # Error Handling
///
/// - `Error::DuplicateId`: `add` with an identity already stored
/// - `Error::Validation`: entity rejected by [`Entity::validate`]
/// - `Error::NotFound`: `update` of an identity that is not stored
///
/// A failed write never leaves the store partially modified. A missing record
/// on lookup is `None`, not an error.
///
/// # Disposal
///
/// After [`dispose`](Repository::dispose) the store is empty. It stays safe
/// to call, but callers must not depend on any behaviour past that point.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    // ========== CRUD Operations ==========

    /// Append a new entity.
    ///
    /// # Errors
    ///
    /// - `Error::DuplicateId` if an entity with the same identity exists
    /// - `Error::Validation` if the entity fails validation
    fn add(&mut self, entity: T) -> Result<()>;

    /// Get the entity with the given identity, or `None` if it doesn't exist.
    fn find_by_id(&self, id: T::Id) -> Option<&T>;

    /// Replace the stored entity that has the same identity as `entity`.
    ///
    /// The replacement keeps the original's position.
    ///
    /// # Errors
    ///
    /// - `Error::NotFound` if no entity has that identity
    /// - `Error::Validation` if the replacement fails validation
    fn update(&mut self, entity: T) -> Result<()>;

    /// Remove the stored entity with the same identity as `entity`.
    ///
    /// Matching is by identity only; the other fields of `entity` may be
    /// stale. Returns `true` iff a record was removed.
    fn delete(&mut self, entity: &T) -> bool {
        self.delete_by_id(entity.id())
    }

    /// Remove the entity with the given identity. Returns `true` iff a record
    /// was removed.
    fn delete_by_id(&mut self, id: T::Id) -> bool;

    // ========== Queries ==========

    /// Find every entity matching `query`, ordered ascending by label.
    ///
    /// Ties on the label are broken by identity so the order is deterministic
    /// no matter how the filter was parallelized.
    fn search(&self, query: &str) -> Vec<T>;

    /// Same as [`search`](Repository::search), without blocking the calling
    /// task.
    ///
    /// The result reflects the store at the moment of the call.
    ///
    /// # Errors
    ///
    /// Returns `Error::SearchTask` if the offloaded task panicked or the
    /// runtime shut down before it finished.
    async fn search_async(&self, query: &str) -> Result<Vec<T>>;

    /// Iterate over the stored entities in insertion order.
    ///
    /// Each call starts a fresh pass over the current contents.
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_>;

    /// Number of stored entities.
    fn len(&self) -> usize;

    /// Returns `true` if the store holds no entities.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ========== Lifecycle ==========

    /// Clear every stored entity.
    fn dispose(&mut self);
}

/// A store shared by every consumer in a process.
///
/// Readers (`search`, `find_by_id`) take the read lock; writers take the
/// write lock, so at most one mutation is in flight at any time.
pub type SharedRepository<T> = Arc<RwLock<Box<dyn Repository<T>>>>;
