//! In-memory storage backend using an ordered `Vec`.
//!
//! This module provides an **ephemeral** store where all records are held in
//! RAM and lost when the process exits. Nothing is ever written to disk.
//!
//! # Architecture
//!
//! - `Vec<T>` keeps records in insertion order; `iter()` walks it directly
//! - Identity lookups are a linear scan, which is fine for toll-booth sized
//!   collections and keeps `update` position-preserving
//! - Search fans the filter out over rayon once the collection reaches
//!   `parallel_threshold`, then sorts by label (see `search.rs`)
//!
//! # Concurrency
//!
//! Writers take `&mut self`. Mutating the store while a search is running is
//! outside the contract: the borrow checker rejects it for `search`, and
//! `search_async` works on a snapshot taken when it is called.
//!
//! # Performance Characteristics
//!
//! - Add: O(n) (duplicate check)
//! - Find / Update / Delete: O(n)
//! - Search: O(n / threads) filter + O(k log k) sort of the k hits

mod search;
mod trait_impl;

use crate::domain::{Entity, Vehicle, seed_vehicles};
use crate::error::{Error, Result};

/// Collections smaller than this are filtered on the calling thread.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

/// Ordered in-memory store implementing [`Repository`](crate::storage::Repository).
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    /// Records in insertion order. Identities are unique and every record
    /// validates.
    entities: Vec<T>,

    /// Minimum collection size for a parallel search filter
    parallel_threshold: usize,
}

impl<T: Entity> InMemoryRepository<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Create a store holding `entities`, in the given order.
    ///
    /// Each record goes through the same checks as `add`.
    ///
    /// # Errors
    ///
    /// - `Error::DuplicateId` if two records share an identity
    /// - `Error::Validation` if a record fails validation
    pub fn with_entities(entities: impl IntoIterator<Item = T>) -> Result<Self> {
        let mut store = Self::new();
        for entity in entities {
            store.insert_checked(entity)?;
        }
        Ok(store)
    }

    /// Set the collection size at which search switches to a parallel filter.
    ///
    /// `0` always fans out; `usize::MAX` never does. Results are identical
    /// either way.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// The current parallel search threshold.
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// The record at `index` in insertion order, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entities.get(index)
    }

    /// Index of the record with the given identity.
    pub(super) fn position(&self, id: T::Id) -> Option<usize> {
        self.entities.iter().position(|e| e.id() == id)
    }

    /// Uniqueness then validation, then append. Shared by `add` and seeding.
    pub(super) fn insert_checked(&mut self, entity: T) -> Result<()> {
        let id = entity.id();

        if self.position(id).is_some() {
            tracing::warn!(%id, "Rejected duplicate identity");
            return Err(Error::DuplicateId(id.to_string()));
        }

        if let Err(reason) = entity.validate() {
            tracing::warn!(%id, %reason, "Rejected invalid entity");
            return Err(Error::Validation {
                id: id.to_string(),
                reason,
            });
        }

        self.entities.push(entity);
        Ok(())
    }
}

impl InMemoryRepository<Vehicle> {
    /// Create a store pre-populated with the fixed seed records (ids 1-4).
    pub fn seeded() -> Self {
        Self {
            entities: seed_vehicles(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a InMemoryRepository<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
