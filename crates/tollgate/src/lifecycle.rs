//! Store lifecycle: one shared store per process, and scoped teardown.
//!
//! There is no global instance. The binary builds a single [`StoreContext`]
//! at startup and passes it by reference to whatever needs the store. The
//! store itself is created lazily on the first [`StoreContext::store`] call;
//! concurrent first calls are serialized, so exactly one instance is built.
//!
//! [`DisposeGuard`] scopes a repository: when the guard goes out of scope the
//! repository is disposed, whether the scope ends normally, through an early
//! `?` return, or by unwinding.
//!
//! # Example
//!
//! ```
//! use tollgate::config::StoreConfig;
//! use tollgate::lifecycle::{DisposeGuard, StoreContext};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let context = StoreContext::new(StoreConfig::default());
//!     let shared = context.store().await?;
//!
//!     {
//!         let mut lock = shared.write().await;
//!         let store = DisposeGuard::new(&mut **lock);
//!         assert_eq!(store.len(), 4);
//!     }
//!
//!     assert!(shared.read().await.is_empty());
//!     Ok(())
//! }
//! ```

use crate::config::StoreConfig;
use crate::domain::{Entity, Vehicle};
use crate::error::{Error, Result};
use crate::storage::{Repository, SharedRepository};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use tokio::sync::{OnceCell, RwLock};
use tracing::debug;

/// Process-wide store context.
///
/// Owns the configuration and the lazily created shared store.
pub struct StoreContext {
    config: StoreConfig,
    store: OnceCell<SharedRepository<Vehicle>>,
}

impl std::fmt::Debug for StoreContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreContext")
            .field("config", &self.config)
            .field("initialized", &self.store.initialized())
            .finish()
    }
}

impl StoreContext {
    /// Create a context. The store is not built until first requested.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            store: OnceCell::new(),
        }
    }

    /// Get the shared store, creating and seeding it on first access.
    ///
    /// Every call returns a handle to the same instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured seed records are invalid. A failed
    /// initialization is not cached; the next call tries again.
    pub async fn store(&self) -> Result<SharedRepository<Vehicle>> {
        self.store
            .get_or_try_init(|| async {
                let repo = self.config.build_store()?;
                debug!(seeded = repo.len(), "Created shared store");
                let boxed: Box<dyn Repository<Vehicle>> = Box::new(repo);
                Ok::<_, Error>(Arc::new(RwLock::new(boxed)))
            })
            .await
            .cloned()
    }

    /// Whether the shared store has been created yet.
    pub fn is_initialized(&self) -> bool {
        self.store.initialized()
    }
}

/// Disposes the wrapped repository when dropped.
///
/// Dereferences to the repository, so the full [`Repository`] API is
/// available through the guard.
pub struct DisposeGuard<'a, T: Entity> {
    repo: &'a mut dyn Repository<T>,
}

impl<'a, T: Entity> DisposeGuard<'a, T> {
    /// Scope `repo` to the lifetime of the returned guard.
    pub fn new(repo: &'a mut dyn Repository<T>) -> Self {
        Self { repo }
    }
}

impl<'a, T: Entity> Deref for DisposeGuard<'a, T> {
    type Target = dyn Repository<T> + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.repo
    }
}

impl<T: Entity> DerefMut for DisposeGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.repo
    }
}

impl<T: Entity> Drop for DisposeGuard<'_, T> {
    fn drop(&mut self) {
        self.repo.dispose();
    }
}
