//! Configuration management for tollgate.
//!
//! The store is configured from an optional YAML file:
//!
//! ```yaml
//! seed: true
//! parallel-threshold: 1024
//! vehicles:
//!   - id: 10
//!     license_plate: Bogura-5555
//!     vehicle_type: Bus
//!     toll_paid: 80.0
//! ```
//!
//! Every key is optional. `vehicles`, when present, replaces the built-in seed
//! records.

use crate::domain::{Vehicle, seed_vehicles};
use crate::error::{Error, Result};
use crate::storage::in_memory::{DEFAULT_PARALLEL_THRESHOLD, InMemoryRepository};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct StoreConfig {
    /// Whether a new store starts with seed records
    pub seed: bool,

    /// Collection size at which search switches to a parallel filter
    pub parallel_threshold: usize,

    /// Seed records overriding the built-in set
    pub vehicles: Option<Vec<Vehicle>>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            vehicles: None,
        }
    }
}

impl StoreConfig {
    /// Parse configuration from a YAML string
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the YAML is malformed or a field has the
    /// wrong type.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load configuration from a file
    ///
    /// # Errors
    ///
    /// - `Error::Io` if the file cannot be read
    /// - `Error::Config` if its contents do not parse
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), "Loaded store configuration");
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load) when a path is given; never fails
    /// otherwise.
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path).await,
            None => Ok(Self::default()),
        }
    }

    /// The records a new store starts with.
    pub fn seed_records(&self) -> Vec<Vehicle> {
        if !self.seed {
            return Vec::new();
        }
        self.vehicles.clone().unwrap_or_else(seed_vehicles)
    }

    /// Build a fresh store from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateId` or `Error::Validation` if the configured
    /// seed records break the store's invariants.
    pub fn build_store(&self) -> Result<InMemoryRepository<Vehicle>> {
        InMemoryRepository::with_entities(self.seed_records())
            .map(|store| store.with_parallel_threshold(self.parallel_threshold))
    }
}
