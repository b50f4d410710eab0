//! Repository trait implementation for in-memory storage.

use super::InMemoryRepository;
use super::search::filter_sorted;
use crate::domain::Entity;
use crate::error::{Error, Result};
use crate::storage::Repository;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn add(&mut self, entity: T) -> Result<()> {
        let id = entity.id();
        self.insert_checked(entity)?;
        debug!(%id, total = self.entities.len(), "Added entity");
        Ok(())
    }

    fn find_by_id(&self, id: T::Id) -> Option<&T> {
        self.entities.iter().find(|e| e.id() == id)
    }

    fn update(&mut self, entity: T) -> Result<()> {
        let id = entity.id();
        let index = self
            .position(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        entity.validate().map_err(|reason| Error::Validation {
            id: id.to_string(),
            reason,
        })?;

        self.entities[index] = entity;
        debug!(%id, index, "Updated entity");
        Ok(())
    }

    fn delete_by_id(&mut self, id: T::Id) -> bool {
        match self.position(id) {
            Some(index) => {
                self.entities.remove(index);
                debug!(%id, "Deleted entity");
                true
            }
            None => false,
        }
    }

    fn search(&self, query: &str) -> Vec<T> {
        let hits = filter_sorted(&self.entities, query, self.parallel_threshold);
        debug!(query, hits = hits.len(), "Search completed");
        hits
    }

    async fn search_async(&self, query: &str) -> Result<Vec<T>> {
        // Snapshot so the offloaded task owns its input
        let snapshot = self.entities.clone();
        let owned_query = query.to_string();
        let threshold = self.parallel_threshold;

        let hits = tokio::task::spawn_blocking(move || {
            filter_sorted(&snapshot, &owned_query, threshold)
        })
        .await
        .map_err(|e| Error::SearchTask(e.to_string()))?;

        debug!(query, hits = hits.len(), "Async search completed");
        Ok(hits)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.entities.iter())
    }

    fn len(&self) -> usize {
        self.entities.len()
    }

    fn dispose(&mut self) {
        let cleared = self.entities.len();
        self.entities.clear();
        debug!(cleared, "Disposed store");
    }
}
