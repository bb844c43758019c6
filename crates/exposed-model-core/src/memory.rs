// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Map-backed repository.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::{BaseEntity, MongoRepository, RepositoryError, new_object_id};

/// Repository keeping documents in memory, keyed by id.
///
/// Documents are returned in id order. ObjectIds start with a timestamp, so
/// this is roughly insertion order for generated ids.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    documents: RwLock<BTreeMap<String, T>>
}

impl<T> InMemoryRepository<T> {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(BTreeMap::new())
        }
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Whether the repository holds no documents.
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> MongoRepository<T, String> for InMemoryRepository<T>
where
    T: BaseEntity + Clone
{
    type Error = RepositoryError;

    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    async fn find_all(&self) -> Result<Vec<T>, Self::Error> {
        Ok(self.documents.read().await.values().cloned().collect())
    }

    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    async fn find_by_id(&self, id: &String) -> Result<Option<T>, Self::Error> {
        Ok(self.documents.read().await.get(id).cloned())
    }

    #[instrument(skip(self, entity), fields(collection = T::COLLECTION))]
    async fn save(&self, mut entity: T) -> Result<T, Self::Error> {
        let id = match entity.id().map(str::to_owned) {
            Some(id) => id,
            None => {
                let id = new_object_id();
                entity.set_id(id.clone());
                id
            }
        };
        self.documents.write().await.insert(id, entity.clone());
        Ok(entity)
    }

    #[instrument(skip(self, entity), fields(collection = T::COLLECTION))]
    async fn delete(&self, entity: &T) -> Result<(), Self::Error> {
        if let Some(id) = entity.id() {
            self.documents.write().await.remove(id);
        }
        Ok(())
    }
}
