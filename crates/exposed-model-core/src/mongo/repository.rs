// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Collection-backed repository.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{Collection, Database, bson::doc};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{info, instrument};

use crate::{BaseEntity, MongoRepository, RepositoryError, new_object_id};

/// [`MongoRepository`] storing `T` in one MongoDB collection.
///
/// Documents are keyed by `_id` holding the entity's string id. Entities
/// should serialize their id field as `_id`:
///
/// ```rust,ignore
/// #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
/// pub id: Option<String>,
/// ```
#[derive(Debug, Clone)]
pub struct MongoCollectionRepository<T: Send + Sync> {
    collection: Collection<T>
}

impl<T> MongoCollectionRepository<T>
where
    T: BaseEntity
{
    /// Repository over `T::COLLECTION` in `db`.
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, T::COLLECTION)
    }

    /// Repository over a custom collection name.
    pub fn with_collection(db: &Database, name: &str) -> Self {
        Self {
            collection: db.collection::<T>(name)
        }
    }

    /// Underlying collection for queries beyond CRUD.
    pub fn collection(&self) -> &Collection<T> {
        &self.collection
    }
}

#[async_trait]
impl<T> MongoRepository<T, String> for MongoCollectionRepository<T>
where
    T: BaseEntity + Serialize + DeserializeOwned + Unpin
{
    type Error = RepositoryError;

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<T>, Self::Error> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &String) -> Result<Option<T>, Self::Error> {
        Ok(self.collection.find_one(doc! { "_id": id.as_str() }).await?)
    }

    #[instrument(skip(self, entity))]
    async fn save(&self, mut entity: T) -> Result<T, Self::Error> {
        let id = match entity.id().map(str::to_owned) {
            Some(id) => id,
            None => {
                let id = new_object_id();
                entity.set_id(id.clone());
                id
            }
        };
        let result = self
            .collection
            .replace_one(doc! { "_id": id.as_str() }, &entity)
            .upsert(true)
            .await?;
        if result.upserted_id.is_some() {
            info!(%id, collection = %self.collection.name(), "document inserted");
        }
        Ok(entity)
    }

    #[instrument(skip(self, entity))]
    async fn delete(&self, entity: &T) -> Result<(), Self::Error> {
        if let Some(id) = entity.id() {
            self.collection.delete_one(doc! { "_id": id }).await?;
        }
        Ok(())
    }
}
