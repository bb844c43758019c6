// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Persistence abstraction used by [`CrudApiController`](crate::CrudApiController).

use std::sync::Arc;

use async_trait::async_trait;

/// Document repository for entities of type `T` identified by `ID`.
///
/// Generated `{Entity}_MongoRepo` traits are sub-traits of
/// `MongoRepository<Entity, String>` with a blanket implementation, so any
/// implementor of this trait can be handed to a generated controller.
///
/// # Semantics
///
/// - [`save`](Self::save) upserts: an existing document with the same id is
///   replaced, otherwise a new one is inserted. An entity without an id gets a
///   fresh ObjectId.
/// - [`delete`](Self::delete) of a document that is not stored is a no-op.
#[async_trait]
pub trait MongoRepository<T, ID>: Send + Sync
where
    T: Send + Sync + 'static,
    ID: Send + Sync
{
    /// Error type for repository operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Every stored entity, in backend order.
    async fn find_all(&self) -> Result<Vec<T>, Self::Error>;

    /// Entity stored under `id`, if any.
    async fn find_by_id(&self, id: &ID) -> Result<Option<T>, Self::Error>;

    /// Insert or replace `entity`, returning the stored form.
    async fn save(&self, entity: T) -> Result<T, Self::Error>;

    /// Remove `entity` from the store.
    async fn delete(&self, entity: &T) -> Result<(), Self::Error>;
}

#[async_trait]
impl<T, ID, R> MongoRepository<T, ID> for Arc<R>
where
    T: Send + Sync + 'static,
    ID: Send + Sync,
    R: MongoRepository<T, ID>
{
    type Error = R::Error;

    async fn find_all(&self) -> Result<Vec<T>, Self::Error> {
        (**self).find_all().await
    }

    async fn find_by_id(&self, id: &ID) -> Result<Option<T>, Self::Error> {
        (**self).find_by_id(id).await
    }

    async fn save(&self, entity: T) -> Result<T, Self::Error> {
        (**self).save(entity).await
    }

    async fn delete(&self, entity: &T) -> Result<(), Self::Error> {
        (**self).delete(entity).await
    }
}
