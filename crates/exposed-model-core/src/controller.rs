// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generic CRUD controller.
//!
//! [`CrudApiController`] provides the five standard operations over any
//! [`BaseEntity`] stored in a [`MongoRepository`]. Generated `*_CrudApi` types
//! wrap it for one concrete entity.
//!
//! # Operations
//!
//! | Method | Repository calls | Missing id |
//! |--------|------------------|------------|
//! | [`fetch_all`](CrudApiController::fetch_all) | `find_all` | - |
//! | [`fetch`](CrudApiController::fetch) | `find_by_id` | `Ok(None)` |
//! | [`update`](CrudApiController::update) | `save` (upsert) | creates it |
//! | [`save`](CrudApiController::save) | `save` with a fresh id | - |
//! | [`delete`](CrudApiController::delete) | `find_by_id`, then `delete` | no-op |

use std::{marker::PhantomData, sync::Arc};

use tracing::{debug, instrument};

use crate::{BaseEntity, MongoRepository, new_object_id};

/// CRUD operations for entity `T` backed by repository `R`.
///
/// Cloning is cheap: the repository is shared behind an [`Arc`].
pub struct CrudApiController<T, R> {
    repo:   Arc<R>,
    entity: PhantomData<fn() -> T>
}

impl<T, R> Clone for CrudApiController<T, R> {
    fn clone(&self) -> Self {
        Self {
            repo:   Arc::clone(&self.repo),
            entity: PhantomData
        }
    }
}

impl<T, R> std::fmt::Debug for CrudApiController<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrudApiController")
            .field("entity", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T, R> CrudApiController<T, R>
where
    T: BaseEntity,
    R: MongoRepository<T, String>
{
    /// Create a controller owning `repo`.
    pub fn new(repo: R) -> Self {
        Self::from_shared(Arc::new(repo))
    }

    /// Create a controller over a repository shared with other owners.
    pub fn from_shared(repo: Arc<R>) -> Self {
        Self {
            repo,
            entity: PhantomData
        }
    }

    /// Backing repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Retrieve every stored `T`. Order is whatever the store returns.
    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    pub async fn fetch_all(&self) -> Result<Vec<T>, R::Error> {
        self.repo.find_all().await
    }

    /// Retrieve the `T` stored under `id`, or `None`.
    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    pub async fn fetch(&self, id: &str) -> Result<Option<T>, R::Error> {
        self.repo.find_by_id(&id.to_owned()).await
    }

    /// Store `entity` under `id`, creating or replacing the document.
    ///
    /// Any identifier carried by `entity` is overwritten with `id`.
    #[instrument(skip(self, entity), fields(collection = T::COLLECTION))]
    pub async fn update(&self, id: &str, mut entity: T) -> Result<T, R::Error> {
        entity.set_id(id.to_owned());
        self.repo.save(entity).await
    }

    /// Insert `entity` as a new document under a freshly generated ObjectId.
    ///
    /// An identifier already present on `entity` is discarded.
    #[instrument(skip(self, entity), fields(collection = T::COLLECTION))]
    pub async fn save(&self, mut entity: T) -> Result<T, R::Error> {
        let id = new_object_id();
        debug!(%id, "assigning new id");
        entity.set_id(id);
        self.repo.save(entity).await
    }

    /// Remove the document stored under `id`. Absent ids are ignored.
    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    pub async fn delete(&self, id: &str) -> Result<(), R::Error> {
        match self.repo.find_by_id(&id.to_owned()).await? {
            Some(entity) => self.repo.delete(&entity).await,
            None => {
                debug!("nothing stored under id, delete skipped");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryRepository;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id:      Option<String>,
        title:   String,
        content: String
    }

    impl BaseEntity for Note {
        const COLLECTION: &'static str = "note";

        fn id(&self) -> Option<&str> {
            self.id.as_deref()
        }

        fn set_id(&mut self, id: String) {
            self.id = Some(id);
        }
    }

    fn note(title: &str) -> Note {
        Note {
            id:      None,
            title:   title.to_owned(),
            content: format!("{title} content")
        }
    }

    fn controller() -> CrudApiController<Note, InMemoryRepository<Note>> {
        CrudApiController::new(InMemoryRepository::new())
    }

    #[tokio::test]
    async fn save_assigns_fresh_id() {
        let api = controller();
        let stored = api.save(note("a")).await.unwrap();

        let id = stored.id.clone().unwrap();
        assert_eq!(id.len(), 24);
        assert_eq!(api.fetch(&id).await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn save_overwrites_incoming_id() {
        let api = controller();
        let existing = api.save(note("first")).await.unwrap();

        let mut second = note("second");
        second.id = existing.id.clone();
        let stored = api.save(second).await.unwrap();

        assert_ne!(stored.id, existing.id);
        assert_eq!(api.fetch_all().await.unwrap().len(), 2);
        let kept = api.fetch(existing.id.as_deref().unwrap()).await.unwrap();
        assert_eq!(kept.unwrap().title, "first");
    }

    #[tokio::test]
    async fn update_forces_path_id_and_upserts() {
        let api = controller();

        let mut entity = note("created by update");
        entity.id = Some("ignored".to_owned());
        let stored = api.update("6500000000000000000000aa", entity).await.unwrap();
        assert_eq!(stored.id.as_deref(), Some("6500000000000000000000aa"));
        assert!(api.fetch("ignored").await.unwrap().is_none());

        let replaced = api
            .update("6500000000000000000000aa", note("replaced"))
            .await
            .unwrap();
        assert_eq!(replaced.title, "replaced");
        assert_eq!(api.fetch_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn fetch_missing_is_none() {
        let api = controller();
        assert_eq!(api.fetch("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_removes_stored_entity() {
        let api = controller();
        let stored = api.save(note("gone")).await.unwrap();
        let id = stored.id.unwrap();

        api.delete(&id).await.unwrap();
        assert!(api.fetch(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_of_absent_id_is_noop() {
        let api = controller();
        api.save(note("kept")).await.unwrap();

        for id in ["", "missing", "6500000000000000000000ff"] {
            api.delete(id).await.unwrap();
        }
        assert_eq!(api.fetch_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn clones_share_repository() {
        let api = controller();
        let other = api.clone();
        other.save(note("shared")).await.unwrap();
        assert_eq!(api.repository().len().await, 1);
    }
}
