// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Axum handlers delegating to [`CrudApiController`].

use axum::{
    Json,
    extract::{Path, State}
};
use serde::{Serialize, de::DeserializeOwned};
use validator::Validate;

use super::ApiError;
use crate::{BaseEntity, CrudApiController, MongoRepository};

pub(super) async fn fetch_all<T, R>(
    State(api): State<CrudApiController<T, R>>
) -> Result<Json<Vec<T>>, ApiError>
where
    T: BaseEntity + Serialize,
    R: MongoRepository<T, String>
{
    let entities = api.fetch_all().await.map_err(ApiError::repository)?;
    Ok(Json(entities))
}

pub(super) async fn fetch<T, R>(
    State(api): State<CrudApiController<T, R>>,
    Path(id): Path<String>
) -> Result<Json<T>, ApiError>
where
    T: BaseEntity + Serialize,
    R: MongoRepository<T, String>
{
    api.fetch(&id)
        .await
        .map_err(ApiError::repository)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("no {} stored under id `{id}`", T::COLLECTION)))
}

pub(super) async fn update<T, R>(
    State(api): State<CrudApiController<T, R>>,
    Path(id): Path<String>,
    Json(entity): Json<T>
) -> Result<Json<T>, ApiError>
where
    T: BaseEntity + Serialize + DeserializeOwned + Validate,
    R: MongoRepository<T, String>
{
    entity.validate()?;
    let stored = api.update(&id, entity).await.map_err(ApiError::repository)?;
    Ok(Json(stored))
}

pub(super) async fn save<T, R>(
    State(api): State<CrudApiController<T, R>>,
    Json(entity): Json<T>
) -> Result<Json<T>, ApiError>
where
    T: BaseEntity + Serialize + DeserializeOwned + Validate,
    R: MongoRepository<T, String>
{
    entity.validate()?;
    let stored = api.save(entity).await.map_err(ApiError::repository)?;
    Ok(Json(stored))
}

pub(super) async fn delete<T, R>(
    State(api): State<CrudApiController<T, R>>,
    Path(id): Path<String>
) -> Result<(), ApiError>
where
    T: BaseEntity,
    R: MongoRepository<T, String>
{
    api.delete(&id).await.map_err(ApiError::repository)
}
