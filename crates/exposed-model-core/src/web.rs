// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! HTTP exposure of [`CrudApiController`] through axum.
//!
//! # Routes
//!
//! Relative to the controller's mapping root:
//!
//! | Method | Path | Body | Response |
//! |--------|------|------|----------|
//! | GET | `/all` | - | JSON array of entities |
//! | GET | `/get/{id}` | - | entity, `404` when absent |
//! | PUT | `/update/{id}` | entity (validated) | updated entity |
//! | POST | `/save` | entity (validated) | created entity with new id |
//! | DELETE | `/delete/{id}` | - | empty `200` |
//!
//! # Usage
//!
//! ```rust,ignore
//! let app = Router::new()
//!     .merge(Note_CrudApi::new(InMemoryRepository::new()).router())
//!     .layer(TraceLayer::new_for_http());
//! ```

mod error;
mod handlers;

pub use axum::Router;
use axum::routing::{delete, get, post, put};
use serde::{Serialize, de::DeserializeOwned};
use validator::Validate;

pub use self::error::ApiError;
use crate::{BaseEntity, CrudApiController, MongoRepository};

/// A controller reachable over HTTP under a fixed mapping root.
///
/// Generated `*_CrudApi` types implement this trait only when their marker
/// has `expose_web_api = true`.
pub trait RestController: Sized {
    /// First path segment of every route, used verbatim.
    const REQUEST_MAPPING: &'static str;

    /// Routes relative to the mapping root.
    fn routes(self) -> Router;

    /// Routes mounted under [`REQUEST_MAPPING`](Self::REQUEST_MAPPING).
    fn router(self) -> Router {
        mount(Self::REQUEST_MAPPING, self.routes())
    }
}

/// Absolute mount path for a mapping root (`"notes"` → `"/notes"`).
#[must_use]
pub fn mount_path(mapping_root: &str) -> String {
    if mapping_root.starts_with('/') {
        mapping_root.to_owned()
    } else {
        format!("/{mapping_root}")
    }
}

/// Nest `routes` under `mapping_root`.
#[must_use]
pub fn mount(mapping_root: &str, routes: Router) -> Router {
    let path = mount_path(mapping_root);
    if path == "/" {
        routes
    } else {
        Router::new().nest(&path, routes)
    }
}

impl<T, R> CrudApiController<T, R>
where
    T: BaseEntity + Clone + Serialize + DeserializeOwned + Validate,
    R: MongoRepository<T, String> + 'static
{
    /// The five CRUD routes, relative to the mapping root.
    pub fn routes(self) -> Router {
        Router::new()
            .route("/all", get(handlers::fetch_all::<T, R>))
            .route("/get/{id}", get(handlers::fetch::<T, R>))
            .route("/update/{id}", put(handlers::update::<T, R>))
            .route("/save", post(handlers::save::<T, R>))
            .route("/delete/{id}", delete(handlers::delete::<T, R>))
            .with_state(self)
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode}
    };
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::InMemoryRepository;

    #[derive(Debug, Clone, Serialize, Deserialize, Validate)]
    struct Note {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id:      Option<String>,
        #[validate(length(min = 1))]
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

    struct NotesApi(CrudApiController<Note, InMemoryRepository<Note>>);

    impl RestController for NotesApi {
        const REQUEST_MAPPING: &'static str = "notes";

        fn routes(self) -> Router {
            self.0.routes()
        }
    }

    fn app() -> Router {
        NotesApi(CrudApiController::new(InMemoryRepository::new())).router()
    }

    async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap()
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[test]
    fn mount_path_prefixes_slash_once() {
        assert_eq!(mount_path("notes"), "/notes");
        assert_eq!(mount_path("/notes"), "/notes");
        assert_eq!(mount_path("transact_short"), "/transact_short");
    }

    #[tokio::test]
    async fn save_then_get_round_trip() {
        let app = app();
        let (status, created) = call(
            &app,
            Method::POST,
            "/notes/save",
            Some(json!({"id": "client-chosen", "title": "t", "content": "c"}))
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let id = created["id"].as_str().unwrap().to_owned();
        assert_ne!(id, "client-chosen");
        assert_eq!(id.len(), 24);

        let (status, fetched) = call(&app, Method::GET, &format!("/notes/get/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn all_lists_saved_entities() {
        let app = app();
        for title in ["one", "two"] {
            call(
                &app,
                Method::POST,
                "/notes/save",
                Some(json!({"title": title, "content": ""}))
            )
            .await;
        }
        let (status, all) = call(&app, Method::GET, "/notes/all", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let (status, body) = call(&app(), Method::GET, "/notes/get/missing", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not Found");
    }

    #[tokio::test]
    async fn update_uses_path_id() {
        let app = app();
        let (status, updated) = call(
            &app,
            Method::PUT,
            "/notes/update/abc",
            Some(json!({"id": "other", "title": "t", "content": "c"}))
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"], "abc");

        let (status, _) = call(&app, Method::GET, "/notes/get/abc", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_body_is_rejected() {
        let (status, body) = call(
            &app(),
            Method::POST,
            "/notes/save",
            Some(json!({"title": "", "content": "c"}))
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Bad Request");
    }

    #[tokio::test]
    async fn delete_absent_id_succeeds() {
        let (status, body) = call(&app(), Method::DELETE, "/notes/delete/missing", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn delete_removes_entity() {
        let app = app();
        let (_, created) = call(
            &app,
            Method::POST,
            "/notes/save",
            Some(json!({"title": "t", "content": "c"}))
        )
        .await;
        let id = created["id"].as_str().unwrap();

        let (status, _) = call(&app, Method::DELETE, &format!("/notes/delete/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = call(&app, Method::GET, &format!("/notes/get/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn routes_are_not_served_outside_mapping_root() {
        let (status, _) = call(&app(), Method::GET, "/all", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
