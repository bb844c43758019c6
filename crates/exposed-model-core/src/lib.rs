// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and runtime types for exposed-model.
//!
//! Generated `*_MongoRepo` / `*_CrudApi` pairs are thin bindings of the types
//! in this crate to one concrete entity. The crate can also be used directly,
//! without the generator.
//!
//! # Overview
//!
//! - [`BaseEntity`]: entity with a string identifier
//! - [`MongoRepository`]: async persistence abstraction
//! - [`CrudApiController`]: the five generic CRUD operations
//! - [`InMemoryRepository`]: map-backed repository for tests and local use
//! - [`MongoCollectionRepository`]: `mongodb` collection backend (feature
//!   `mongodb`)
//! - [`RestController`] / [`web`]: axum routing (feature `web`)
//!
//! # Usage
//!
//! ```rust,ignore
//! use exposed_model_core::prelude::*;
//!
//! let notes = CrudApiController::<Note, _>::new(InMemoryRepository::new());
//! let stored = notes.save(Note::new("title", "content")).await?;
//! assert!(notes.fetch(stored.id().unwrap()).await?.is_some());
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod controller;
mod entity;
mod error;
mod memory;
#[cfg(feature = "mongodb")]
mod mongo;
mod repository;
#[cfg(feature = "web")]
pub mod web;

pub mod prelude;

/// Re-export async_trait for repository implementations.
pub use async_trait::async_trait;
pub use controller::CrudApiController;
pub use entity::{BaseEntity, new_object_id};
pub use error::{ConfigError, RepositoryError};
pub use memory::InMemoryRepository;
#[cfg(feature = "mongodb")]
pub use mongo::{MongoCollectionRepository, MongoConfig};
pub use repository::MongoRepository;
#[cfg(feature = "web")]
pub use web::{ApiError, RestController};
