// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! MongoDB backend.
//!
//! - [`MongoConfig`]: connection settings, loadable from the environment
//! - [`MongoCollectionRepository`]: [`MongoRepository`](crate::MongoRepository)
//!   over one collection, documents keyed by a string `_id`

mod config;
mod repository;

pub use self::{config::MongoConfig, repository::MongoCollectionRepository};
