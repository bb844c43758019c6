// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # exposed-model
//!
//! One crate for applications. Re-exports:
//! - the [`exposed_model`](macro@exposed_model) marker and the
//!   [`BaseEntity`](macro@BaseEntity) derive from `exposed-model-macros`
//! - all runtime types from `exposed-model-core` ([`CrudApiController`],
//!   [`MongoRepository`], [`InMemoryRepository`], ...)
//!
//! Code emitted by `exposed-model-gen` imports from this crate.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! // src/model.rs
//! use exposed_model::{BaseEntity, exposed_model};
//!
//! #[exposed_model(mapping_root = "notes")]
//! #[derive(BaseEntity, Clone, Serialize, Deserialize, Validate)]
//! pub struct Note {
//!     #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
//!     pub id: Option<String>,
//!     pub title: String,
//!     pub content: String
//! }
//!
//! mod note_api {
//!     include!(concat!(env!("OUT_DIR"), "/model/Note_MongoRepo.rs"));
//! }
//! pub use note_api::*;
//!
//! // build.rs
//! fn main() {
//!     exposed_model_gen::build::generate().unwrap();
//! }
//! ```

pub use exposed_model_core::*;
pub use exposed_model_macros::{BaseEntity, exposed_model};
