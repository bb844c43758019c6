// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! Procedural macros for exposed-model.
//!
//! - [`exposed_model`](macro@exposed_model): the marker read by
//!   `exposed-model-gen`
//! - [`BaseEntity`](macro@BaseEntity): implements
//!   `exposed_model::BaseEntity` for a struct with an `Option<String>` id
//!
//! # Quick Start
//!
//! ```rust,ignore
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
//! ```
//!
//! # Marker Parameters
//!
//! | Parameter | Type | Default | Meaning |
//! |-----------|------|---------|---------|
//! | `mapping_root` | string | required | first URL path segment |
//! | `expose_web_api` | bool | `true` | generate HTTP routing |
//!
//! `#[exposed_model("notes")]` is shorthand for
//! `#[exposed_model(mapping_root = "notes")]`.

mod base_entity;
mod marker;

use proc_macro::TokenStream;

/// Marks a struct for repository/controller generation.
///
/// The attribute itself expands to the annotated item unchanged. The
/// `exposed-model-gen` build step reads it from source, checks that it is
/// applied to a struct, and emits the `{Name}_MongoRepo` / `{Name}_CrudApi`
/// pair.
#[proc_macro_attribute]
pub fn exposed_model(args: TokenStream, item: TokenStream) -> TokenStream {
    marker::expand(args.into(), item.into()).into()
}

/// Derive `exposed_model::BaseEntity`.
///
/// The id field is the one marked `#[id]`, or else the field named `id`. It
/// must be an `Option<String>`.
///
/// # Attributes
///
/// - `#[entity(collection = "...")]`: collection name (default: struct name
///   in lowerCamelCase, e.g. `TransactionLongform` → `transactionLongform`)
/// - `#[entity(crate = "...")]`: path of the runtime crate (default:
///   `::exposed_model`)
#[proc_macro_derive(BaseEntity, attributes(entity, id))]
pub fn derive_base_entity(input: TokenStream) -> TokenStream {
    base_entity::derive(input)
}
