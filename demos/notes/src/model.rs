// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Stored models and their generated controllers.
//!
//! `build.rs` emits one file per `#[exposed_model]` struct into `OUT_DIR`;
//! each is included into a module of its own below.

use exposed_model::{BaseEntity, exposed_model};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A note, served under `/notes`.
#[exposed_model(mapping_root = "notes")]
#[derive(Debug, Clone, PartialEq, BaseEntity, Serialize, Deserialize, Validate)]
pub struct Note {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id:      Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub title:   String,
    #[serde(default)]
    pub content: String
}

/// A transfer between two accounts, reachable only from code.
#[exposed_model(mapping_root = "transact_local_short", expose_web_api = false)]
#[derive(Debug, Clone, PartialEq, BaseEntity, Serialize, Deserialize, Validate)]
#[entity(collection = "transactions")]
pub struct TransactionLocalShortform {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id:          Option<String>,
    #[validate(length(min = 1))]
    pub origin:      String,
    #[validate(length(min = 1))]
    pub destination: String,
    #[validate(range(min = 1))]
    pub amount:      i64
}

mod note_api {
    include!(concat!(env!("OUT_DIR"), "/model/Note_MongoRepo.rs"));
}

mod transaction_api {
    include!(concat!(
        env!("OUT_DIR"),
        "/model/TransactionLocalShortform_MongoRepo.rs"
    ));
}

pub use note_api::{Note_CrudApi, Note_MongoRepo};
pub use transaction_api::{TransactionLocalShortform_CrudApi, TransactionLocalShortform_MongoRepo};
