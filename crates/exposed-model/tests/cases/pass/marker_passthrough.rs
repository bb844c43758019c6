// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use exposed_model::{BaseEntity, exposed_model};

#[exposed_model(mapping_root = "notes")]
#[derive(BaseEntity, Debug, Clone)]
pub struct Note {
    pub id: Option<String>,
    pub title: String,
    pub content: String,
}

#[exposed_model(mapping_root = "transact_local_short", expose_web_api = false)]
#[derive(BaseEntity)]
pub struct TransactionLocalShortform {
    pub id: Option<String>,
    pub amount: i64,
}

#[exposed_model("mdl")]
pub struct Model {
    pub counter: i32,
}

fn main() {
    let note = Note {
        id: None,
        title: "t".into(),
        content: "c".into(),
    };
    assert_eq!(note.clone().title, "t");
    assert_eq!(<TransactionLocalShortform as BaseEntity>::COLLECTION, "transactionLocalShortform");
    let _ = Model { counter: 1 };
}
