// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use exposed_model::BaseEntity;

#[derive(BaseEntity)]
#[entity(collection = "people")]
pub struct Person {
    #[id]
    pub object_id: Option<std::string::String>,
    pub first_name: String,
    pub last_name: String,
}

fn main() {
    assert_eq!(<Person as BaseEntity>::COLLECTION, "people");
}
