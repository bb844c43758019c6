// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use exposed_model::BaseEntity;

#[derive(BaseEntity, Clone)]
pub struct TransactionLongform {
    pub id: Option<String>,
    pub origin: String,
    pub destination: String,
    pub amount: i64,
}

fn main() {
    let mut tx = TransactionLongform {
        id: None,
        origin: "a".into(),
        destination: "b".into(),
        amount: 10,
    };
    assert_eq!(<TransactionLongform as exposed_model::BaseEntity>::COLLECTION, "transactionLongform");
    exposed_model::BaseEntity::set_id(&mut tx, "abc".into());
    assert_eq!(exposed_model::BaseEntity::id(&tx), Some("abc"));
}
