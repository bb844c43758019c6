// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Notes service: one web-exposed model and one local-only model.
//!
//! | Model | Mapping root | Exposure |
//! |-------|--------------|----------|
//! | [`Note`](model::Note) | `notes` | HTTP under `/notes` |
//! | [`TransactionLocalShortform`](model::TransactionLocalShortform) | `transact_local_short` | in-process only |

pub mod model;

use exposed_model::{RestController, web::Router};
use tracing::info;

use self::model::{
    Note_CrudApi, Note_MongoRepo, TransactionLocalShortform, TransactionLocalShortform_CrudApi,
    TransactionLocalShortform_MongoRepo
};

/// Router with every web-exposed controller mounted.
pub fn app<R>(notes: R) -> Router
where
    R: Note_MongoRepo + 'static
{
    Note_CrudApi::new(notes).router()
}

/// Record a transfer through the local-only controller.
///
/// # Errors
///
/// Whatever the backing repository reports.
pub async fn record_transfer<R>(
    ledger: &TransactionLocalShortform_CrudApi<R>,
    origin: &str,
    destination: &str,
    amount: i64
) -> Result<TransactionLocalShortform, R::Error>
where
    R: TransactionLocalShortform_MongoRepo
{
    let stored = ledger
        .save(TransactionLocalShortform {
            id: None,
            origin: origin.to_owned(),
            destination: destination.to_owned(),
            amount
        })
        .await?;
    info!(id = stored.id.as_deref().unwrap_or_default(), amount, "transfer recorded");
    Ok(stored)
}
