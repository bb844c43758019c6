// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use exposed_model_core::prelude::*;
//! ```

#[cfg(feature = "mongodb")]
pub use crate::{MongoCollectionRepository, MongoConfig};
pub use crate::{
    BaseEntity, CrudApiController, InMemoryRepository, MongoRepository, RepositoryError,
    async_trait
};
#[cfg(feature = "web")]
pub use crate::{ApiError, RestController};
