// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types shared by repositories and configuration loaders.

use thiserror::Error;

/// Failure reported by a repository backend.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Generic backend failure.
    #[error("storage backend failure: {0}")]
    Backend(String),

    /// Error raised by the MongoDB driver.
    #[cfg(feature = "mongodb")]
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error)
}

/// Failure while loading configuration from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("missing environment variable `{0}`")]
    MissingVar(&'static str),

    /// A variable is set but cannot be used.
    #[error("invalid value for `{var}`: {reason}")]
    Invalid {
        /// Variable name.
        var:    &'static str,
        /// Why the value was rejected.
        reason: String
    }
}
