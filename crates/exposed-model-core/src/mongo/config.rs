// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! MongoDB connection settings.

use mongodb::{Client, Database, options::ClientOptions};
use tracing::info;

use crate::{ConfigError, RepositoryError};

const DEFAULT_DATABASE: &str = "exposed_model";
const DEFAULT_MAX_POOL_SIZE: u32 = 100;

/// MongoDB connection settings.
///
/// # Example
///
/// ```ignore
/// // Manual construction
/// let config = MongoConfig::new("mongodb://localhost:27017", "notes");
///
/// // From MONGODB_URL / MONGODB_DATABASE / MONGODB_APP_NAME / MONGODB_MAX_POOL_SIZE
/// let config = MongoConfig::from_env()?;
/// let db = config.connect().await?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoConfig {
    /// Connection string, e.g. `mongodb://localhost:27017`.
    pub url:           String,
    /// Database holding the entity collections.
    pub database:      String,
    /// Application name reported to the server.
    pub app_name:      Option<String>,
    /// Maximum number of pooled connections.
    pub max_pool_size: u32
}

impl MongoConfig {
    /// Settings for `database` at `url` with default pool size.
    pub fn new(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url:           url.into(),
            database:      database.into(),
            app_name:      None,
            max_pool_size: DEFAULT_MAX_POOL_SIZE
        }
    }

    /// Set the application name reported to the server.
    #[must_use]
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Set the maximum pool size.
    #[must_use]
    pub fn with_max_pool_size(mut self, max_pool_size: u32) -> Self {
        self.max_pool_size = max_pool_size;
        self
    }

    /// Load settings from environment variables.
    ///
    /// | Variable | Required | Default |
    /// |----------|----------|---------|
    /// | `MONGODB_URL` | yes | - |
    /// | `MONGODB_DATABASE` | no | `exposed_model` |
    /// | `MONGODB_APP_NAME` | no | unset |
    /// | `MONGODB_MAX_POOL_SIZE` | no | `100` |
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingVar`] without `MONGODB_URL`,
    /// [`ConfigError::Invalid`] for a non-numeric pool size.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup("MONGODB_URL").ok_or(ConfigError::MissingVar("MONGODB_URL"))?;
        let database = lookup("MONGODB_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_owned());

        let mut config = Self::new(url, database);
        config.app_name = lookup("MONGODB_APP_NAME");
        if let Some(raw) = lookup("MONGODB_MAX_POOL_SIZE") {
            config.max_pool_size = raw.parse().map_err(|err| ConfigError::Invalid {
                var:    "MONGODB_MAX_POOL_SIZE",
                reason: format!("{err}")
            })?;
        }
        Ok(config)
    }

    /// Connect and select the configured database.
    ///
    /// The driver connects lazily; this only fails on malformed options.
    pub async fn connect(&self) -> Result<Database, RepositoryError> {
        let mut options = ClientOptions::parse(&self.url).await?;
        options.app_name = self.app_name.clone();
        options.max_pool_size = Some(self.max_pool_size);

        let client = Client::with_options(options)?;
        info!(database = %self.database, "mongodb client ready");
        Ok(client.database(&self.database))
    }
}
