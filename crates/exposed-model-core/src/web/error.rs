// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! HTTP error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response}
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// Error returned by the CRUD handlers.
///
/// Rendered as `{"error": "<reason phrase>", "message": "<details>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Nothing is stored under the requested id.
    #[error("{0}")]
    NotFound(String),

    /// The request body failed validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// The repository reported a failure.
    #[error("repository failure: {0}")]
    Repository(String)
}

impl ApiError {
    /// Wrap a repository error.
    pub fn repository<E: std::error::Error>(err: E) -> Self {
        Self::Repository(err.to_string())
    }

    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = json!({
            "error": status.canonical_reason().unwrap_or("Error"),
            "message": self.to_string()
        });
        (status, Json(body)).into_response()
    }
}
