// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator failures.

use std::path::PathBuf;

use thiserror::Error;

use crate::diagnostic::{Diagnostic, error_count};

/// Failure of a generation run.
#[derive(Debug, Error)]
pub enum GenError {
    /// Reading a source file, creating a directory or writing a unit failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// File or directory involved.
        path:   PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error
    },

    /// A scanned source file is not valid Rust.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// File that failed to parse.
        path:   PathBuf,
        /// Parser error with its span.
        #[source]
        source: syn::Error
    },

    /// The pass reported at least one error diagnostic. Nothing was written.
    #[error("generation aborted with {} error(s)", error_count(.diagnostics))]
    Aborted {
        /// Every diagnostic of the pass, warnings included.
        diagnostics: Vec<Diagnostic>
    },

    /// A build-script variable is missing.
    #[error("environment variable `{0}` is not set")]
    MissingEnv(&'static str),

    /// Settings that cannot drive a run.
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),

    /// Generated tokens did not form a valid file.
    #[error("failed to render unit for `{target}`: {reason}")]
    Render {
        /// Qualified name of the marked struct.
        target: String,
        /// What was not valid Rust.
        reason: String
    }
}

impl GenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source
        }
    }

    /// Diagnostics carried by [`GenError::Aborted`], empty otherwise.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Aborted { diagnostics } => diagnostics,
            _ => &[]
        }
    }
}
