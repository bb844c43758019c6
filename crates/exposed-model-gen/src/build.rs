// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Build script entry point.
//!
//! ```rust,ignore
//! // build.rs
//! fn main() {
//!     if let Err(e) = exposed_model_gen::build::generate() {
//!         panic!("{e}");
//!     }
//! }
//! ```
//!
//! Every scanned file is registered with `cargo:rerun-if-changed`, and every
//! diagnostic is surfaced as `cargo:warning`.

use std::path::PathBuf;

use crate::{
    GenError, Generator, GeneratorConfig,
    config::{GENERATED_DIR_ENV, NAMING_ENV}
};

/// Generate units for the crate being built.
///
/// # Errors
///
/// Any [`GenError`]; diagnostics have already been printed as warnings when
/// it is [`GenError::Aborted`].
pub fn generate() -> Result<Vec<PathBuf>, GenError> {
    generate_with(GeneratorConfig::from_build_env()?)
}

/// Like [`generate`] with an explicit configuration.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_with(config: GeneratorConfig) -> Result<Vec<PathBuf>, GenError> {
    println!("cargo:rerun-if-env-changed={GENERATED_DIR_ENV}");
    println!("cargo:rerun-if-env-changed={NAMING_ENV}");

    match Generator::new(config).run() {
        Ok(report) => {
            for file in &report.scanned_files {
                println!("cargo:rerun-if-changed={}", file.display());
            }
            for diagnostic in &report.diagnostics {
                println!("cargo:warning={diagnostic}");
            }
            Ok(report.written)
        }
        Err(err) => {
            for diagnostic in err.diagnostics() {
                println!("cargo:warning={diagnostic}");
            }
            Err(err)
        }
    }
}
