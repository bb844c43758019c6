// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # exposed-model-gen
//!
//! Build-time generator for `#[exposed_model]` types.
//!
//! For every struct carrying the marker, one Rust source file is emitted with
//! a repository trait and a controller type wired to
//! `exposed_model::CrudApiController`. When the marker keeps
//! `expose_web_api = true`, the controller also implements
//! `exposed_model::RestController` under the marker's `mapping_root`.
//!
//! # Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | discovery | [`scan`] | [`MarkerUse`] per marker, in source order |
//! | validation + naming | [`Generator::process`] | [`GeneratedUnit`] per use, or diagnostics |
//! | rendering | [`render`] | formatted source text |
//! | emission | [`emit`] | `<out>/<module path>/<Repo>.rs` |
//!
//! A pass is all-or-nothing: any error diagnostic leaves the output
//! directory untouched.
//!
//! # Build Script
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
//! # Explicit Registration
//!
//! Discovery can be skipped by handing [`MarkerUse`]s to
//! [`Generator::process`] directly:
//!
//! ```rust
//! use exposed_model_gen::{
//!     Generator, GeneratorConfig, MarkerArgs, MarkerUse,
//!     target::{DeclKind, ModulePath, TargetDecl}
//! };
//!
//! let note = TargetDecl::new("Note", ModulePath::parse("crate::model"), DeclKind::Struct);
//! let generator = Generator::new(GeneratorConfig::new("src/lib.rs", "generated"));
//! let outcome = generator.process(&[MarkerUse::new(MarkerArgs::new("notes"), note)]);
//!
//! assert!(outcome.diagnostics.is_empty());
//! assert_eq!(outcome.units[0].names.controller, "Note_CrudApi");
//! ```

pub mod build;
pub mod config;
pub mod diagnostic;
pub mod emit;
mod error;
pub mod marker;
pub mod naming;
pub mod render;
pub mod scan;
pub mod target;

use std::{collections::BTreeSet, path::PathBuf};

use tracing::{debug, info, instrument};

pub use self::{
    config::GeneratorConfig,
    diagnostic::{Diagnostic, DiagnosticKind, Severity},
    error::GenError,
    marker::{MarkerArgs, MarkerUse},
    naming::{NamingPolicy, UnitNames}
};
use self::{
    render::UnitSpec,
    target::{DeclKind, ModulePath, TargetDecl}
};

/// One synthesized source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Module the target is declared in.
    pub module: ModulePath,
    /// Marked declaration.
    pub target: TargetDecl,
    /// Derived repository and controller names.
    pub names:  UnitNames,
    /// Marker arguments as written.
    pub args:   MarkerArgs,
    /// Formatted source text.
    pub source: String
}

impl GeneratedUnit {
    /// Whether HTTP routing was rendered.
    #[must_use]
    pub fn is_routed(&self) -> bool {
        self.args.expose_web_api
    }

    /// File path relative to the generated sources root.
    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        self.module
            .to_relative_dir()
            .join(format!("{}.rs", self.names.repository))
    }
}

/// Result of [`Generator::process`].
///
/// `units` is empty whenever `diagnostics` holds an error.
#[derive(Debug, Default)]
pub struct Outcome {
    /// Units in marker order.
    pub units:       Vec<GeneratedUnit>,
    /// Every problem found.
    pub diagnostics: Vec<Diagnostic>
}

impl Outcome {
    fn aborted(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            units: Vec::new(),
            diagnostics
        }
    }

    /// Whether any diagnostic is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Summary of [`Generator::run`].
#[derive(Debug, Default)]
pub struct Report {
    /// Units produced, in marker order.
    pub units:         Vec<GeneratedUnit>,
    /// Paths written, empty on a dry run.
    pub written:       Vec<PathBuf>,
    /// Warnings collected while scanning.
    pub diagnostics:   Vec<Diagnostic>,
    /// Source files read, crate root first.
    pub scanned_files: Vec<PathBuf>
}

/// The generation pass.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig
}

impl Generator {
    /// Generator for one configuration.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Settings this generator runs with.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Turn marker uses into units.
    ///
    /// Uses are handled in order. The first marker on a non-struct aborts
    /// the pass with exactly one `KindMismatch` diagnostic. Otherwise every
    /// argument and naming problem is collected, and any of them discards
    /// all units.
    #[instrument(skip_all, fields(uses = uses.len()))]
    pub fn process(&self, uses: &[MarkerUse]) -> Outcome {
        if let Some(mismatch) = uses.iter().find(|u| u.target.kind != DeclKind::Struct) {
            return Outcome::aborted(vec![Diagnostic::kind_mismatch(&mismatch.target)]);
        }

        let options = self.config.render_options();
        let mut diagnostics = Vec::new();
        let mut units = Vec::with_capacity(uses.len());
        let mut taken = BTreeSet::new();

        for marker in uses {
            let MarkerUse { args, target } = marker;
            let at = target.location.clone();

            if args.mapping_root.is_empty() {
                diagnostics.push(
                    Diagnostic::error(
                        DiagnosticKind::InvalidArguments,
                        format!("`{}`: mapping_root must not be empty", target.qualified_name())
                    )
                    .at(at)
                );
                continue;
            }

            let names = self.config.naming().derive(&target.name, &args.mapping_root);
            let invalid = names.invalid();
            if !invalid.is_empty() {
                diagnostics.push(
                    Diagnostic::error(
                        DiagnosticKind::InvalidArguments,
                        format!(
                            "`{}`: derived name(s) {} are not valid identifiers",
                            target.qualified_name(),
                            invalid.iter().map(|n| format!("`{n}`")).collect::<Vec<_>>().join(", ")
                        )
                    )
                    .at(at)
                );
                continue;
            }

            let clashes: Vec<&str> = [&names.repository, &names.controller]
                .into_iter()
                .filter(|name| !taken.insert((target.module.clone(), (*name).clone())))
                .map(String::as_str)
                .collect();
            if !clashes.is_empty() {
                diagnostics.push(
                    Diagnostic::error(
                        DiagnosticKind::DuplicateUnit,
                        format!(
                            "`{}`: `{}` already generated in `{}`",
                            target.qualified_name(),
                            clashes.join("`, `"),
                            target.module
                        )
                    )
                    .at(at)
                );
                continue;
            }

            let spec = UnitSpec {
                target,
                args,
                names: &names
            };
            match render::render(spec, &options) {
                Ok(source) => {
                    debug!(
                        unit = %names.repository,
                        module = %target.module,
                        routed = args.expose_web_api,
                        "unit rendered"
                    );
                    units.push(GeneratedUnit {
                        module: target.module.clone(),
                        target: target.clone(),
                        names,
                        args: args.clone(),
                        source
                    });
                }
                Err(e) => diagnostics.push(
                    Diagnostic::error(DiagnosticKind::InvalidArguments, e.to_string()).at(at)
                )
            }
        }

        if diagnostics.is_empty() {
            Outcome {
                units,
                diagnostics
            }
        } else {
            Outcome::aborted(diagnostics)
        }
    }

    /// Scan the configured crate, process every marker and write the units.
    ///
    /// # Errors
    ///
    /// - [`GenError::InvalidConfig`] for an unusable configuration
    /// - [`GenError::Io`] / [`GenError::Parse`] while scanning or writing
    /// - [`GenError::Aborted`] with every diagnostic when any is an error;
    ///   nothing is written in that case
    #[instrument(skip(self), fields(root = %self.config.crate_root().display()))]
    pub fn run(&self) -> Result<Report, GenError> {
        self.config.validate()?;
        let found = scan::scan_crate(self.config.crate_root())?;

        let mut diagnostics = found.diagnostics;
        if diagnostics.iter().any(Diagnostic::is_error) {
            return Err(GenError::Aborted { diagnostics });
        }

        let outcome = self.process(&found.uses);
        diagnostics.extend(outcome.diagnostics);
        if diagnostics.iter().any(Diagnostic::is_error) {
            return Err(GenError::Aborted { diagnostics });
        }

        let written = if self.config.dry_run() {
            Vec::new()
        } else {
            emit::write_units(self.config.out_dir(), &outcome.units)?
        };
        info!(
            units = outcome.units.len(),
            written = written.len(),
            out = %self.config.out_dir().display(),
            "generation finished"
        );

        Ok(Report {
            units: outcome.units,
            written,
            diagnostics,
            scanned_files: found.files
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::Visibility;

    fn generator() -> Generator {
        Generator::new(GeneratorConfig::new("src/lib.rs", "out"))
    }

    fn model(name: &str, kind: DeclKind) -> TargetDecl {
        TargetDecl::new(name, ModulePath::parse("crate::model"), kind)
            .with_visibility(Visibility::Public)
    }

    #[test]
    fn one_unit_per_use() {
        let outcome = generator().process(&[
            MarkerUse::new(MarkerArgs::new("notes"), model("Note", DeclKind::Struct)),
            MarkerUse::new(
                MarkerArgs::new("transact_local_short").with_expose_web_api(false),
                model("TransactionLocalShortform", DeclKind::Struct)
            )
        ]);
        assert!(outcome.diagnostics.is_empty());
        assert_eq!(outcome.units.len(), 2);

        let note = &outcome.units[0];
        assert!(note.is_routed());
        assert_eq!(
            note.relative_path(),
            PathBuf::from("model").join("Note_MongoRepo.rs")
        );

        let local = &outcome.units[1];
        assert!(!local.is_routed());
        assert!(!local.source.contains("RestController"));
    }

    #[test]
    fn kind_mismatch_aborts_with_one_diagnostic() {
        let outcome = generator().process(&[
            MarkerUse::new(MarkerArgs::new("notes"), model("Note", DeclKind::Struct)),
            MarkerUse::new(MarkerArgs::new("mdl"), model("Model", DeclKind::Enum)),
            MarkerUse::new(MarkerArgs::new("t"), model("Tag", DeclKind::Trait))
        ]);
        assert!(outcome.units.is_empty());
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].kind, DiagnosticKind::KindMismatch);
        assert!(outcome.diagnostics[0].message.contains("`Model`"));
        assert!(outcome.has_errors());
    }

    #[test]
    fn empty_mapping_root_is_invalid() {
        let outcome = generator().process(&[MarkerUse::new(
            MarkerArgs::new(""),
            model("Note", DeclKind::Struct)
        )]);
        assert!(outcome.units.is_empty());
        assert_eq!(outcome.diagnostics[0].kind, DiagnosticKind::InvalidArguments);
    }

    #[test]
    fn blank_mapping_root_is_kept_verbatim() {
        let outcome = generator().process(&[MarkerUse::new(
            MarkerArgs::new(" "),
            model("Note", DeclKind::Struct)
        )]);
        assert!(outcome.diagnostics.is_empty());
        assert_eq!(outcome.units[0].args.mapping_root, " ");
        assert!(
            outcome.units[0]
                .source
                .contains("const REQUEST_MAPPING: &'static str = \" \";")
        );
    }

    #[test]
    fn struct_in_raw_identifier_module() {
        let found = scan::scan_source(
            "pub mod r#type {\n\
             #[exposed_model(\"kinds\")]\n\
             pub struct Kind { pub id: Option<String> }\n\
             }\n",
            std::path::Path::new("src/lib.rs"),
            ModulePath::root()
        )
        .unwrap();
        let outcome = generator().process(&found.uses);

        assert!(outcome.diagnostics.is_empty(), "{:?}", outcome.diagnostics);
        assert_eq!(outcome.units.len(), 1);
        let unit = &outcome.units[0];
        assert!(unit.source.contains("use crate::r#type::Kind;"));
        assert_eq!(
            unit.relative_path(),
            PathBuf::from("type").join("Kind_MongoRepo.rs")
        );
    }

    #[test]
    fn duplicate_names_in_one_module() {
        let uses = [
            MarkerUse::new(MarkerArgs::new("notes"), model("Note", DeclKind::Struct)),
            MarkerUse::new(MarkerArgs::new("notes"), model("Memo", DeclKind::Struct))
        ];
        let generator = Generator::new(
            GeneratorConfig::new("src/lib.rs", "out").with_naming(NamingPolicy::MappingRoot)
        );
        let outcome = generator.process(&uses);
        assert!(outcome.units.is_empty());
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].kind, DiagnosticKind::DuplicateUnit);
        assert!(outcome.diagnostics[0].message.contains("NotesRepo"));
    }

    #[test]
    fn same_name_in_different_modules_is_fine() {
        let other = TargetDecl::new("Note", ModulePath::parse("crate::archive"), DeclKind::Struct);
        let outcome = generator().process(&[
            MarkerUse::new(MarkerArgs::new("notes"), model("Note", DeclKind::Struct)),
            MarkerUse::new(MarkerArgs::new("old_notes"), other)
        ]);
        assert!(outcome.diagnostics.is_empty());
        assert_eq!(outcome.units.len(), 2);
    }

    #[test]
    fn mapping_root_naming_rejects_non_identifiers() {
        let generator = Generator::new(
            GeneratorConfig::new("src/lib.rs", "out").with_naming(NamingPolicy::MappingRoot)
        );
        let outcome = generator.process(&[MarkerUse::new(
            MarkerArgs::new("api/notes"),
            model("Note", DeclKind::Struct)
        )]);
        assert!(outcome.units.is_empty());
        assert_eq!(outcome.diagnostics[0].kind, DiagnosticKind::InvalidArguments);
    }

    #[test]
    fn processing_is_deterministic() {
        let uses = [MarkerUse::new(MarkerArgs::new("notes"), model("Note", DeclKind::Struct))];
        let first = generator().process(&uses);
        let second = generator().process(&uses);
        assert_eq!(first.units, second.units);
    }

    #[test]
    fn no_uses_no_units() {
        let outcome = generator().process(&[]);
        assert!(outcome.units.is_empty());
        assert!(!outcome.has_errors());
    }
}
