// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Messages reported by a generation pass.

use std::fmt;

use crate::target::{Location, TargetDecl};

/// How serious a diagnostic is. Any error aborts the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Aborts the pass.
    Error,
    /// Reported, generation continues.
    Warning
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning"
        })
    }
}

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Marker on something other than a struct.
    KindMismatch,
    /// Marker arguments that cannot produce a unit.
    InvalidArguments,
    /// Two units with the same name in one module.
    DuplicateUnit,
    /// `mod foo;` whose file was not found.
    UnresolvedModule
}

impl DiagnosticKind {
    /// Short code shown in brackets, e.g. `kind_mismatch`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::KindMismatch => "kind_mismatch",
            Self::InvalidArguments => "invalid_arguments",
            Self::DuplicateUnit => "duplicate_unit",
            Self::UnresolvedModule => "unresolved_module"
        }
    }
}

/// One reported problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Error or warning.
    pub severity: Severity,
    /// Category of the problem.
    pub kind:     DiagnosticKind,
    /// Human-readable text.
    pub message:  String,
    /// Marker position, when known.
    pub location: Option<Location>
}

impl Diagnostic {
    /// An error without a location.
    #[must_use]
    pub fn error(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            kind,
            message: message.into(),
            location: None
        }
    }

    /// A warning without a location.
    #[must_use]
    pub fn warning(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            kind,
            message: message.into(),
            location: None
        }
    }

    /// Attach a location, replacing any previous one.
    #[must_use]
    pub fn at(mut self, location: Option<Location>) -> Self {
        self.location = location;
        self
    }

    /// The marker is attached to `target`, which is not a struct.
    #[must_use]
    pub fn kind_mismatch(target: &TargetDecl) -> Self {
        Self::error(
            DiagnosticKind::KindMismatch,
            format!(
                "exposed-model-gen: #[exposed_model] can only be applied to a struct, \
                 but `{}` is {}",
                target.name,
                target.kind.describe()
            )
        )
        .at(target.location.clone())
    }

    /// Whether this diagnostic aborts the pass.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.kind.code(), self.message)?;
        if let Some(location) = &self.location {
            write!(f, " at {location}")?;
        }
        Ok(())
    }
}

/// Number of error-severity diagnostics.
#[must_use]
pub fn error_count(diagnostics: &[Diagnostic]) -> usize {
    diagnostics.iter().filter(|d| d.is_error()).count()
}
