// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Description of the item a marker is attached to.
//!
//! The scanner builds one [`TargetDecl`] per marker use. Everything the
//! generator needs about the annotated item lives here: its simple name, the
//! module it is declared in, what kind of item it is and how visible it is.

use std::{
    fmt,
    path::{Path, PathBuf}
};

/// Module path of an item relative to its crate root.
///
/// `crate::model::notes` is stored as `["model", "notes"]`; items of the crate
/// root have an empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModulePath(Vec<String>);

impl ModulePath {
    /// The crate root.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Build from module names, outermost first.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Parse `crate::a::b`, `a::b` or an empty string.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        Self::from_segments(
            path.split("::")
                .map(str::trim)
                .filter(|s| !s.is_empty() && *s != "crate")
        )
    }

    /// Path of the child module `name`.
    #[must_use]
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.into());
        Self(segments)
    }

    /// Module names, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Whether this is the crate root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Directory of generated files for this module (`model/notes`).
    #[must_use]
    pub fn to_relative_dir(&self) -> PathBuf {
        self.0.iter().collect()
    }

    /// Absolute Rust path of `item` inside this module.
    #[must_use]
    pub fn qualify(&self, item: &str) -> String {
        let mut path = String::from("crate");
        for segment in &self.0 {
            path.push_str("::");
            path.push_str(segment);
        }
        path.push_str("::");
        path.push_str(item);
        path
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("crate")?;
        for segment in &self.0 {
            write!(f, "::{segment}")?;
        }
        Ok(())
    }
}

/// Declared kind of an annotated item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    /// `struct`, the only kind units are generated for.
    Struct,
    /// `enum`
    Enum,
    /// `union`
    Union,
    /// `trait`
    Trait,
    /// `fn`
    Function,
    /// `type`
    TypeAlias,
    /// `mod`
    Module,
    /// `impl`
    Impl,
    /// Anything else.
    Other
}

impl DeclKind {
    /// Keyword-like name (`struct`, `enum`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Union => "union",
            Self::Trait => "trait",
            Self::Function => "function",
            Self::TypeAlias => "type alias",
            Self::Module => "module",
            Self::Impl => "impl block",
            Self::Other => "item"
        }
    }

    /// Name with an indefinite article, for messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Struct => "a struct",
            Self::Enum => "an enum",
            Self::Union => "a union",
            Self::Trait => "a trait",
            Self::Function => "a function",
            Self::TypeAlias => "a type alias",
            Self::Module => "a module",
            Self::Impl => "an impl block",
            Self::Other => "an item"
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared visibility of an annotated item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// `pub`
    Public,
    /// `pub(crate)`, `pub(super)`, `pub(in ...)`
    Restricted,
    /// No modifier.
    #[default]
    Private
}

impl From<&syn::Visibility> for Visibility {
    fn from(vis: &syn::Visibility) -> Self {
        match vis {
            syn::Visibility::Public(_) => Self::Public,
            syn::Visibility::Restricted(_) => Self::Restricted,
            syn::Visibility::Inherited => Self::Private
        }
    }
}

/// Position of a marker in a scanned file. Line and column are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    /// Scanned file.
    pub file:   PathBuf,
    /// Line of the marker.
    pub line:   usize,
    /// Column of the marker.
    pub column: usize
}

impl Location {
    /// Position `line:column` in `file`.
    #[must_use]
    pub fn new(file: impl AsRef<Path>, line: usize, column: usize) -> Self {
        Self {
            file: file.as_ref().to_path_buf(),
            line,
            column
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

/// The item a marker is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDecl {
    /// Identifier without any `r#` prefix.
    pub name:       String,
    /// Enclosing module.
    pub module:     ModulePath,
    /// What kind of item it is.
    pub kind:       DeclKind,
    /// Declared visibility.
    pub visibility: Visibility,
    /// Marker position, when scanned from a file.
    pub location:   Option<Location>
}

impl TargetDecl {
    /// A private item without a known location.
    #[must_use]
    pub fn new(name: impl Into<String>, module: ModulePath, kind: DeclKind) -> Self {
        Self {
            name: name.into(),
            module,
            kind,
            visibility: Visibility::Private,
            location: None
        }
    }

    /// Set the declared visibility.
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set the marker position.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// `crate::model::Note`
    #[must_use]
    pub fn qualified_name(&self) -> String {
        self.module.qualify(&self.name)
    }

    /// Whether the item is plain `pub`.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}
