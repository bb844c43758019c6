// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Marker attribute arguments.
//!
//! # Accepted Forms
//!
//! | Form | `mapping_root` | `expose_web_api` |
//! |------|----------------|------------------|
//! | `#[exposed_model("notes")]` | `"notes"` | `true` |
//! | `#[exposed_model(mapping_root = "notes")]` | `"notes"` | `true` |
//! | `#[exposed_model(mapping_root = "notes", expose_web_api = false)]` | `"notes"` | `false` |
//!
//! The attribute is recognized by the last segment of its path, so both
//! `#[exposed_model(..)]` and `#[exposed_model::exposed_model(..)]` match.

use darling::FromMeta;
use syn::{Attribute, LitStr, Meta};

use crate::target::TargetDecl;

/// Name of the marker attribute.
pub const MARKER: &str = "exposed_model";

fn default_expose_web_api() -> bool {
    true
}

/// Parameters carried by one marker.
#[derive(Debug, Clone, PartialEq, Eq, FromMeta)]
pub struct MarkerArgs {
    /// Routing path segment, used verbatim.
    pub mapping_root:   String,
    /// Whether HTTP routes are generated.
    #[darling(default = "default_expose_web_api")]
    pub expose_web_api: bool
}

impl MarkerArgs {
    /// Exposed marker for `mapping_root`.
    #[must_use]
    pub fn new(mapping_root: impl Into<String>) -> Self {
        Self {
            mapping_root:   mapping_root.into(),
            expose_web_api: true
        }
    }

    /// Set whether HTTP routing is generated.
    #[must_use]
    pub fn with_expose_web_api(mut self, expose: bool) -> Self {
        self.expose_web_api = expose;
        self
    }

    /// Parse the arguments of a marker attribute.
    ///
    /// # Errors
    ///
    /// Bare `#[exposed_model]`, name-value form, unknown keys or wrongly
    /// typed values.
    pub fn from_attribute(attr: &Attribute) -> darling::Result<Self> {
        match &attr.meta {
            Meta::List(list) => {
                if let Ok(root) = syn::parse2::<LitStr>(list.tokens.clone()) {
                    return Ok(Self::new(root.value()));
                }
                Self::from_meta(&attr.meta)
            }
            Meta::Path(_) => Err(darling::Error::missing_field("mapping_root").with_span(attr)),
            Meta::NameValue(nv) => {
                Err(darling::Error::unsupported_format("name-value").with_span(nv))
            }
        }
    }
}

/// Whether `attr` is the marker.
#[must_use]
pub fn is_marker(attr: &Attribute) -> bool {
    attr.path()
        .segments
        .last()
        .is_some_and(|segment| segment.ident == MARKER)
}

/// One marker attached to one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerUse {
    /// Parsed marker arguments.
    pub args:   MarkerArgs,
    /// Item the marker is attached to.
    pub target: TargetDecl
}

impl MarkerUse {
    /// Pair marker arguments with their target.
    #[must_use]
    pub fn new(args: MarkerArgs, target: TargetDecl) -> Self {
        Self { args, target }
    }
}
