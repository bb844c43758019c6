// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Names of generated items.
//!
//! | Policy | Repository | Controller |
//! |--------|------------|------------|
//! | [`SimpleName`](NamingPolicy::SimpleName) | `Note_MongoRepo` | `Note_CrudApi` |
//! | [`MappingRoot`](NamingPolicy::MappingRoot) | `NotesRepo` | `NotesApi` |
//!
//! `SimpleName` is the default. `MappingRoot` derives names from the marker's
//! `mapping_root` and is kept for projects generated with the older scheme.

use std::{fmt, str::FromStr};

/// How generated item names are derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum NamingPolicy {
    /// `<SimpleName>_MongoRepo` / `<SimpleName>_CrudApi`.
    #[default]
    SimpleName,
    /// `Capitalized(mapping_root)` + `Repo` / `Api`.
    MappingRoot
}

impl NamingPolicy {
    /// Derive both names for a target.
    #[must_use]
    pub fn derive(self, simple_name: &str, mapping_root: &str) -> UnitNames {
        match self {
            Self::SimpleName => UnitNames {
                repository: format!("{simple_name}_MongoRepo"),
                controller: format!("{simple_name}_CrudApi")
            },
            Self::MappingRoot => {
                let base = capitalize_first(mapping_root);
                UnitNames {
                    repository: format!("{base}Repo"),
                    controller: format!("{base}Api")
                }
            }
        }
    }

    /// Name accepted by [`FromStr`] and the build variable.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SimpleName => "simple-name",
            Self::MappingRoot => "mapping-root"
        }
    }
}

impl fmt::Display for NamingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "simple-name" | "simple_name" => Ok(Self::SimpleName),
            "mapping-root" | "mapping_root" => Ok(Self::MappingRoot),
            other => Err(format!(
                "unknown naming policy `{other}`, expected `simple-name` or `mapping-root`"
            ))
        }
    }
}

/// Repository and controller names of one generated unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnitNames {
    /// Repository trait, also the file stem.
    pub repository: String,
    /// Controller struct.
    pub controller: String
}

impl UnitNames {
    /// Names that are not valid Rust identifiers.
    #[must_use]
    pub fn invalid(&self) -> Vec<&str> {
        [self.repository.as_str(), self.controller.as_str()]
            .into_iter()
            .filter(|name| !is_valid_ident(name))
            .collect()
    }
}

/// Upper-case the first character, leave the rest as is.
#[must_use]
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new()
    }
}

/// Whether `name` can be used as a plain (non-raw) identifier.
#[must_use]
pub fn is_valid_ident(name: &str) -> bool {
    syn::parse_str::<syn::Ident>(name).is_ok()
}
