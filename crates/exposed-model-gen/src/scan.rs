// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Discovery of marker uses in a crate's module tree.
//!
//! Starting from the crate root file, every item is checked for the marker
//! and every `mod` is followed: inline modules directly, file modules through
//! the usual lookup (`#[path]`, `name.rs`, `name/mod.rs`). Modules gated with
//! `#[cfg(test)]` are skipped.
//!
//! The scanner does not judge what it finds: a marker on an enum is reported
//! as a [`MarkerUse`] with [`DeclKind::Enum`] and rejected later by the
//! generator. Only marker arguments that cannot be parsed and module files
//! that cannot be found become diagnostics here.

use std::{
    fs,
    path::{Path, PathBuf}
};

use syn::{Attribute, Item, Meta, spanned::Spanned};
use tracing::{debug, trace};

use crate::{
    GenError,
    diagnostic::{Diagnostic, DiagnosticKind},
    marker::{MarkerArgs, MarkerUse, is_marker},
    target::{DeclKind, Location, ModulePath, TargetDecl, Visibility}
};

/// Result of scanning a crate.
#[derive(Debug, Default)]
pub struct Scan {
    /// Marker uses in source order.
    pub uses:        Vec<MarkerUse>,
    /// Unresolved modules and unparsable marker arguments.
    pub diagnostics: Vec<Diagnostic>,
    /// Every file read, crate root first.
    pub files:       Vec<PathBuf>
}

/// Scan the module tree rooted at `root_file` (`src/lib.rs` or `src/main.rs`).
///
/// # Errors
///
/// [`GenError::Io`] when a reachable file cannot be read and
/// [`GenError::Parse`] when it is not valid Rust.
pub fn scan_crate(root_file: &Path) -> Result<Scan, GenError> {
    let mut scanner = Scanner::default();
    let dir = parent_dir(root_file);
    scanner.scan_file(root_file, ModulePath::root(), Dirs::same(dir))?;
    debug!(
        files = scanner.scan.files.len(),
        uses = scanner.scan.uses.len(),
        "crate scanned"
    );
    Ok(scanner.scan)
}

/// Scan one source text as the body of `module`, without following file
/// modules.
///
/// # Errors
///
/// [`GenError::Parse`] when `source` is not valid Rust.
pub fn scan_source(source: &str, file: &Path, module: ModulePath) -> Result<Scan, GenError> {
    let parsed = syn::parse_file(source).map_err(|e| GenError::Parse {
        path:   file.to_path_buf(),
        source: e
    })?;
    let mut scanner = Scanner {
        follow_files: false,
        ..Scanner::default()
    };
    scanner.scan.files.push(file.to_path_buf());
    scanner.scan_items(&parsed.items, &module, file, &Dirs::same(parent_dir(file)))?;
    Ok(scanner.scan)
}

/// Directories used to resolve `mod name;` declarations.
#[derive(Debug, Clone)]
struct Dirs {
    /// Where `name.rs` / `name/mod.rs` are looked up.
    children:  PathBuf,
    /// Base of `#[path = "..."]`.
    path_attr: PathBuf
}

impl Dirs {
    fn same(dir: PathBuf) -> Self {
        Self {
            children:  dir.clone(),
            path_attr: dir
        }
    }

    fn nested(&self, name: &str) -> Self {
        Self::same(self.children.join(name))
    }
}

struct Scanner {
    scan:         Scan,
    follow_files: bool
}

impl Default for Scanner {
    fn default() -> Self {
        Self {
            scan:         Scan::default(),
            follow_files: true
        }
    }
}

impl Scanner {
    fn scan_file(&mut self, path: &Path, module: ModulePath, dirs: Dirs) -> Result<(), GenError> {
        trace!(path = %path.display(), %module, "scanning file");
        let source = fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;
        let parsed = syn::parse_file(&source).map_err(|e| GenError::Parse {
            path:   path.to_path_buf(),
            source: e
        })?;
        self.scan.files.push(path.to_path_buf());
        self.scan_items(&parsed.items, &module, path, &dirs)
    }

    fn scan_items(
        &mut self,
        items: &[Item],
        module: &ModulePath,
        file: &Path,
        dirs: &Dirs
    ) -> Result<(), GenError> {
        for item in items {
            self.collect_markers(item, module, file);

            let Item::Mod(m) = item else { continue };
            if is_cfg_test(&m.attrs) {
                continue;
            }
            let name = unraw(&m.ident);
            let child = module.child(name.clone());
            match &m.content {
                Some((_, inner)) => {
                    self.scan_items(inner, &child, file, &dirs.nested(&name))?;
                }
                None if self.follow_files => self.scan_mod_file(m, child, &name, file, dirs)?,
                None => {}
            }
        }
        Ok(())
    }

    fn scan_mod_file(
        &mut self,
        m: &syn::ItemMod,
        module: ModulePath,
        name: &str,
        file: &Path,
        dirs: &Dirs
    ) -> Result<(), GenError> {
        let candidates = match path_attr(&m.attrs) {
            Some(custom) => vec![dirs.path_attr.join(custom)],
            None => vec![
                dirs.children.join(format!("{name}.rs")),
                dirs.children.join(name).join("mod.rs"),
            ]
        };

        let Some(found) = candidates.into_iter().find(|c| c.is_file()) else {
            self.scan.diagnostics.push(
                Diagnostic::warning(
                    DiagnosticKind::UnresolvedModule,
                    format!("no source file found for `{module}` (`mod {name};`), skipped")
                )
                .at(Some(location(file, m.ident.span())))
            );
            return Ok(());
        };

        let mod_rs = found.file_name().is_some_and(|f| f == "mod.rs");
        let dirs = if mod_rs || path_attr(&m.attrs).is_some() {
            Dirs::same(parent_dir(&found))
        } else {
            Dirs {
                children:  parent_dir(&found).join(name),
                path_attr: parent_dir(&found)
            }
        };
        self.scan_file(&found, module, dirs)
    }

    fn collect_markers(&mut self, item: &Item, module: &ModulePath, file: &Path) {
        let Some(attrs) = item_attrs(item) else { return };
        for attr in attrs.iter().filter(|a| is_marker(a)) {
            let (name, kind, vis) = describe(item);
            let target = TargetDecl::new(name, module.clone(), kind)
                .with_visibility(vis)
                .with_location(location(file, attr.span()));
            match MarkerArgs::from_attribute(attr) {
                Ok(args) => {
                    debug!(target = %target.qualified_name(), %kind, "marker found");
                    self.scan.uses.push(MarkerUse::new(args, target));
                }
                Err(e) => self.scan.diagnostics.push(
                    Diagnostic::error(
                        DiagnosticKind::InvalidArguments,
                        format!("invalid #[exposed_model] arguments on `{}`: {e}", target.name)
                    )
                    .at(target.location.clone())
                )
            }
        }
    }
}

fn describe(item: &Item) -> (String, DeclKind, Visibility) {
    match item {
        Item::Struct(s) => (unraw(&s.ident), DeclKind::Struct, (&s.vis).into()),
        Item::Enum(e) => (unraw(&e.ident), DeclKind::Enum, (&e.vis).into()),
        Item::Union(u) => (unraw(&u.ident), DeclKind::Union, (&u.vis).into()),
        Item::Trait(t) => (unraw(&t.ident), DeclKind::Trait, (&t.vis).into()),
        Item::TraitAlias(t) => (unraw(&t.ident), DeclKind::Trait, (&t.vis).into()),
        Item::Fn(f) => (unraw(&f.sig.ident), DeclKind::Function, (&f.vis).into()),
        Item::Type(t) => (unraw(&t.ident), DeclKind::TypeAlias, (&t.vis).into()),
        Item::Mod(m) => (unraw(&m.ident), DeclKind::Module, (&m.vis).into()),
        Item::Const(c) => (unraw(&c.ident), DeclKind::Other, (&c.vis).into()),
        Item::Static(s) => (unraw(&s.ident), DeclKind::Other, (&s.vis).into()),
        Item::Impl(i) => {
            let self_ty = &i.self_ty;
            (quote::quote!(#self_ty).to_string(), DeclKind::Impl, Visibility::Private)
        }
        _ => ("<item>".to_owned(), DeclKind::Other, Visibility::Private)
    }
}

fn item_attrs(item: &Item) -> Option<&[Attribute]> {
    let attrs = match item {
        Item::Const(i) => &i.attrs,
        Item::Enum(i) => &i.attrs,
        Item::ExternCrate(i) => &i.attrs,
        Item::Fn(i) => &i.attrs,
        Item::ForeignMod(i) => &i.attrs,
        Item::Impl(i) => &i.attrs,
        Item::Macro(i) => &i.attrs,
        Item::Mod(i) => &i.attrs,
        Item::Static(i) => &i.attrs,
        Item::Struct(i) => &i.attrs,
        Item::Trait(i) => &i.attrs,
        Item::TraitAlias(i) => &i.attrs,
        Item::Type(i) => &i.attrs,
        Item::Union(i) => &i.attrs,
        Item::Use(i) => &i.attrs,
        _ => return None
    };
    Some(attrs)
}

fn is_cfg_test(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| {
        attr.path().is_ident("cfg")
            && matches!(&attr.meta, Meta::List(list) if list.tokens.to_string() == "test")
    })
}

fn path_attr(attrs: &[Attribute]) -> Option<String> {
    attrs.iter().find_map(|attr| match &attr.meta {
        Meta::NameValue(nv) if nv.path.is_ident("path") => match &nv.value {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(s),
                ..
            }) => Some(s.value()),
            _ => None
        },
        _ => None
    })
}

fn location(file: &Path, span: proc_macro2::Span) -> Location {
    let start = span.start();
    Location::new(file, start.line, start.column + 1)
}

fn unraw(ident: &syn::Ident) -> String {
    use syn::ext::IdentExt;
    ident.unraw().to_string()
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}
