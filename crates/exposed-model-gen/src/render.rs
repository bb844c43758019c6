// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Source text of one generated unit.
//!
//! For `#[exposed_model(mapping_root = "notes")] pub struct Note` in
//! `crate::model` the rendered file reads:
//!
//! ```rust,ignore
//! // @generated by exposed-model-gen from `crate::model::Note`. Do not edit.
//!
//! use crate::model::Note;
//! use exposed_model::{CrudApiController, MongoRepository, RestController};
//!
//! #[allow(non_camel_case_types)]
//! pub trait Note_MongoRepo: MongoRepository<Note, String> {}
//!
//! impl<R> Note_MongoRepo for R where R: MongoRepository<Note, String> {}
//!
//! #[allow(non_camel_case_types)]
//! pub struct Note_CrudApi<R: Note_MongoRepo>(CrudApiController<Note, R>);
//!
//! // new / into_inner / Clone / Deref ...
//!
//! impl<R: Note_MongoRepo + 'static> RestController for Note_CrudApi<R> {
//!     const REQUEST_MAPPING: &'static str = "notes";
//!     fn routes(self) -> exposed_model::web::Router { self.0.routes() }
//! }
//! ```
//!
//! With `expose_web_api = false` the `RestController` import and impl are
//! left out, so the file contains no routing and no mapping root.
//!
//! The file holds `use` items, so each one is meant to be `include!`d into a
//! module of its own.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Ident, Path};

use crate::{GenError, marker::MarkerArgs, naming::UnitNames, target::TargetDecl};

/// Path of the runtime crate used when none is configured.
pub const DEFAULT_RUNTIME_CRATE: &str = "exposed_model";

/// Rendering knobs shared by all units of a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Crate the generated code imports runtime types from.
    pub runtime_crate: String
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            runtime_crate: DEFAULT_RUNTIME_CRATE.to_owned()
        }
    }
}

/// Everything needed to render one unit.
#[derive(Debug, Clone, Copy)]
pub struct UnitSpec<'a> {
    /// Marked struct.
    pub target: &'a TargetDecl,
    /// Its marker arguments.
    pub args:   &'a MarkerArgs,
    /// Derived names.
    pub names:  &'a UnitNames
}

/// Render the formatted source of one unit.
///
/// Pure: identical input gives byte-identical output.
///
/// # Errors
///
/// [`GenError::Render`] when the runtime crate, the target or a derived name
/// does not form valid Rust.
pub fn render(spec: UnitSpec<'_>, options: &RenderOptions) -> Result<String, GenError> {
    let qualified = spec.target.qualified_name();
    let fail = |reason: String| GenError::Render {
        target: qualified.clone(),
        reason
    };

    let runtime: Path = syn::parse_str(&options.runtime_crate)
        .map_err(|e| fail(format!("runtime crate `{}`: {e}", options.runtime_crate)))?;
    let modules = spec
        .target
        .module
        .segments()
        .iter()
        .map(|segment| ident(segment))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| fail(format!("target path: {e}")))?;
    let target = ident(&spec.target.name).map_err(&fail)?;
    let target_path = quote! { crate #(:: #modules)* :: #target };
    let repo = ident(&spec.names.repository).map_err(&fail)?;
    let api = ident(&spec.names.controller).map_err(&fail)?;

    let tokens = unit_tokens(&UnitTokens {
        runtime: &runtime,
        target_path: &target_path,
        target: &target,
        repo: &repo,
        api: &api,
        public: spec.target.is_public(),
        mapping_root: spec.args.expose_web_api.then_some(spec.args.mapping_root.as_str())
    });

    let file: syn::File =
        syn::parse2(tokens).map_err(|e| fail(format!("generated tokens: {e}")))?;
    Ok(format!(
        "// @generated by exposed-model-gen from `{qualified}`. Do not edit.\n\n{}",
        prettyplease::unparse(&file)
    ))
}

struct UnitTokens<'a> {
    runtime:      &'a Path,
    target_path:  &'a TokenStream,
    target:       &'a Ident,
    repo:         &'a Ident,
    api:          &'a Ident,
    public:       bool,
    mapping_root: Option<&'a str>
}

fn unit_tokens(unit: &UnitTokens<'_>) -> TokenStream {
    let UnitTokens {
        runtime,
        target_path,
        target,
        repo,
        api,
        public,
        mapping_root
    } = unit;

    let vis = if *public {
        quote! { pub }
    } else {
        quote! { pub(crate) }
    };

    let routing_import = mapping_root.map(|_| quote! { , RestController });
    let routing = mapping_root.map(|root| {
        quote! {
            impl<R: #repo + 'static> RestController for #api<R> {
                const REQUEST_MAPPING: &'static str = #root;

                fn routes(self) -> #runtime::web::Router {
                    self.0.routes()
                }
            }
        }
    });

    quote! {
        use #target_path;
        use #runtime::{CrudApiController, MongoRepository #routing_import};

        #[allow(non_camel_case_types)]
        #vis trait #repo: MongoRepository<#target, String> {}

        impl<R> #repo for R where R: MongoRepository<#target, String> {}

        #[allow(non_camel_case_types)]
        #vis struct #api<R: #repo>(CrudApiController<#target, R>);

        impl<R: #repo> #api<R> {
            #vis fn new(repository: R) -> Self {
                Self(CrudApiController::new(repository))
            }

            #vis fn into_inner(self) -> CrudApiController<#target, R> {
                self.0
            }
        }

        impl<R: #repo> ::core::clone::Clone for #api<R> {
            fn clone(&self) -> Self {
                Self(self.0.clone())
            }
        }

        impl<R: #repo> ::core::ops::Deref for #api<R> {
            type Target = CrudApiController<#target, R>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        #routing
    }
}

fn ident(name: &str) -> Result<Ident, String> {
    if name.is_empty() {
        return Err("empty identifier".to_owned());
    }
    syn::parse_str::<Ident>(name).or_else(|_| {
        syn::parse_str::<Ident>(&format!("r#{name}"))
            .map(|_| Ident::new_raw(name, Span::call_site()))
            .map_err(|e| format!("`{name}` is not an identifier: {e}"))
    })
}
