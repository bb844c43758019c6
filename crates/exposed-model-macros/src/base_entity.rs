// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[derive(BaseEntity)]` implementation.
//!
//! For
//!
//! ```rust,ignore
//! #[derive(BaseEntity)]
//! pub struct TransactionLongform {
//!     pub id: Option<String>,
//!     pub amount: i64
//! }
//! ```
//!
//! generates
//!
//! ```rust,ignore
//! impl ::exposed_model::BaseEntity for TransactionLongform {
//!     const COLLECTION: &'static str = "transactionLongform";
//!     fn id(&self) -> Option<&str> { self.id.as_deref() }
//!     fn set_id(&mut self, id: String) { self.id = Some(id); }
//! }
//! ```

mod parse;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::EntityDef;

/// Main entry point for the BaseEntity derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(input: &DeriveInput) -> darling::Result<TokenStream2> {
    let entity = EntityDef::from_derive_input(input)?;

    let EntityDef {
        ident,
        generics,
        id_field,
        collection,
        krate
    } = &entity;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #krate::BaseEntity for #ident #ty_generics #where_clause {
            const COLLECTION: &'static str = #collection;

            fn id(&self) -> ::core::option::Option<&str> {
                self.#id_field.as_deref()
            }

            fn set_id(&mut self, id: ::std::string::String) {
                self.#id_field = ::core::option::Option::Some(id);
            }
        }
    })
}
