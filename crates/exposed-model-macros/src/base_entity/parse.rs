// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for `#[derive(BaseEntity)]`.

use convert_case::{Case, Casing};
use darling::{FromDeriveInput, FromField, ast::Data, util::Ignored};
use syn::{DeriveInput, GenericArgument, Generics, Ident, PathArguments, Type};

/// Default runtime crate path used in generated impls.
fn default_crate() -> syn::Path {
    syn::parse_quote!(::exposed_model)
}

/// Struct-level attributes parsed from `#[entity(...)]`.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(entity))]
struct EntityAttrs {
    ident:      Ident,
    generics:   Generics,
    data:       Data<Ignored, EntityField>,
    #[darling(default)]
    collection: Option<String>,
    #[darling(rename = "crate", default = "default_crate")]
    krate:      syn::Path
}

#[derive(Debug, FromField)]
#[darling(forward_attrs(id))]
struct EntityField {
    ident: Option<Ident>,
    ty:    Type,
    attrs: Vec<syn::Attribute>
}

/// Parsed entity ready for generation.
#[derive(Debug)]
pub struct EntityDef {
    pub ident:      Ident,
    pub generics:   Generics,
    pub id_field:   Ident,
    pub collection: String,
    pub krate:      syn::Path
}

impl EntityDef {
    /// Parse from derive input.
    ///
    /// # Errors
    ///
    /// - not a struct with named fields
    /// - no `#[id]` field and no field named `id`
    /// - more than one `#[id]` field
    /// - id field not typed `Option<String>`
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        check_shape(input)?;
        let attrs = EntityAttrs::from_derive_input(input)?;

        let fields = match attrs.data {
            Data::Struct(fields) => fields.fields,
            Data::Enum(_) => {
                return Err(darling::Error::custom("BaseEntity can only be derived for structs")
                    .with_span(&attrs.ident));
            }
        };

        let marked: Vec<&EntityField> = fields.iter().filter(|f| !f.attrs.is_empty()).collect();
        let id = match marked.as_slice() {
            [single] => *single,
            [] => fields
                .iter()
                .find(|f| f.ident.as_ref().is_some_and(|i| i == "id"))
                .ok_or_else(|| {
                    darling::Error::custom(
                        "BaseEntity requires an `id: Option<String>` field or a field marked #[id]"
                    )
                    .with_span(&attrs.ident)
                })?,
            [_, second, ..] => {
                return Err(darling::Error::custom("only one field can be marked #[id]")
                    .with_span(&second.attrs[0]));
            }
        };

        if !is_option_string(&id.ty) {
            return Err(darling::Error::custom("the id field must be `Option<String>`").with_span(&id.ty));
        }

        let id_field = id
            .ident
            .clone()
            .ok_or_else(|| darling::Error::custom("id field must be named").with_span(&attrs.ident))?;
        let collection = attrs
            .collection
            .unwrap_or_else(|| attrs.ident.to_string().to_case(Case::Camel));

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            id_field,
            collection,
            krate: attrs.krate
        })
    }
}

/// Only structs with named fields, errors point at the type name.
fn check_shape(input: &DeriveInput) -> darling::Result<()> {
    match &input.data {
        syn::Data::Struct(data) if matches!(data.fields, syn::Fields::Named(_)) => Ok(()),
        syn::Data::Struct(_) => Err(darling::Error::custom(
            "BaseEntity requires a struct with named fields"
        )
        .with_span(&input.ident)),
        syn::Data::Enum(_) | syn::Data::Union(_) => {
            Err(darling::Error::custom("BaseEntity can only be derived for structs")
                .with_span(&input.ident))
        }
    }
}

/// Whether `ty` reads as `Option<String>` (any path prefix).
fn is_option_string(ty: &Type) -> bool {
    let Some(option) = last_segment(ty) else {
        return false;
    };
    if option.ident != "Option" {
        return false;
    }
    let PathArguments::AngleBracketed(args) = &option.arguments else {
        return false;
    };
    match args.args.iter().collect::<Vec<_>>().as_slice() {
        [GenericArgument::Type(inner)] => {
            last_segment(inner).is_some_and(|s| s.ident == "String" && s.arguments.is_none())
        }
        _ => false
    }
}

fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    match ty {
        Type::Path(path) if path.qself.is_none() => path.path.segments.last(),
        _ => None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: DeriveInput) -> darling::Result<EntityDef> {
        EntityDef::from_derive_input(&input)
    }

    #[test]
    fn default_collection_is_lower_camel() {
        let entity = parse(syn::parse_quote! {
            struct TransactionLongform {
                id: Option<String>,
                amount: i64,
            }
        })
        .unwrap();
        assert_eq!(entity.collection, "transactionLongform");
        assert_eq!(entity.id_field, "id");
    }

    #[test]
    fn marked_field_wins_over_named_id() {
        let entity = parse(syn::parse_quote! {
            struct Note {
                id: i64,
                #[id]
                object_id: Option<std::string::String>,
            }
        })
        .unwrap();
        assert_eq!(entity.id_field, "object_id");
    }

    #[test]
    fn missing_id_is_error() {
        let err = parse(syn::parse_quote! {
            struct Note {
                title: String,
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("requires an `id: Option<String>` field"));
    }

    #[test]
    fn two_marked_fields_is_error() {
        let err = parse(syn::parse_quote! {
            struct Note {
                #[id]
                a: Option<String>,
                #[id]
                b: Option<String>,
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("only one field"));
    }

    #[test]
    fn wrong_id_type_is_error() {
        let err = parse(syn::parse_quote! {
            struct Note {
                id: String,
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("must be `Option<String>`"));
    }

    #[test]
    fn tuple_struct_is_error() {
        let err = parse(syn::parse_quote! {
            struct Note(Option<String>);
        })
        .unwrap_err();
        assert!(err.to_string().contains("named fields"));
    }

    #[test]
    fn enum_is_error() {
        let err = parse(syn::parse_quote! {
            enum Status {
                Active,
                Archived,
            }
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "BaseEntity can only be derived for structs");
    }

    #[test]
    fn option_string_detection() {
        let yes: Type = syn::parse_quote!(Option<String>);
        let qualified: Type = syn::parse_quote!(::core::option::Option<::std::string::String>);
        let no: Type = syn::parse_quote!(Option<i64>);
        let bare: Type = syn::parse_quote!(String);
        assert!(is_option_string(&yes));
        assert!(is_option_string(&qualified));
        assert!(!is_option_string(&no));
        assert!(!is_option_string(&bare));
    }
}
