use std::collections::hash_map::Entry;
use std::collections::HashMap;

use itertools::Itertools;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Error, Fields, Generics, Ident, Variant};

use crate::context::Context;
use crate::util::{deraw, is_string, wire_token};

/// The reserved variant name that receives unmatched wire tokens.
const UNKNOWN_VARIANT: &str = "Unknown";

pub fn expand_from_wire(input: &DeriveInput) -> Result<TokenStream, Vec<Error>> {
    let context = Context::new();

    let constructor = match &input.data {
        Data::Enum(data) => {
            FromWireExpander::new(&context, &input.ident, &input.generics, data).expand()
        }
        Data::Struct(data) => {
            context.error_spanned_by(
                data.struct_token,
                "#[derive(FromWire)] is only supported on enums",
            );
            Err(())
        }
        Data::Union(data) => {
            context.error_spanned_by(
                data.union_token,
                "#[derive(FromWire)] is only supported on enums",
            );
            Err(())
        }
    }
    .unwrap_or_else(|_| quote! {});

    context.check()?;

    Ok(constructor)
}

struct FromWireExpander<'a> {
    context: &'a Context,
    ident: &'a Ident,
    generics: &'a Generics,
    data: &'a DataEnum,
}

impl<'a> FromWireExpander<'a> {
    pub fn new(
        context: &'a Context,
        ident: &'a Ident,
        generics: &'a Generics,
        data: &'a DataEnum,
    ) -> Self {
        Self {
            context,
            ident,
            generics,
            data,
        }
    }

    pub fn expand(&self) -> Result<TokenStream, ()> {
        let fallback = self.expand_fallback_value();
        let match_arms = self.expand_token_match_arms();

        let fallback = fallback?;
        let match_arms = match_arms?;

        // Unused type and lifetime parameters already fail E0392 on the enum
        // itself, but a const parameter is legal without a use, so the impl
        // has to restate the generics to attach.
        let ident = self.ident;
        let (impl_generics, type_generics, where_clause) = self.generics.split_for_impl();
        Ok(quote! {
            impl #impl_generics #ident #type_generics #where_clause {
                /// Maps an optional wire token onto a variant; absent input stays absent
                /// and unmatched tokens land in `Unknown`.
                pub fn from_wire(raw: Option<&str>) -> Option<Self> {
                    let raw = raw?;
                    match raw {
                        #(#match_arms)*
                        _ => Some(#fallback),
                    }
                }
            }
        })
    }

    /// Builds the expression the no-match arm constructs: the `Unknown`
    /// variant, carrying the raw token when it declares a `String` payload.
    fn expand_fallback_value(&self) -> Result<TokenStream, ()> {
        let variant = self
            .data
            .variants
            .iter()
            .find(|v| deraw(&v.ident) == UNKNOWN_VARIANT);
        let variant = match variant {
            Some(v) => v,
            None => {
                self.context.error_spanned_by(
                    self.ident,
                    "deriving `FromWire` requires an `Unknown` variant",
                );
                return Err(());
            }
        };

        let ident = &variant.ident;
        match &variant.fields {
            Fields::Unit => Ok(quote! { Self::#ident }),
            Fields::Unnamed(fields) => {
                if fields.unnamed.len() > 1 {
                    self.context.error_spanned_by(
                        fields,
                        "the `Unknown` variant must carry at most one field",
                    );
                    return Err(());
                }
                match fields.unnamed.first() {
                    None => Ok(quote! { Self::#ident() }),
                    Some(field) if is_string(&field.ty) => {
                        Ok(quote! { Self::#ident(raw.to_owned()) })
                    }
                    Some(field) => {
                        self.context.error_spanned_by(
                            &field.ty,
                            "the `Unknown` variant field must be a `String`",
                        );
                        Err(())
                    }
                }
            }
            Fields::Named(fields) => {
                if fields.named.len() > 1 {
                    self.context.error_spanned_by(
                        fields,
                        "the `Unknown` variant must carry at most one field",
                    );
                    return Err(());
                }
                match fields.named.first() {
                    None => Ok(quote! { Self::#ident {} }),
                    Some(field) if is_string(&field.ty) => {
                        let name = field.ident.as_ref().unwrap();
                        Ok(quote! { Self::#ident { #name: raw.to_owned() } })
                    }
                    Some(field) => {
                        self.context.error_spanned_by(
                            &field.ty,
                            "the `Unknown` variant field must be a `String`",
                        );
                        Err(())
                    }
                }
            }
        }
    }

    /// Builds one match arm per non-`Unknown` variant, in declaration order.
    fn expand_token_match_arms(&self) -> Result<Vec<TokenStream>, ()> {
        let variants = self
            .data
            .variants
            .iter()
            .filter(|v| deraw(&v.ident) != UNKNOWN_VARIANT)
            .collect_vec();

        let mut arms = Vec::with_capacity(variants.len());
        let mut claimed: HashMap<String, &Ident> = HashMap::new();
        let mut failed = false;

        for variant in variants {
            let constructor = match self.unit_constructor(variant) {
                Ok(v) => v,
                Err(()) => {
                    failed = true;
                    continue;
                }
            };

            let token = wire_token(&deraw(&variant.ident));
            match claimed.entry(token) {
                Entry::Occupied(entry) => {
                    self.context.error_spanned_by(
                        &variant.ident,
                        format!(
                            "wire token `{}` is already used by variant `{}`",
                            entry.key(),
                            entry.get()
                        ),
                    );
                    failed = true;
                    continue;
                }
                Entry::Vacant(entry) => {
                    let token = entry.key().clone();
                    entry.insert(&variant.ident);
                    arms.push(quote! { #token => Some(#constructor), });
                }
            }
        }

        if failed {
            Err(())
        } else {
            Ok(arms)
        }
    }

    fn unit_constructor(&self, variant: &'a Variant) -> Result<TokenStream, ()> {
        if !variant.fields.is_empty() {
            self.context
                .error_spanned_by(variant, "only the `Unknown` variant may carry fields");
            return Err(());
        }

        let ident = &variant.ident;
        Ok(match &variant.fields {
            Fields::Unit => quote! { Self::#ident },
            Fields::Unnamed(_) => quote! { Self::#ident() },
            Fields::Named(_) => quote! { Self::#ident {} },
        })
    }
}
