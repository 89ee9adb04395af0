//! Implementation of the `#[derive(Named)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Index, Member, Path, parse_macro_input};

const ATTRIBUTE: &str = "named";

/// Main implementation of the Named derive macro.
pub fn derive_named_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match expand(&input) {
        Ok(tokens) => tokens,
        Err(error) => error.to_compile_error(),
    };

    TokenStream::from(expanded)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let fields = match &input.data {
        Data::Struct(data_struct) => &data_struct.fields,
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Named can only be derived for structs, not enums.",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Named cannot be derived for unions.",
            ));
        }
    };

    let member = name_member(name, fields)?;
    let equals = equals_override(&input.attrs)?;

    let equals_body = equals.map_or_else(
        || quote! { ::sortkit::named::Named::names_equal(self, other) },
        |path| quote! { #path(self, other) },
    );

    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::sortkit::named::Named for #name #type_generics #where_clause {
            #[inline]
            fn name(&self) -> &str {
                ::core::convert::AsRef::<str>::as_ref(&self.#member)
            }
        }

        impl #impl_generics ::sortkit::comparable::Comparable for #name #type_generics #where_clause {
            #[inline]
            fn compare_to(&self, other: &Self) -> ::core::cmp::Ordering {
                ::sortkit::named::Named::compare_names(self, other)
            }

            #[inline]
            fn equals(&self, other: &Self) -> bool {
                #equals_body
            }
        }
    })
}

/// Finds the field holding the name: the one marked `#[named]`, or else the
/// one called `name`.
fn name_member(name: &syn::Ident, fields: &Fields) -> syn::Result<Member> {
    let mut marked = fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.attrs.iter().any(is_named_attribute));

    if let Some((index, field)) = marked.next() {
        if let Some((_, duplicate)) = marked.next() {
            return Err(syn::Error::new_spanned(
                duplicate,
                "only one field can be marked #[named]",
            ));
        }
        return Ok(field.ident.clone().map_or_else(
            || Member::Unnamed(Index::from(index)),
            Member::Named,
        ));
    }

    fields
        .iter()
        .find_map(|field| field.ident.as_ref().filter(|ident| *ident == "name"))
        .map(|ident| Member::Named(ident.clone()))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                name,
                "Named requires a field called `name` or a field marked #[named].",
            )
        })
}

fn is_named_attribute(attribute: &Attribute) -> bool {
    attribute.path().is_ident(ATTRIBUTE)
}

/// Reads `#[named(equals = path)]` from the struct's attributes.
fn equals_override(attributes: &[Attribute]) -> syn::Result<Option<Path>> {
    let mut equals = None;

    for attribute in attributes.iter().filter(|attribute| is_named_attribute(attribute)) {
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("equals") {
                equals = Some(meta.value()?.parse::<Path>()?);
                Ok(())
            } else {
                Err(meta.error("unsupported named attribute, expected `equals = path`"))
            }
        })?;
    }

    Ok(equals)
}
