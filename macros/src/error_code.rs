//! `#[derive(ErrorCode)]` expansion.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Result};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(Error::new_spanned(
            &input.ident,
            "#[derive(ErrorCode)] supports enums; register other types with `error_code!`",
        ));
    };

    let mut ok_variant = None;
    for variant in &data.variants {
        if !has_ok_marker(&variant.attrs)? {
            continue;
        }
        if ok_variant.is_some() {
            return Err(Error::new_spanned(
                variant,
                "only one variant may be marked #[shape(ok)]",
            ));
        }
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new_spanned(
                variant,
                "the #[shape(ok)] variant must be fieldless",
            ));
        }
        ok_variant = Some(variant.ident.clone());
    }
    let Some(ok_ident) = ok_variant else {
        return Err(Error::new_spanned(
            &input.ident,
            "mark the success variant with #[shape(ok)]",
        ));
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::short_circuit::Fallible for #name #ty_generics #where_clause {
            type CarriesValue = ::short_circuit::Absent;
            type CarriesDetail = ::short_circuit::Present;

            #[inline]
            fn is_failure(&self) -> bool {
                !::core::matches!(self, #name::#ok_ident)
            }
        }

        impl #impl_generics ::short_circuit::DetailCarrying for #name #ty_generics #where_clause {
            type Detail = Self;

            #[inline]
            fn from_detail(detail: Self) -> Self {
                detail
            }

            #[inline]
            fn into_detail(self) -> Self {
                self
            }
        }

        impl #impl_generics ::short_circuit::ErrorCode for #name #ty_generics #where_clause {}
    })
}

fn has_ok_marker(attrs: &[syn::Attribute]) -> Result<bool> {
    for attr in attrs {
        if !attr.path().is_ident("shape") {
            continue;
        }
        let marker: syn::Ident = attr.parse_args()?;
        if marker != "ok" {
            return Err(Error::new_spanned(
                &marker,
                format!("unknown shape marker `{marker}`; expected `ok`"),
            ));
        }
        return Ok(true);
    }
    Ok(false)
}
