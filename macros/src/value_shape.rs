//! `#[derive(ValueCarrying)]` expansion.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Ident, Result, Type};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(Error::new_spanned(
            &input.ident,
            "#[derive(ValueCarrying)] supports enums with one carrying and one fieldless variant",
        ));
    };

    // Which variant is which is inferred from the fields: the single
    // unnamed field is the payload, the fieldless variant the failure.
    let mut success: Option<(&Ident, &Type)> = None;
    let mut failure: Option<&Ident> = None;
    for variant in &data.variants {
        match &variant.fields {
            Fields::Unit => {
                if failure.replace(&variant.ident).is_some() {
                    return Err(Error::new_spanned(
                        variant,
                        "a second fieldless variant makes the failure state ambiguous",
                    ));
                }
            }
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                let field = fields.unnamed.first().expect("length checked above");
                if success.replace((&variant.ident, &field.ty)).is_some() {
                    return Err(Error::new_spanned(
                        variant,
                        "a second carrying variant makes the success state ambiguous",
                    ));
                }
            }
            _ => {
                return Err(Error::new_spanned(
                    variant,
                    "each variant must be fieldless or carry exactly one unnamed field",
                ));
            }
        }
    }
    let (Some((success_ident, value_ty)), Some(failure_ident)) = (success, failure) else {
        return Err(Error::new_spanned(
            &input.ident,
            "#[derive(ValueCarrying)] expects one carrying variant and one fieldless variant",
        ));
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::short_circuit::Fallible for #name #ty_generics #where_clause {
            type CarriesValue = ::short_circuit::Present;
            type CarriesDetail = ::short_circuit::Absent;

            #[inline]
            fn is_failure(&self) -> bool {
                ::core::matches!(self, #name::#failure_ident)
            }
        }

        impl #impl_generics ::short_circuit::ValueCarrying for #name #ty_generics #where_clause {
            type Value = #value_ty;

            #[inline]
            fn into_value(self) -> #value_ty {
                match self {
                    #name::#success_ident(value) => value,
                    #name::#failure_ident => {
                        ::core::unreachable!("into_value on a failing value")
                    }
                }
            }
        }

        impl #impl_generics ::short_circuit::BareFailure for #name #ty_generics #where_clause {
            #[inline]
            fn bare_failure() -> Self {
                #name::#failure_ident
            }
        }
    })
}
