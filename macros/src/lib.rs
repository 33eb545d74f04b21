//! Procedural macros for the short-circuit result-shape protocol.
//!
//! # Derives
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(ErrorCode)]` | enum | diagnostic-code adapter for enums with a marked success variant |
//! | `#[derive(ValueCarrying)]` | enum | optional-value adapter for two-variant carriers |
//!
//! Both expand to the same trait impls a manual adapter would write; the
//! declarative `error_code!` macro in the main crate covers foreign and
//! non-enum types.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod error_code;
mod value_shape;

/// Implement the diagnostic-code pattern for an enum.
///
/// The fieldless variant marked `#[shape(ok)]` is the success state;
/// every other variant indicates failure. Generates `Fallible`
/// (detail-carrying only), `DetailCarrying` with `Detail = Self`, and the
/// `ErrorCode` marker.
///
/// # Usage
/// ```ignore
/// #[derive(Debug, PartialEq, ErrorCode)]
/// enum DiskFault {
///     #[shape(ok)]
///     None,
///     NotFound,
///     Corrupt,
/// }
///
/// assert!(DiskFault::Corrupt.is_failure());
/// ```
#[proc_macro_derive(ErrorCode, attributes(shape))]
pub fn derive_error_code(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    error_code::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Implement the optional-value pattern for a two-variant enum.
///
/// One variant carries exactly one unnamed field (the success payload),
/// the other is fieldless (the failure state); which is which is inferred
/// from the fields. Generates `Fallible` (value-carrying only),
/// `ValueCarrying`, and `BareFailure`.
///
/// # Usage
/// ```ignore
/// #[derive(ValueCarrying)]
/// enum Lookup<T> {
///     Hit(T),
///     Miss,
/// }
///
/// assert!(Lookup::<u32>::Miss.is_failure());
/// ```
#[proc_macro_derive(ValueCarrying, attributes(shape))]
pub fn derive_value_carrying(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    value_shape::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
