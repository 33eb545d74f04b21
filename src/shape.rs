//! # Shape Classification
//!
//! The trait family that classifies a type as a result shape and names the
//! operations each capability supports.
//!
//! ## How It Works
//!
//! A *result shape* is any type whose values encode a success-or-failure
//! outcome. Classification assigns two independent capabilities:
//!
//! - **value-carrying**: success embeds an extractable payload
//!   (`Option<T>` holds a `T`, a pair holds its first element);
//! - **detail-carrying**: failure embeds an extractable diagnostic
//!   (a bare status code is its own diagnostic, a pair holds one in its
//!   second element).
//!
//! A shape may have one capability or both, never neither: [`Fallible`]
//! requires `CarriesValue OR CarriesDetail = Present`, so an impl claiming
//! neither is rejected while it is being compiled.
//!
//! Detection is ordinary trait coherence. There is no registry and nothing
//! to run: a type is a result shape wherever its impls are visible, and a
//! type without impls fails to build at the use site.
//!
//! ## Extending
//!
//! ```ignore
//! struct Slot<T> { taken: bool, value: T }
//!
//! impl<T: Default> Fallible for Slot<T> {
//!     type CarriesValue = Present;
//!     type CarriesDetail = Absent;
//!     fn is_failure(&self) -> bool { self.taken }
//! }
//! ```
//!
//! plus `ValueCarrying`/`DetailCarrying`/`BareFailure` as the shape
//! supports them. The four operations are the entire contract; nothing
//! else about the type's internals is assumed.

use crate::presence::{Absent, Bool, BoolOr, Present};

// =============================================================================
// Base Classification
// =============================================================================

/// A type whose values encode a success-or-failure outcome.
///
/// The two associated booleans are the shape's classification record; the
/// predicate is the only runtime operation every shape must provide.
///
/// Implementations must uphold: [`is_failure`](Self::is_failure) is pure
/// (no side effects, stable answer for an unmoved value), and at least one
/// of `CarriesValue`/`CarriesDetail` is [`Present`] (enforced by the
/// `BoolOr` bound).
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a result shape",
    label = "neither value-carrying nor detail-carrying",
    note = "implement `Fallible` plus `ValueCarrying` and/or `DetailCarrying` for `{Self}`, or register it with `error_code!` / `#[derive(ErrorCode)]` / `#[derive(ValueCarrying)]`"
)]
pub trait Fallible {
    /// [`Present`] iff the success state holds an extractable payload.
    type CarriesValue: Bool + BoolOr<Self::CarriesDetail, Out = Present>;

    /// [`Present`] iff the failure state holds an extractable diagnostic.
    type CarriesDetail: Bool;

    /// Does this value represent a failure?
    fn is_failure(&self) -> bool;
}

// =============================================================================
// Capabilities
// =============================================================================

/// Success embeds a payload that can be moved out.
///
/// `into_value` may only be called on a value whose
/// [`is_failure`](Fallible::is_failure) is false; the [`check!`](crate::check)
/// construct guarantees this, manual callers must.
pub trait ValueCarrying: Fallible<CarriesValue = Present> + Sized {
    /// The embedded success payload.
    type Value;

    /// Move the success payload out.
    fn into_value(self) -> Self::Value;
}

/// Failure embeds a diagnostic that can be moved out, and a failing value
/// can be rebuilt from a diagnostic alone.
pub trait DetailCarrying: Fallible<CarriesDetail = Present> + Sized {
    /// The embedded diagnostic.
    type Detail;

    /// Build a failing value carrying `detail`.
    fn from_detail(detail: Self::Detail) -> Self;

    /// Move the diagnostic out of a failing value.
    ///
    /// May only be called on a value whose [`is_failure`](Fallible::is_failure)
    /// is true.
    fn into_detail(self) -> Self::Detail;
}

/// A failing value can be built with no diagnostic at all.
///
/// Only detail-less shapes qualify; their failure state *is* the absence of
/// a payload, so there is nothing to supply. This is the constructor the
/// conversion bridge calls on its lossy (narrowing) path.
pub trait BareFailure: Fallible<CarriesDetail = Absent> + Sized {
    /// Build the failing value.
    fn bare_failure() -> Self;
}

/// Marker for bare diagnostic codes: a shape that *is* its own diagnostic.
///
/// The supertrait bounds pin down the whole pattern: `Detail = Self`
/// (identity construction and extraction) and `CarriesValue = Absent`
/// (a code never holds a success payload). The pair adapter accepts only
/// `ErrorCode` diagnostics; keeping codes value-less is what stops a pair
/// from ever qualifying as the diagnostic of another pair.
pub trait ErrorCode: DetailCarrying<Detail = Self> + Fallible<CarriesValue = Absent> {}

// =============================================================================
// Classification Queries
// =============================================================================

/// Does `T`'s success state hold an extractable payload?
#[inline]
pub const fn carries_value<T: Fallible>() -> bool {
    <T::CarriesValue as Bool>::VALUE
}

/// Does `T`'s failure state hold an extractable diagnostic?
#[inline]
pub const fn carries_detail<T: Fallible>() -> bool {
    <T::CarriesDetail as Bool>::VALUE
}

/// Is `T` a result shape at all?
///
/// True for every type that compiles against [`Fallible`]; exposed so the
/// classification record can be asserted as data.
#[inline]
pub const fn is_result_shape<T: Fallible>() -> bool {
    carries_value::<T>() || carries_detail::<T>()
}
