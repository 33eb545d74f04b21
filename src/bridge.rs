//! # Conversion Bridge
//!
//! Re-expresses a failing value of one shape as a failing value of
//! another. Invoked by [`check!`](crate::check) exactly once per
//! propagated failure, at the early-return point, against the enclosing
//! function's declared return shape.
//!
//! The direction of the conversion is decided by the *destination*:
//!
//! - destination carries detail → the source must too; its diagnostic is
//!   moved across (through [`Into`], so a chain may also translate between
//!   code types);
//! - destination is detail-less → the failure is rebuilt bare and whatever
//!   diagnostic the source held is dropped. This narrowing is the only
//!   lossy path.
//!
//! Widening, conjuring a diagnostic the source never had, has no impl
//! and does not compile:
//!
//! ```compile_fail
//! use short_circuit::{Errno, FromFailure};
//!
//! // Option carries no diagnostic to feed an Errno.
//! let code: Errno = FromFailure::from_failure(None::<u32>);
//! ```

use crate::presence::{Absent, Present};
use crate::shape::{BareFailure, DetailCarrying, Fallible};

// =============================================================================
// Dispatch on the destination's detail capability
// =============================================================================

/// Selects the conversion strategy for one (Src, Dst) edge.
///
/// Implemented for [`Present`] and [`Absent`]; the bridge picks the impl
/// matching `Dst::CarriesDetail`, so "which strategy" is settled during
/// trait resolution and each edge compiles to a direct constructor call.
#[diagnostic::on_unimplemented(
    message = "a failure of `{Src}` cannot be re-expressed as `{Dst}`",
    label = "the destination shape demands a diagnostic the source cannot provide",
    note = "narrowing (dropping detail) is always permitted; widening (inventing detail) never is"
)]
pub trait ConvertDispatch<Src, Dst> {
    fn convert(src: Src) -> Dst;
}

impl<Src, Dst> ConvertDispatch<Src, Dst> for Present
where
    Src: DetailCarrying,
    Dst: DetailCarrying,
    Src::Detail: Into<Dst::Detail>,
{
    #[inline]
    fn convert(src: Src) -> Dst {
        Dst::from_detail(src.into_detail().into())
    }
}

impl<Src, Dst> ConvertDispatch<Src, Dst> for Absent
where
    Src: Fallible,
    Dst: BareFailure,
{
    #[inline]
    fn convert(src: Src) -> Dst {
        // Whatever diagnostic `src` held stops here.
        drop(src);
        Dst::bare_failure()
    }
}

// =============================================================================
// FromFailure / IntoFailure
// =============================================================================

/// Build a failing `Self` out of a failing value of another shape.
///
/// Derived for every pair of shapes with a legal conversion edge; not
/// meant to be implemented directly. To customize how diagnostics travel,
/// provide `Into` between the detail types.
pub trait FromFailure<Src>: Sized {
    fn from_failure(src: Src) -> Self;
}

impl<Src, Dst> FromFailure<Src> for Dst
where
    Src: Fallible,
    Dst: Fallible,
    Dst::CarriesDetail: ConvertDispatch<Src, Dst>,
{
    #[inline]
    fn from_failure(src: Src) -> Dst {
        debug_assert!(src.is_failure(), "from_failure on a non-failing value");
        <Dst::CarriesDetail as ConvertDispatch<Src, Dst>>::convert(src)
    }
}

/// Mirror image of [`FromFailure`], for call chains that read better
/// source-first.
pub trait IntoFailure<Dst> {
    fn into_failure(self) -> Dst;
}

impl<Src, Dst> IntoFailure<Dst> for Src
where
    Dst: FromFailure<Src>,
{
    #[inline]
    fn into_failure(self) -> Dst {
        Dst::from_failure(self)
    }
}
