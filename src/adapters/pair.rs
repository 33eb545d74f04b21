//! Value/diagnostic pair adapter.
//!
//! C-flavored APIs hand back a value and a status code side by side:
//! `(bytes_read, errno)`, `(handle, status)`. The pair `(T, E)` is both
//! value-carrying (first element) and detail-carrying (second element),
//! with failure decided by the code's own predicate.
//!
//! The diagnostic slot is restricted to [`ErrorCode`] types. A code is
//! value-less by definition, so a pair can never sit in another pair's
//! diagnostic slot; classification stays non-recursive. `T: Default`
//! because rebuilding a failing pair from a diagnostic alone needs a
//! stand-in first element.

use crate::presence::Present;
use crate::shape::{DetailCarrying, ErrorCode, Fallible, ValueCarrying};

impl<T: Default, E: ErrorCode> Fallible for (T, E) {
    type CarriesValue = Present;
    type CarriesDetail = Present;

    #[inline]
    fn is_failure(&self) -> bool {
        self.1.is_failure()
    }
}

impl<T: Default, E: ErrorCode> ValueCarrying for (T, E) {
    type Value = T;

    #[inline]
    fn into_value(self) -> T {
        self.0
    }
}

impl<T: Default, E: ErrorCode> DetailCarrying for (T, E) {
    type Detail = E;

    #[inline]
    fn from_detail(detail: E) -> Self {
        (T::default(), detail)
    }

    #[inline]
    fn into_detail(self) -> E {
        self.1
    }
}
