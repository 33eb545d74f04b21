//! Optional-value adapter.
//!
//! `Option<T>` is the canonical value-carrying-only shape: success holds a
//! `T`, failure is the empty container, and there is no diagnostic in
//! either state.

use crate::presence::{Absent, Present};
use crate::shape::{BareFailure, Fallible, ValueCarrying};

impl<T> Fallible for Option<T> {
    type CarriesValue = Present;
    type CarriesDetail = Absent;

    #[inline]
    fn is_failure(&self) -> bool {
        self.is_none()
    }
}

impl<T> ValueCarrying for Option<T> {
    type Value = T;

    #[inline]
    fn into_value(self) -> T {
        match self {
            Some(value) => value,
            None => unreachable!("into_value on an empty Option"),
        }
    }
}

impl<T> BareFailure for Option<T> {
    #[inline]
    fn bare_failure() -> Self {
        None
    }
}
