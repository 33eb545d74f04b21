//! `Result` adapter.
//!
//! `Result<T, E>` carries both capabilities for any `E`: the variants keep
//! payload and diagnostic in disjoint states, so neither construction nor
//! extraction needs a stand-in value and no bound on `E` is required.

use crate::presence::Present;
use crate::shape::{DetailCarrying, Fallible, ValueCarrying};

impl<T, E> Fallible for Result<T, E> {
    type CarriesValue = Present;
    type CarriesDetail = Present;

    #[inline]
    fn is_failure(&self) -> bool {
        self.is_err()
    }
}

impl<T, E> ValueCarrying for Result<T, E> {
    type Value = T;

    #[inline]
    fn into_value(self) -> T {
        match self {
            Ok(value) => value,
            Err(_) => unreachable!("into_value on an Err"),
        }
    }
}

impl<T, E> DetailCarrying for Result<T, E> {
    type Detail = E;

    #[inline]
    fn from_detail(detail: E) -> Self {
        Err(detail)
    }

    #[inline]
    fn into_detail(self) -> E {
        match self {
            Err(detail) => detail,
            Ok(_) => unreachable!("into_detail on an Ok"),
        }
    }
}
