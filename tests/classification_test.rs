//! Classification soundness against the built-in shape matrix.
//!
//! | Shape          | carries value | carries detail |
//! |----------------|---------------|----------------|
//! | `Option<T>`    | yes           | no             |
//! | code           | no            | yes            |
//! | `(T, E)` pair  | yes           | yes            |
//! | `Result<T, E>` | yes           | yes            |

use short_circuit::{
    BareFailure, DetailCarrying, Errno, Fallible, ValueCarrying, carries_detail, carries_value,
    is_result_shape,
};
use static_assertions::{assert_impl_all, assert_not_impl_any};

// =============================================================================
// Option: value-carrying only
// =============================================================================

const _: () = {
    assert!(carries_value::<Option<u32>>());
    assert!(!carries_detail::<Option<u32>>());
    assert!(is_result_shape::<Option<u32>>());
};

assert_impl_all!(Option<String>: ValueCarrying, BareFailure);
assert_not_impl_any!(Option<String>: DetailCarrying);

// =============================================================================
// Codes: detail-carrying only
// =============================================================================

const _: () = {
    assert!(!carries_value::<Errno>());
    assert!(carries_detail::<Errno>());
    assert!(is_result_shape::<Errno>());
};

assert_impl_all!(Errno: DetailCarrying);
assert_not_impl_any!(Errno: ValueCarrying, BareFailure);

// =============================================================================
// Pairs: both
// =============================================================================

const _: () = {
    assert!(carries_value::<(String, Errno)>());
    assert!(carries_detail::<(String, Errno)>());
};

assert_impl_all!((u64, Errno): ValueCarrying, DetailCarrying);
assert_not_impl_any!((u64, Errno): BareFailure);

// A pair can never sit in another pair's diagnostic slot.
assert_not_impl_any!((u8, (u8, Errno)): Fallible);

// =============================================================================
// Result: both
// =============================================================================

const _: () = {
    assert!(carries_value::<Result<u8, Errno>>());
    assert!(carries_detail::<Result<u8, Errno>>());
};

assert_impl_all!(Result<u8, Errno>: ValueCarrying, DetailCarrying);

// =============================================================================
// Runtime predicates agree with the matrix
// =============================================================================

#[test]
fn failure_predicates_match_the_matrix() {
    assert!(None::<u32>.is_failure());
    assert!(!Some(1).is_failure());

    assert!(Errno(5).is_failure());
    assert!(!Errno::OK.is_failure());

    assert!((0u64, Errno(5)).is_failure());
    assert!(!(7u64, Errno::OK).is_failure());

    assert!(Err::<u8, Errno>(Errno(5)).is_failure());
    assert!(!Ok::<u8, Errno>(3).is_failure());
}

#[cfg(all(feature = "std", unix))]
#[test]
fn exit_status_is_a_code() {
    use std::process::Command;

    let ok = Command::new("true").status().expect("spawn true");
    let bad = Command::new("false").status().expect("spawn false");

    assert!(carries_detail::<std::process::ExitStatus>());
    assert!(!ok.is_failure());
    assert!(bad.is_failure());
}

// =============================================================================
// Idempotence: same answers in a different translation context
// =============================================================================

mod second_context {
    use short_circuit::{Errno, carries_detail, carries_value};

    pub const OPTION: (bool, bool) = (
        carries_value::<Option<u32>>(),
        carries_detail::<Option<u32>>(),
    );
    pub const CODE: (bool, bool) = (carries_value::<Errno>(), carries_detail::<Errno>());
    pub const PAIR: (bool, bool) = (
        carries_value::<(String, Errno)>(),
        carries_detail::<(String, Errno)>(),
    );
}

#[test]
fn classification_is_identical_across_contexts() {
    assert_eq!(
        second_context::OPTION,
        (
            carries_value::<Option<u32>>(),
            carries_detail::<Option<u32>>()
        )
    );
    assert_eq!(second_context::CODE, (false, true));
    assert_eq!(second_context::PAIR, (true, true));
}
