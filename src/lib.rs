#![cfg_attr(not(feature = "std"), no_std)]

//! # short-circuit
//!
//! **Short-circuit error propagation across heterogeneous result shapes.**
//!
//! Call chains rarely agree on one way to say "that failed": one step
//! hands back an `Option`, the next a numeric status code, a third a
//! `(value, code)` pair. This crate classifies all of them as *result
//! shapes* at compile time and gives you one construct, [`check!`], that
//! either unwraps the success or returns the failure from the enclosing
//! function, reshaped to that function's own result type.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Classification                                          |
//! |  - presence (Present/Absent), shape (Fallible + capabilities)     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Adapters                                                |
//! |  - Option, diagnostic codes, (T, E) pairs, Result                 |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Control                                                 |
//! |  - bridge (FromFailure), branch (Branch, check!)                  |
//! +-------------------------------------------------------------------+
//! ```
//!
//! Every shape is classified by two independent capabilities (does
//! success carry a payload, does failure carry a diagnostic) and the
//! whole pipeline (classify, extract, convert) resolves during trait
//! resolution. A type that is no shape, or a conversion that would have
//! to invent a diagnostic out of nothing, does not compile; nothing is
//! deferred to runtime and there is no registry to keep in sync.
//!
//! ## Quick Start
//!
//! ```
//! use short_circuit::{check, Errno};
//!
//! fn find_record(id: u32) -> Option<u64> {
//!     (id % 2 == 0).then_some(u64::from(id) * 10)
//! }
//!
//! fn fetch(id: u32) -> (u64, Errno) {
//!     match find_record(id) {
//!         Some(offset) => (offset, Errno::OK),
//!         None => (0, Errno(2)),
//!     }
//! }
//!
//! fn fetch_both(a: u32, b: u32) -> (u64, Errno) {
//!     let x = check!(fetch(a));
//!     let y = check!(fetch(b));
//!     (x + y, Errno::OK)
//! }
//!
//! // A detail-less caller: failures narrow to None.
//! fn fetch_opt(a: u32) -> Option<u64> {
//!     Some(check!(fetch(a)))
//! }
//!
//! assert_eq!(fetch_both(2, 4), (60, Errno::OK));
//! assert_eq!(fetch_both(2, 3), (0, Errno(2)));
//! assert_eq!(fetch_opt(3), None);
//! ```
//!
//! ## Features
//!
//! - **Structural classification**: a type is a shape because its impls
//!   exist, not because it was registered anywhere
//! - **Lossy-but-never-wrong conversion**: dropping a diagnostic is
//!   allowed, inventing one is a build error
//! - **Zero runtime overhead**: every `check!` compiles to one branch on
//!   the shape's own failure predicate
//! - **Open to new shapes**: implement the trait family, or reach for
//!   [`error_code!`], `#[derive(ErrorCode)]`, `#[derive(ValueCarrying)]`

// Allow `::short_circuit` paths emitted by the derives to resolve inside
// this crate too.
extern crate self as short_circuit;

// =============================================================================
// Layer 0: Classification
// =============================================================================
pub mod presence;
pub mod shape;

// =============================================================================
// Layer 1: Built-in Adapters
// =============================================================================
pub mod adapters;

// =============================================================================
// Layer 2: Control (bridge + check!)
// =============================================================================
pub mod branch;
pub mod bridge;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use adapters::code::Errno;
pub use branch::{Branch, ExtractDispatch};
pub use bridge::{ConvertDispatch, FromFailure, IntoFailure};
pub use presence::{Absent, Bool, BoolOr, Present};
pub use shape::{
    BareFailure, DetailCarrying, ErrorCode, Fallible, ValueCarrying, carries_detail,
    carries_value, is_result_shape,
};

// Re-export derives
pub use macros::{ErrorCode, ValueCarrying};

/// Common items for working with result shapes.
pub mod prelude {
    pub use crate::adapters::code::Errno;
    pub use crate::branch::Branch;
    pub use crate::bridge::{FromFailure, IntoFailure};
    pub use crate::check;
    pub use crate::presence::{Absent, Bool, Present};
    pub use crate::shape::{BareFailure, DetailCarrying, ErrorCode, Fallible, ValueCarrying};
    pub use macros::{ErrorCode, ValueCarrying};
}
