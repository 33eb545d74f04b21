//! The capability-extension contract: shapes registered from outside the
//! crate, by hand and through the derives.

use short_circuit::prelude::*;
use short_circuit::{Errno, carries_detail, carries_value, check};

// =============================================================================
// A hand-classified shape (C-style reply struct, both capabilities)
// =============================================================================

#[derive(Debug, PartialEq, Default)]
struct Reply {
    payload: u32,
    status: i16,
}

impl Fallible for Reply {
    type CarriesValue = Present;
    type CarriesDetail = Present;

    fn is_failure(&self) -> bool {
        self.status < 0
    }
}

impl ValueCarrying for Reply {
    type Value = u32;

    fn into_value(self) -> u32 {
        self.payload
    }
}

impl DetailCarrying for Reply {
    type Detail = i16;

    fn from_detail(detail: i16) -> Self {
        Reply {
            payload: 0,
            status: detail,
        }
    }

    fn into_detail(self) -> i16 {
        self.status
    }
}

#[test]
fn handmade_shape_flows_through_check() {
    fn fetch(ok: bool) -> Reply {
        if ok {
            Reply {
                payload: 40,
                status: 0,
            }
        } else {
            Reply {
                payload: 0,
                status: -3,
            }
        }
    }

    fn bump(ok: bool) -> Reply {
        let payload = check!(fetch(ok));
        Reply {
            payload: payload + 2,
            status: 0,
        }
    }

    assert_eq!(bump(true), Reply { payload: 42, status: 0 });
    assert_eq!(bump(false), Reply::from_detail(-3));

    fn narrowed(ok: bool) -> Option<u32> {
        Some(check!(fetch(ok)))
    }

    assert_eq!(narrowed(true), Some(40));
    assert_eq!(narrowed(false), None);
}

// =============================================================================
// #[derive(ErrorCode)]
// =============================================================================

#[derive(Debug, PartialEq, ErrorCode)]
enum ParseFault {
    #[shape(ok)]
    None,
    Empty,
    Garbled,
}

#[test]
fn derived_code_matches_a_manual_adapter() {
    assert!(!carries_value::<ParseFault>());
    assert!(carries_detail::<ParseFault>());

    assert!(ParseFault::Garbled.is_failure());
    assert!(!ParseFault::None.is_failure());
    assert_eq!(ParseFault::from_detail(ParseFault::Empty), ParseFault::Empty);

    // Usable in the pair adapter's diagnostic slot like any other code.
    let pair: (u8, ParseFault) = ParseFault::Empty.into_failure();
    assert_eq!(pair, (0, ParseFault::Empty));
}

// =============================================================================
// #[derive(ValueCarrying)]
// =============================================================================

#[derive(Debug, PartialEq, ValueCarrying)]
enum Lookup<T> {
    Hit(T),
    Miss,
}

#[test]
fn derived_carrier_behaves_like_option() {
    assert!(carries_value::<Lookup<u8>>());
    assert!(!carries_detail::<Lookup<u8>>());

    fn next_hit(input: Lookup<u8>) -> Lookup<u8> {
        let value = check!(input);
        Lookup::Hit(value + 1)
    }

    assert_eq!(next_hit(Lookup::Hit(1)), Lookup::Hit(2));
    assert_eq!(next_hit(Lookup::Miss), Lookup::Miss);

    // Failures from detail-carrying shapes narrow into it.
    fn guarded(code: Errno) -> Lookup<u8> {
        check!(code);
        Lookup::Hit(1)
    }

    assert_eq!(guarded(Errno(4)), Lookup::Miss);
    assert_eq!(guarded(Errno::OK), Lookup::Hit(1));
}

// =============================================================================
// error_code! on a newtype
// =============================================================================

#[derive(Debug, PartialEq)]
struct HttpStatus(u16);

short_circuit::error_code!(HttpStatus => |status| status.0 >= 400);

#[test]
fn declarative_registration_matches_the_derive() {
    assert!(!carries_value::<HttpStatus>());
    assert!(carries_detail::<HttpStatus>());

    assert!(HttpStatus(500).is_failure());
    assert!(!HttpStatus(204).is_failure());

    fn fetch(status: HttpStatus) -> (String, HttpStatus) {
        check!(status);
        ("body".to_owned(), HttpStatus(200))
    }

    assert_eq!(fetch(HttpStatus(404)), (String::new(), HttpStatus(404)));
}
