//! Registering new shapes: a derived code and a derived carrier.

use short_circuit::check;
use short_circuit::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, ErrorCode)]
enum WireFault {
    #[shape(ok)]
    None,
    Timeout,
    Corrupt,
}

#[derive(Debug, ValueCarrying)]
enum Slot<T> {
    Filled(T),
    Empty,
}

fn recv(drop_frame: bool) -> (u8, WireFault) {
    if drop_frame {
        (0, WireFault::Timeout)
    } else {
        (42, WireFault::None)
    }
}

fn decode(drop_frame: bool) -> (u16, WireFault) {
    let byte = check!(recv(drop_frame));
    (u16::from(byte) << 1, WireFault::None)
}

fn tolerant_decode(drop_frame: bool) -> Slot<u16> {
    Slot::Filled(check!(decode(drop_frame)))
}

fn main() {
    println!("decode ok   -> {:?}", decode(false));
    println!("decode drop -> {:?}", decode(true));
    println!("tolerant    -> {:?}", tolerant_decode(true));
    println!("corrupt?    -> {}", WireFault::Corrupt.is_failure());
}
