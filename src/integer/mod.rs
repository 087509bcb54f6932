// ============================================================================
// Integer Module
// Unsigned big integers over 64-bit segments
// ============================================================================
//
// This module provides:
// - ArbitraryInteger<S>: one value type, generic over its segment store
// - Fixed<N> / U128..U4096: compile-time width, wrapping arithmetic
// - Dynamic: runtime width, grows and trims with the value
// - Decimal and radix text conversion
// - NumericLimits and num-traits integration
//
// Design principles:
// - Every algorithm is written once against the SegmentStore trait
// - Overflow is defined behaviour (wraparound or growth), never an error
// - Division by zero is the only arithmetic failure
// - Plain segment-wise algorithms (schoolbook multiply, bit-serial division)

mod arith;
mod codec;
mod dynamic;
mod engine;
mod errors;
mod fixed;
mod interop;
mod limits;
mod ops;
#[cfg(feature = "serde")]
mod serde_impl;
mod store;
mod value;

pub use codec::{from_decimal_str, to_decimal_string};
pub use dynamic::Dynamic;
pub use errors::{IntegerError, IntegerResult};
pub use fixed::{Fixed, U1024, U128, U2048, U256, U4096, U512};
pub use limits::NumericLimits;
pub use store::{DynamicSegments, FixedSegments, Segment, SegmentStore, SEGMENT_BITS};
pub use value::ArbitraryInteger;
