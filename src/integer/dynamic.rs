// ============================================================================
// Dynamic-Width Integers
// Runtime width that grows and shrinks with the value
// ============================================================================

use super::store::DynamicSegments;
use super::value::ArbitraryInteger;

/// Unsigned integer whose segment count follows its magnitude.
///
/// Operations that can grow the value (add, multiply, shift left, increment)
/// extend the store; every mutation then trims zero segments from the top,
/// so `length()` is the minimal count (at least one). The exception is `!`,
/// which inverts the stored segments in place and keeps their number, so
/// that `!!a == a`.
///
/// Subtraction, negation and decrement wrap within the current length
/// instead of growing downward: `Dynamic(0) - 1` is a single all-ones
/// segment.
pub type Dynamic = ArbitraryInteger<DynamicSegments>;
