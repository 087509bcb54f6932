// ============================================================================
// Numeric Limits
// Compile-time description of a fixed-width integer type
// ============================================================================

use super::fixed::Fixed;
use super::store::SEGMENT_BITS;

/// Compile-time facts about a numeric type, for generic numeric code.
///
/// Floating-point attributes are reported as `false` or `None`: integer
/// types have no infinity, NaN, rounding or exponent range.
pub trait NumericLimits: Sized {
    const IS_SPECIALIZED: bool;
    const IS_SIGNED: bool;
    const IS_INTEGER: bool;
    const IS_EXACT: bool;
    const IS_BOUNDED: bool;
    /// Arithmetic wraps modulo `RADIX^DIGITS`
    const IS_MODULO: bool;
    const RADIX: u32;
    /// Number of radix digits representable without change
    const DIGITS: u32;
    /// Number of decimal digits representable without change
    const DIGITS10: u32;
    const MAX_DIGITS10: Option<u32>;
    const HAS_INFINITY: bool;
    const HAS_QUIET_NAN: bool;
    const HAS_SIGNALING_NAN: bool;
    const IS_IEC559: bool;
    const ROUNDS: bool;
    const MIN_EXPONENT: Option<i32>;
    const MIN_EXPONENT10: Option<i32>;
    const MAX_EXPONENT: Option<i32>;
    const MAX_EXPONENT10: Option<i32>;
    const TRAPS: bool;
    const TINYNESS_BEFORE: bool;

    /// Smallest finite value
    fn smallest() -> Self;

    /// Most negative finite value
    fn lowest() -> Self;

    /// Largest finite value
    fn largest() -> Self;
}

/// floor(bits * log10(2)), with log10(2) to 20 decimal places.
const fn decimal_digits(bits: usize) -> u32 {
    const LOG10_2_SCALED: u128 = 30_102_999_566_398_119_521;
    const SCALE: u128 = 100_000_000_000_000_000_000;
    (bits as u128 * LOG10_2_SCALED / SCALE) as u32
}

impl<const N: usize> NumericLimits for Fixed<N> {
    const IS_SPECIALIZED: bool = true;
    const IS_SIGNED: bool = false;
    const IS_INTEGER: bool = true;
    const IS_EXACT: bool = true;
    const IS_BOUNDED: bool = true;
    const IS_MODULO: bool = true;
    const RADIX: u32 = 2;
    const DIGITS: u32 = (N * SEGMENT_BITS) as u32;
    const DIGITS10: u32 = decimal_digits(N * SEGMENT_BITS);
    const MAX_DIGITS10: Option<u32> = None;
    const HAS_INFINITY: bool = false;
    const HAS_QUIET_NAN: bool = false;
    const HAS_SIGNALING_NAN: bool = false;
    const IS_IEC559: bool = false;
    const ROUNDS: bool = false;
    const MIN_EXPONENT: Option<i32> = None;
    const MIN_EXPONENT10: Option<i32> = None;
    const MAX_EXPONENT: Option<i32> = None;
    const MAX_EXPONENT10: Option<i32> = None;
    const TRAPS: bool = false;
    const TINYNESS_BEFORE: bool = false;

    #[inline]
    fn smallest() -> Self {
        Self::MIN
    }

    #[inline]
    fn lowest() -> Self {
        Self::MIN
    }

    #[inline]
    fn largest() -> Self {
        Self::MAX
    }
}
