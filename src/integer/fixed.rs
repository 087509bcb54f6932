// ============================================================================
// Fixed-Width Integers
// Compile-time width, modular (wrapping) arithmetic
// ============================================================================

use super::store::{FixedSegments, Segment, SEGMENT_BITS};
use super::value::ArbitraryInteger;

/// Unsigned integer of `N` segments (`N * 64` bits) with wrapping arithmetic.
///
/// `N` must be a power of two and at least 2, so the bit width is a power of
/// two greater than 64. Using any other `N` is a compile error.
///
/// # Example
/// ```
/// use arbitrary_integer::U128;
///
/// let max = U128::from(u64::MAX);
/// let sum = max + U128::ONE;
/// assert_eq!(sum.segments(), &[0, 1]);
/// assert_eq!(sum.to_string(), "18446744073709551616");
/// ```
pub type Fixed<const N: usize> = ArbitraryInteger<FixedSegments<N>>;

/// Declare [`Fixed`] aliases by bit width.
macro_rules! declare_fixed {
    ($name:ident, $bits:expr) => {
        #[doc = concat!("Unsigned integer with ", stringify!($bits), " bits.")]
        pub type $name = Fixed<{ $bits / SEGMENT_BITS }>;
    };
}

declare_fixed!(U128, 128);
declare_fixed!(U256, 256);
declare_fixed!(U512, 512);
declare_fixed!(U1024, 1024);
declare_fixed!(U2048, 2048);
declare_fixed!(U4096, 4096);

impl<const N: usize> Fixed<N> {
    /// Number of segments
    pub const SEGMENTS: usize = N;

    /// Bit width
    pub const BITS: usize = N * SEGMENT_BITS;

    /// Zero value
    pub const ZERO: Self = Self::splat(0);

    /// One
    pub const ONE: Self = {
        let mut segments = FixedSegments::<N>::filled(0);
        segments.0[0] = 1;
        Self { segments }
    };

    /// Minimum representable value (zero)
    pub const MIN: Self = Self::ZERO;

    /// Maximum representable value (all bits set, `!ZERO`)
    pub const MAX: Self = Self::splat(Segment::MAX);

    const fn splat(segment: Segment) -> Self {
        Self {
            segments: FixedSegments::filled(segment),
        }
    }
}
