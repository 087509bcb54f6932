// ============================================================================
// Arbitrary Integer
// Unsigned big integer over a pluggable segment store
// ============================================================================

use super::engine;
use super::store::{Segment, SegmentStore, SEGMENT_BITS};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Unsigned big integer stored as 64-bit segments, least significant first.
///
/// The store decides the overflow law:
/// - [`Fixed<N>`](super::Fixed): `N * 64` bits, arithmetic wraps modulo `2^(N*64)`.
/// - [`Dynamic`](super::Dynamic): grows as needed and is trimmed to the
///   shortest representation after every operation.
///
/// Negative native integers are accepted at construction and stored as
/// their two's-complement bit pattern; from then on everything is unsigned.
///
/// Equality, ordering and hashing look at magnitude only: zero segments
/// at the top of a dynamic value (left there by `!`) do not count.
///
/// # Example
/// ```
/// use arbitrary_integer::{Dynamic, U128};
///
/// let wrapped = U128::from(0u64) - U128::from(1u64);
/// assert_eq!(wrapped, U128::MAX);
///
/// let mut grown = Dynamic::from(u64::MAX);
/// grown.increment();
/// assert_eq!(grown.length(), 2);
/// ```
#[derive(Clone, Copy, Default)]
pub struct ArbitraryInteger<S: SegmentStore> {
    pub(super) segments: S,
}

// ============================================================================
// Construction
// ============================================================================

impl<S: SegmentStore> ArbitraryInteger<S> {
    /// The zero value (full width for fixed stores, one segment for dynamic).
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Create from an unsigned native value.
    #[inline]
    pub fn from_u64(value: u64) -> Self {
        let mut segments = S::default();
        segments.as_mut_slice()[0] = value;
        Self { segments }
    }

    /// Create from a signed native value, keeping its two's-complement bits.
    ///
    /// Fixed stores sign-extend a negative value across every segment.
    /// Dynamic stores have no top segment to extend into, so only segment 0
    /// receives the bit pattern: `Dynamic::from_i64(-1)` is `2^64 - 1`.
    pub fn from_i64(value: i64) -> Self {
        let mut result = Self::from_u64(value as u64);
        if value < 0 && !S::GROWABLE {
            result.segments.as_mut_slice()[1..].fill(Segment::MAX);
        }
        result
    }

    /// Create from raw segments, least significant first.
    ///
    /// Fixed stores keep the low `N` segments (truncation modulo the width)
    /// and zero-fill the rest. Dynamic stores keep every segment and trim.
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut store = S::zeroed(segments.len());
        let dst = store.as_mut_slice();
        let count = dst.len().min(segments.len());
        dst[..count].copy_from_slice(&segments[..count]);
        store.trim();
        Self { segments: store }
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Number of 64-bit segments in the representation.
    #[inline]
    pub fn length(&self) -> usize {
        self.segments.length()
    }

    /// Number of bits in the representation (`length() * 64`).
    #[inline]
    pub fn bits(&self) -> usize {
        self.length() * SEGMENT_BITS
    }

    /// The least-significant 64 bits.
    #[inline]
    pub fn tail(&self) -> u64 {
        self.segments.as_slice()[0]
    }

    /// The segments, least significant first.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        self.segments.as_slice()
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.segments().iter().all(|&segment| segment == 0)
    }

    /// Truthiness: `true` iff any segment is non-zero.
    #[inline]
    pub fn as_bool(&self) -> bool {
        !self.is_zero()
    }

    /// The value as a native integer, if it fits in one segment.
    pub fn to_u64(&self) -> Option<u64> {
        let (low, high) = self.segments().split_first()?;
        high.iter().all(|&segment| segment == 0).then_some(*low)
    }

    /// Test bit `index` (bit 0 is the least significant).
    ///
    /// Bits past the representation read as zero.
    #[inline]
    pub fn bit(&self, index: usize) -> bool {
        self.segments()
            .get(index / SEGMENT_BITS)
            .is_some_and(|segment| segment >> (index % SEGMENT_BITS) & 1 == 1)
    }

    /// Set bit `index`.
    ///
    /// Dynamic values grow to hold the bit; fixed values ignore indices at
    /// or past their width.
    pub fn set_bit(&mut self, index: usize) {
        let position = index / SEGMENT_BITS;
        if position >= self.length() {
            if !S::GROWABLE {
                return;
            }
            self.segments.resize(position + 1);
        }
        self.segments.as_mut_slice()[position] |= 1 << (index % SEGMENT_BITS);
    }

    /// Whether the most significant stored bit is set.
    #[inline]
    pub(super) fn top_bit(&self) -> bool {
        self.bit(self.bits() - 1)
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl<S: SegmentStore> PartialEq for ArbitraryInteger<S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        engine::significant(self.segments()) == engine::significant(other.segments())
    }
}

impl<S: SegmentStore> Eq for ArbitraryInteger<S> {}

impl<S: SegmentStore> Hash for ArbitraryInteger<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        engine::significant(self.segments()).hash(state);
    }
}

impl<S: SegmentStore> PartialOrd for ArbitraryInteger<S> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: SegmentStore> Ord for ArbitraryInteger<S> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        engine::compare(self.segments(), other.segments())
    }
}

// ============================================================================
// Native Conversions
// ============================================================================

macro_rules! impl_from_unsigned {
    ($($int:ty),*) => {
        $(
            impl<S: SegmentStore> From<$int> for ArbitraryInteger<S> {
                #[inline]
                fn from(value: $int) -> Self {
                    Self::from_u64(value as u64)
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($int:ty),*) => {
        $(
            impl<S: SegmentStore> From<$int> for ArbitraryInteger<S> {
                #[inline]
                fn from(value: $int) -> Self {
                    Self::from_i64(value as i64)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

// ============================================================================
// Debug
// ============================================================================

impl<S: SegmentStore> fmt::Debug for ArbitraryInteger<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if S::GROWABLE {
            write!(f, "Dynamic({}, segments={:?})", self, self.segments)
        } else {
            write!(f, "Fixed<{}>({}, segments={:?})", self.bits(), self, self.segments)
        }
    }
}
