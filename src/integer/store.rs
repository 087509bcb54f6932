// ============================================================================
// Segment Stores
// Storage and growth policy for the 64-bit segments of a big integer
// ============================================================================

use smallvec::{smallvec, SmallVec};
use std::fmt;
use std::hash::Hash;

/// One 64-bit chunk of an integer's bit pattern.
pub type Segment = u64;

/// Number of bits held by one [`Segment`].
pub const SEGMENT_BITS: usize = Segment::BITS as usize;

/// Storage for the segments of an integer, least-significant segment first.
///
/// The arithmetic in this crate is written once against this trait. The
/// two implementations differ only in how they respond to requests that
/// would change the number of segments:
///
/// - [`FixedSegments`] has a constant length. `resize` is a no-op, carries
///   out of the top segment are discarded and `trim` does nothing, which
///   gives modular wraparound.
/// - [`DynamicSegments`] grows on `resize`/`push_carry` and drops
///   zero segments from the top on `trim`, never going below one segment.
///
/// A store always holds at least one segment.
pub trait SegmentStore: Clone + Default + fmt::Debug + PartialEq + Eq + Hash {
    /// Whether the segment count can change at runtime.
    const GROWABLE: bool;

    /// Create a zero-valued store of (at least) `len` segments.
    ///
    /// Fixed stores ignore `len` and always use their compile-time length.
    fn zeroed(len: usize) -> Self;

    /// The segments, least-significant first.
    fn as_slice(&self) -> &[Segment];

    /// Mutable access to the existing segments.
    fn as_mut_slice(&mut self) -> &mut [Segment];

    /// Change the number of segments, zero-filling new ones.
    ///
    /// # Panics
    /// Growable stores panic if memory for `len` segments cannot be
    /// allocated.
    fn resize(&mut self, len: usize);

    /// Append `carry` as a new most-significant segment.
    fn push_carry(&mut self, carry: Segment);

    /// Drop zero segments from the top, keeping at least one.
    fn trim(&mut self);

    /// Number of segments currently stored.
    #[inline]
    fn length(&self) -> usize {
        self.as_slice().len()
    }

    /// Reset to the zero value.
    fn clear(&mut self) {
        self.as_mut_slice().fill(0);
        self.trim();
    }
}

// ============================================================================
// Fixed Store
// ============================================================================

/// Constant-length store of `N` segments (`N * 64` bits).
///
/// `N` must be a power of two and at least 2, i.e. the bit width is a
/// power of two greater than 64. The check is a constant evaluated when the
/// type is first used, so an invalid width fails to compile.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedSegments<const N: usize>(pub(crate) [Segment; N]);

impl<const N: usize> FixedSegments<N> {
    const VALID_WIDTH: () = assert!(
        N >= 2 && N.is_power_of_two(),
        "fixed bit width must be a power of two greater than 64"
    );

    /// Store with every segment set to `segment`.
    #[inline]
    pub const fn filled(segment: Segment) -> Self {
        let () = Self::VALID_WIDTH;
        Self([segment; N])
    }
}

impl<const N: usize> Default for FixedSegments<N> {
    #[inline]
    fn default() -> Self {
        Self::filled(0)
    }
}

impl<const N: usize> fmt::Debug for FixedSegments<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<const N: usize> SegmentStore for FixedSegments<N> {
    const GROWABLE: bool = false;

    #[inline]
    fn zeroed(_len: usize) -> Self {
        Self::default()
    }

    #[inline]
    fn as_slice(&self) -> &[Segment] {
        &self.0
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [Segment] {
        &mut self.0
    }

    #[inline]
    fn resize(&mut self, _len: usize) {}

    #[inline]
    fn push_carry(&mut self, _carry: Segment) {}

    #[inline]
    fn trim(&mut self) {}
}

// ============================================================================
// Dynamic Store
// ============================================================================

/// Growable store, trimmed to the shortest length that holds the value.
///
/// Values up to four segments (256 bits) are kept inline.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DynamicSegments(SmallVec<[Segment; 4]>);

impl Default for DynamicSegments {
    #[inline]
    fn default() -> Self {
        Self(smallvec![0])
    }
}

impl fmt::Debug for DynamicSegments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl SegmentStore for DynamicSegments {
    const GROWABLE: bool = true;

    #[inline]
    fn zeroed(len: usize) -> Self {
        Self(smallvec![0; len.max(1)])
    }

    #[inline]
    fn as_slice(&self) -> &[Segment] {
        &self.0
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [Segment] {
        &mut self.0
    }

    #[inline]
    fn resize(&mut self, len: usize) {
        let len = len.max(1);
        if let Some(additional) = len.checked_sub(self.0.len()) {
            if let Err(error) = self.0.try_reserve(additional) {
                panic!("cannot grow integer to {} segments: {:?}", len, error);
            }
        }
        self.0.resize(len, 0);
    }

    #[inline]
    fn push_carry(&mut self, carry: Segment) {
        self.0.push(carry);
    }

    fn trim(&mut self) {
        while self.0.len() > 1 && self.0.last() == Some(&0) {
            self.0.pop();
        }
    }
}
