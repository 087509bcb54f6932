// ============================================================================
// Arithmetic Engine
// Segment-wise algorithms shared by the fixed and dynamic representations
// ============================================================================
//
// Every algorithm here is written once. The store's growth policy decides
// the overflow law:
// - Fixed stores ignore `resize`/`push_carry`, so carries fall off the top
//   and results are truncated modulo the width.
// - Dynamic stores grow to hold carries and are trimmed after each mutation,
//   apart from `!`, which keeps the length it was given.
//
// Division is a bit-serial restoring long division producing quotient and
// remainder together. It is O(bits^2) and deliberately simple.

use super::engine::{add_with_carry, mul_add_carry, significant, sub_with_borrow};
use super::errors::{IntegerError, IntegerResult};
use super::store::{SegmentStore, SEGMENT_BITS};
use super::value::ArbitraryInteger;

impl<S: SegmentStore> ArbitraryInteger<S> {
    // ========================================================================
    // Additive
    // ========================================================================

    pub(super) fn add_assign_ref(&mut self, other: &Self) {
        let width = self.length().max(other.length());
        self.segments.resize(width);

        let rhs = other.segments();
        let mut carry = false;
        for (i, segment) in self.segments.as_mut_slice().iter_mut().enumerate() {
            let addend = rhs.get(i).copied().unwrap_or(0);
            (*segment, carry) = add_with_carry(*segment, addend, carry);
        }

        if carry {
            self.segments.push_carry(1);
        }
        self.segments.trim();
    }

    /// Subtraction wraps within `max(length(self), length(other))` segments,
    /// counting significant segments only.
    pub(super) fn sub_assign_ref(&mut self, other: &Self) {
        self.segments.trim();
        let width = self.length().max(significant(other.segments()).len());
        self.segments.resize(width);

        let rhs = other.segments();
        let mut borrow = false;
        for (i, segment) in self.segments.as_mut_slice().iter_mut().enumerate() {
            let subtrahend = rhs.get(i).copied().unwrap_or(0);
            (*segment, borrow) = sub_with_borrow(*segment, subtrahend, borrow);
        }

        // A borrow out of the top segment is discarded in both modes.
        self.segments.trim();
    }

    /// Two's-complement negation within the current width.
    pub fn wrapping_neg(&self) -> Self {
        let mut result = Self {
            segments: S::zeroed(significant(self.segments()).len()),
        };
        result.sub_assign_ref(self);
        result
    }

    /// Add one in place.
    ///
    /// Fixed values wrap from the maximum to zero. Dynamic values append a
    /// new segment when the carry leaves the top.
    pub fn increment(&mut self) {
        for segment in self.segments.as_mut_slice() {
            *segment = segment.wrapping_add(1);
            if *segment != 0 {
                return;
            }
        }
        self.segments.push_carry(1);
    }

    /// Subtract one in place.
    ///
    /// A borrow out of the top segment is discarded, so zero wraps to the
    /// all-ones pattern of the current length. For dynamic values this is the
    /// one place they wrap instead of growing: `Dynamic(0)` decrements to a
    /// single all-ones segment.
    pub fn decrement(&mut self) {
        self.segments.trim();
        for segment in self.segments.as_mut_slice() {
            let before = *segment;
            *segment = before.wrapping_sub(1);
            if before != 0 {
                break;
            }
        }
        self.segments.trim();
    }

    /// Increment, returning the value from before the increment.
    pub fn post_increment(&mut self) -> Self {
        let previous = self.clone();
        self.increment();
        previous
    }

    /// Decrement, returning the value from before the decrement.
    pub fn post_decrement(&mut self) -> Self {
        let previous = self.clone();
        self.decrement();
        previous
    }

    // ========================================================================
    // Multiplicative
    // ========================================================================

    /// Schoolbook multiplication.
    ///
    /// The product store is sized for `length(self) + length(other)`
    /// segments; fixed stores cap that at their width, which discards every
    /// partial product landing past the top segment.
    pub(super) fn mul_assign_ref(&mut self, other: &Self) {
        let lhs = self.segments();
        let rhs = other.segments();

        let mut product = S::zeroed(lhs.len() + rhs.len());
        let out = product.as_mut_slice();
        let width = out.len();

        for (i, &a) in lhs.iter().enumerate() {
            let mut carry = 0;
            for (j, &b) in rhs.iter().enumerate() {
                let k = i + j;
                if k >= width {
                    break;
                }
                (out[k], carry) = mul_add_carry(a, b, out[k], carry);
            }
            if i + rhs.len() < width {
                out[i + rhs.len()] = carry;
            }
        }

        product.trim();
        self.segments = product;
    }

    /// Raise to a native power by square-and-multiply.
    pub fn pow(&self, mut exponent: u64) -> Self {
        let mut result = Self::from_u64(1);
        let mut base = self.clone();
        while exponent > 0 {
            if exponent & 1 == 1 {
                result.mul_assign_ref(&base);
            }
            exponent >>= 1;
            if exponent > 0 {
                let square = base.clone();
                base.mul_assign_ref(&square);
            }
        }
        result
    }

    // ========================================================================
    // Division
    // ========================================================================

    /// Divide, producing quotient and remainder together.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero. Nothing is computed in
    /// that case.
    pub fn div_rem(&self, divisor: &Self) -> IntegerResult<(Self, Self)> {
        if divisor.is_zero() {
            tracing::trace!(dividend = %self, "rejected division by zero");
            return Err(IntegerError::DivisionByZero);
        }
        Ok(self.div_rem_nonzero(divisor))
    }

    /// Checked division.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    #[inline]
    pub fn checked_div(&self, divisor: &Self) -> IntegerResult<Self> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    /// Checked remainder.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    #[inline]
    pub fn checked_rem(&self, divisor: &Self) -> IntegerResult<Self> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }

    /// Restoring long division over every bit of the dividend's span.
    ///
    /// Shifting the running remainder left can push a set bit past the top
    /// of a fixed store. When that happens the true remainder is at least
    /// `2^bits`, which exceeds any divisor, so the subtraction is taken and
    /// its wraparound restores the correct value.
    pub(super) fn div_rem_nonzero(&self, divisor: &Self) -> (Self, Self) {
        let mut quotient = Self::zero();
        let mut remainder = Self::zero();

        for index in (0..self.bits()).rev() {
            let spilled = !S::GROWABLE && remainder.top_bit();
            remainder.shl_assign_bits(1);
            if self.bit(index) {
                remainder.segments.as_mut_slice()[0] |= 1;
            }

            if spilled || remainder >= *divisor {
                remainder.sub_assign_ref(divisor);
                quotient.set_bit(index);
            }
        }

        quotient.segments.trim();
        remainder.segments.trim();
        (quotient, remainder)
    }

    /// Greatest common divisor by Euclid's algorithm. `gcd(0, 0)` is zero.
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let (_, remainder) = a.div_rem_nonzero(&b);
            a = b;
            b = remainder;
        }
        a
    }

    // ========================================================================
    // Bitwise
    // ========================================================================

    /// AND over the shorter operand; missing segments act as zero.
    pub(super) fn bitand_assign_ref(&mut self, other: &Self) {
        let width = self.length().min(other.length());
        self.segments.resize(width);
        for (segment, &mask) in self.segments.as_mut_slice().iter_mut().zip(other.segments()) {
            *segment &= mask;
        }
        self.segments.trim();
    }

    pub(super) fn bitor_assign_ref(&mut self, other: &Self) {
        let width = self.length().max(other.length());
        self.segments.resize(width);
        for (segment, &bits) in self.segments.as_mut_slice().iter_mut().zip(other.segments()) {
            *segment |= bits;
        }
        self.segments.trim();
    }

    pub(super) fn bitxor_assign_ref(&mut self, other: &Self) {
        let width = self.length().max(other.length());
        self.segments.resize(width);
        for (segment, &bits) in self.segments.as_mut_slice().iter_mut().zip(other.segments()) {
            *segment ^= bits;
        }
        self.segments.trim();
    }

    /// Invert every stored segment.
    ///
    /// Dynamic values have no width ceiling, so only existing segments are
    /// inverted: `!Dynamic(0)` is one all-ones segment. The length is kept
    /// as is, even when the top segment becomes zero, so `!!a == a` holds
    /// for every value.
    pub(super) fn not_assign(&mut self) {
        for segment in self.segments.as_mut_slice() {
            *segment = !*segment;
        }
    }

    // ========================================================================
    // Shifts
    // ========================================================================

    /// Shift left by `shift` bits.
    ///
    /// Fixed values are zeroed once `shift` reaches the width. Dynamic
    /// values grow by `shift / 64` segments, plus one if the top segment
    /// spills.
    ///
    /// # Panics
    /// Dynamic values panic if the grown value cannot be allocated, e.g. for
    /// a shift near `usize::MAX`.
    pub(super) fn shl_assign_bits(&mut self, shift: usize) {
        if shift == 0 {
            return;
        }
        let segment_shift = shift / SEGMENT_BITS;
        let bit_shift = shift % SEGMENT_BITS;

        if S::GROWABLE {
            let old_len = self.length();
            let top = self.segments()[old_len - 1];
            let spill = bit_shift > 0 && top >> (SEGMENT_BITS - bit_shift) != 0;
            self.segments.resize(old_len + segment_shift + usize::from(spill));
        } else if shift >= self.bits() {
            self.segments.clear();
            return;
        }

        let segments = self.segments.as_mut_slice();
        for i in (0..segments.len()).rev() {
            segments[i] = if i < segment_shift {
                0
            } else {
                let source = i - segment_shift;
                let mut shifted = segments[source] << bit_shift;
                if bit_shift > 0 && source > 0 {
                    shifted |= segments[source - 1] >> (SEGMENT_BITS - bit_shift);
                }
                shifted
            };
        }

        self.segments.trim();
    }

    /// Logical shift right by `shift` bits.
    ///
    /// Shifting out every segment yields zero (one segment for dynamic
    /// values). Dynamic values shrink by `shift / 64` segments and are
    /// trimmed.
    pub(super) fn shr_assign_bits(&mut self, shift: usize) {
        if shift == 0 {
            return;
        }
        let segment_shift = shift / SEGMENT_BITS;
        let bit_shift = shift % SEGMENT_BITS;
        let len = self.length();

        if segment_shift >= len {
            self.segments.clear();
            return;
        }

        let segments = self.segments.as_mut_slice();
        for i in 0..len {
            let source = i + segment_shift;
            segments[i] = if source >= len {
                0
            } else {
                let mut shifted = segments[source] >> bit_shift;
                if bit_shift > 0 && source + 1 < len {
                    shifted |= segments[source + 1] << (SEGMENT_BITS - bit_shift);
                }
                shifted
            };
        }

        self.segments.resize(len - segment_shift);
        self.segments.trim();
    }
}
