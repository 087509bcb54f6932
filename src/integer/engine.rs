// ============================================================================
// Segment Primitives
// Carry, borrow and multiply-accumulate on single 64-bit segments
// ============================================================================

use super::store::{Segment, SEGMENT_BITS};
use std::cmp::Ordering;

/// `a + b + carry`, returning the low segment and the carry out.
#[inline]
pub(crate) fn add_with_carry(a: Segment, b: Segment, carry: bool) -> (Segment, bool) {
    let (sum, c1) = a.overflowing_add(b);
    let (sum, c2) = sum.overflowing_add(Segment::from(carry));
    (sum, c1 || c2)
}

/// `a - b - borrow`, returning the low segment and the borrow out.
#[inline]
pub(crate) fn sub_with_borrow(a: Segment, b: Segment, borrow: bool) -> (Segment, bool) {
    let (diff, b1) = a.overflowing_sub(b);
    let (diff, b2) = diff.overflowing_sub(Segment::from(borrow));
    (diff, b1 || b2)
}

/// `a * b + addend + carry` as a (low, high) segment pair.
///
/// Cannot overflow: (2^64 - 1)^2 + 2 * (2^64 - 1) = 2^128 - 1.
#[inline]
pub(crate) fn mul_add_carry(
    a: Segment,
    b: Segment,
    addend: Segment,
    carry: Segment,
) -> (Segment, Segment) {
    let wide = u128::from(a) * u128::from(b) + u128::from(addend) + u128::from(carry);
    (wide as Segment, (wide >> SEGMENT_BITS) as Segment)
}

/// The segments without zero segments at the top, keeping at least one.
#[inline]
pub(crate) fn significant(segments: &[Segment]) -> &[Segment] {
    let len = segments.iter().rposition(|&segment| segment != 0).map_or(1, |top| top + 1);
    &segments[..len.min(segments.len())]
}

/// Compare two segment sequences by magnitude.
///
/// Zero segments at the top are ignored. Of the remaining sequences the
/// longer is the larger value; equal lengths compare from the most
/// significant segment down.
#[inline]
pub(crate) fn compare(lhs: &[Segment], rhs: &[Segment]) -> Ordering {
    let (lhs, rhs) = (significant(lhs), significant(rhs));
    lhs.len()
        .cmp(&rhs.len())
        .then_with(|| lhs.iter().rev().cmp(rhs.iter().rev()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_with_carry() {
        assert_eq!(add_with_carry(1, 2, false), (3, false));
        assert_eq!(add_with_carry(u64::MAX, 1, false), (0, true));
        assert_eq!(add_with_carry(u64::MAX, 0, true), (0, true));
        assert_eq!(add_with_carry(u64::MAX, u64::MAX, true), (u64::MAX, true));
    }

    #[test]
    fn test_sub_with_borrow() {
        assert_eq!(sub_with_borrow(5, 3, false), (2, false));
        assert_eq!(sub_with_borrow(0, 1, false), (u64::MAX, true));
        assert_eq!(sub_with_borrow(0, 0, true), (u64::MAX, true));
        assert_eq!(sub_with_borrow(1, 0, true), (0, false));
    }

    #[test]
    fn test_mul_add_carry() {
        assert_eq!(mul_add_carry(6, 7, 0, 0), (42, 0));
        assert_eq!(mul_add_carry(1 << 32, 1 << 32, 0, 0), (0, 1));
        // Largest possible inputs fill both halves exactly
        assert_eq!(
            mul_add_carry(u64::MAX, u64::MAX, u64::MAX, u64::MAX),
            (u64::MAX, u64::MAX)
        );
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare(&[1], &[2]), Ordering::Less);
        assert_eq!(compare(&[0, 1], &[u64::MAX]), Ordering::Greater);
        assert_eq!(compare(&[5, 1], &[4, 2]), Ordering::Less);
        assert_eq!(compare(&[5, 2], &[5, 2]), Ordering::Equal);
    }

    #[test]
    fn test_compare_ignores_top_zero_segments() {
        assert_eq!(compare(&[5, 0], &[5]), Ordering::Equal);
        assert_eq!(compare(&[7, 0, 0], &[u64::MAX]), Ordering::Less);
        assert_eq!(compare(&[0, 1, 0], &[u64::MAX, 0]), Ordering::Greater);
    }

    #[test]
    fn test_significant() {
        assert_eq!(significant(&[5, 0, 0]), &[5]);
        assert_eq!(significant(&[0, 0]), &[0]);
        assert_eq!(significant(&[1, 2]), &[1, 2]);
    }
}
