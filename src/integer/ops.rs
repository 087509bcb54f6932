// ============================================================================
// Operator Implementations
// std::ops wiring for owned and borrowed operands
// ============================================================================

use super::store::SegmentStore;
use super::value::ArbitraryInteger;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

/// Implement a binary operator and its compound form for every combination
/// of owned and borrowed operands, on top of an in-place `fn(&mut Self, &Self)`.
macro_rules! impl_binary_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $inner:ident) => {
        impl<S: SegmentStore> $OpAssign<&ArbitraryInteger<S>> for ArbitraryInteger<S> {
            #[inline]
            fn $op_assign(&mut self, rhs: &ArbitraryInteger<S>) {
                self.$inner(rhs);
            }
        }

        impl<S: SegmentStore> $OpAssign for ArbitraryInteger<S> {
            #[inline]
            fn $op_assign(&mut self, rhs: ArbitraryInteger<S>) {
                self.$inner(&rhs);
            }
        }

        impl<S: SegmentStore> $Op<&ArbitraryInteger<S>> for ArbitraryInteger<S> {
            type Output = ArbitraryInteger<S>;

            #[inline]
            fn $op(mut self, rhs: &ArbitraryInteger<S>) -> Self::Output {
                self.$inner(rhs);
                self
            }
        }

        impl<S: SegmentStore> $Op for ArbitraryInteger<S> {
            type Output = ArbitraryInteger<S>;

            #[inline]
            fn $op(mut self, rhs: ArbitraryInteger<S>) -> Self::Output {
                self.$inner(&rhs);
                self
            }
        }

        impl<S: SegmentStore> $Op<&ArbitraryInteger<S>> for &ArbitraryInteger<S> {
            type Output = ArbitraryInteger<S>;

            #[inline]
            fn $op(self, rhs: &ArbitraryInteger<S>) -> Self::Output {
                let mut result = self.clone();
                result.$inner(rhs);
                result
            }
        }

        impl<S: SegmentStore> $Op<ArbitraryInteger<S>> for &ArbitraryInteger<S> {
            type Output = ArbitraryInteger<S>;

            #[inline]
            fn $op(self, rhs: ArbitraryInteger<S>) -> Self::Output {
                let mut result = self.clone();
                result.$inner(&rhs);
                result
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, add_assign_ref);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, sub_assign_ref);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, mul_assign_ref);
impl_binary_op!(Div, div, DivAssign, div_assign, div_assign_ref);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, rem_assign_ref);
impl_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, bitand_assign_ref);
impl_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, bitor_assign_ref);
impl_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, bitxor_assign_ref);

// Infallible Div/Rem for ergonomics (panics on a zero divisor like native
// integers - use div_rem/checked_* to handle it). The receiver is left
// untouched when the divisor is rejected.
impl<S: SegmentStore> ArbitraryInteger<S> {
    fn div_assign_ref(&mut self, rhs: &Self) {
        let (quotient, _) = self.div_rem(rhs).expect("attempt to divide by zero");
        *self = quotient;
    }

    fn rem_assign_ref(&mut self, rhs: &Self) {
        let (_, remainder) = self
            .div_rem(rhs)
            .expect("attempt to calculate the remainder with a divisor of zero");
        *self = remainder;
    }
}

// ============================================================================
// Unary Operators
// ============================================================================

impl<S: SegmentStore> Not for ArbitraryInteger<S> {
    type Output = ArbitraryInteger<S>;

    #[inline]
    fn not(mut self) -> Self::Output {
        self.not_assign();
        self
    }
}

impl<S: SegmentStore> Not for &ArbitraryInteger<S> {
    type Output = ArbitraryInteger<S>;

    #[inline]
    fn not(self) -> Self::Output {
        !self.clone()
    }
}

impl<S: SegmentStore> Neg for ArbitraryInteger<S> {
    type Output = ArbitraryInteger<S>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}

impl<S: SegmentStore> Neg for &ArbitraryInteger<S> {
    type Output = ArbitraryInteger<S>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}

// ============================================================================
// Shifts
// ============================================================================

/// Shift left in place.
///
/// # Panics
/// Dynamic values panic if the shifted value cannot be allocated, e.g. for a
/// shift near `usize::MAX`. Fixed values never panic.
impl<S: SegmentStore> ShlAssign<usize> for ArbitraryInteger<S> {
    #[inline]
    fn shl_assign(&mut self, shift: usize) {
        self.shl_assign_bits(shift);
    }
}

impl<S: SegmentStore> ShrAssign<usize> for ArbitraryInteger<S> {
    #[inline]
    fn shr_assign(&mut self, shift: usize) {
        self.shr_assign_bits(shift);
    }
}

/// Shift left.
///
/// # Panics
/// Same as [`ShlAssign`]: a dynamic value that cannot be allocated panics.
impl<S: SegmentStore> Shl<usize> for ArbitraryInteger<S> {
    type Output = ArbitraryInteger<S>;

    #[inline]
    fn shl(mut self, shift: usize) -> Self::Output {
        self.shl_assign_bits(shift);
        self
    }
}

impl<S: SegmentStore> Shr<usize> for ArbitraryInteger<S> {
    type Output = ArbitraryInteger<S>;

    #[inline]
    fn shr(mut self, shift: usize) -> Self::Output {
        self.shr_assign_bits(shift);
        self
    }
}

impl<S: SegmentStore> Shl<usize> for &ArbitraryInteger<S> {
    type Output = ArbitraryInteger<S>;

    #[inline]
    fn shl(self, shift: usize) -> Self::Output {
        self.clone() << shift
    }
}

impl<S: SegmentStore> Shr<usize> for &ArbitraryInteger<S> {
    type Output = ArbitraryInteger<S>;

    #[inline]
    fn shr(self, shift: usize) -> Self::Output {
        self.clone() >> shift
    }
}
