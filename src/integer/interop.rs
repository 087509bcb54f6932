// ============================================================================
// Interoperability
// num-traits integration and conversion between fixed and dynamic widths
// ============================================================================

use super::dynamic::Dynamic;
use super::errors::IntegerError;
use super::fixed::Fixed;
use super::store::SegmentStore;
use super::value::ArbitraryInteger;
use num_traits::{
    Bounded, CheckedDiv, CheckedRem, Num, One, ToPrimitive, Unsigned, WrappingAdd, WrappingMul,
    WrappingSub, Zero,
};

// ============================================================================
// Both Widths
// ============================================================================

impl<S: SegmentStore> Zero for ArbitraryInteger<S> {
    #[inline]
    fn zero() -> Self {
        Self::default()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        ArbitraryInteger::is_zero(self)
    }
}

impl<S: SegmentStore> One for ArbitraryInteger<S> {
    #[inline]
    fn one() -> Self {
        Self::from_u64(1)
    }
}

impl<S: SegmentStore> Num for ArbitraryInteger<S> {
    type FromStrRadixErr = IntegerError;

    fn from_str_radix(text: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        ArbitraryInteger::from_str_radix(text, radix)
    }
}

impl<S: SegmentStore> Unsigned for ArbitraryInteger<S> {}

impl<S: SegmentStore> CheckedDiv for ArbitraryInteger<S> {
    #[inline]
    fn checked_div(&self, divisor: &Self) -> Option<Self> {
        self.div_rem(divisor).ok().map(|(quotient, _)| quotient)
    }
}

impl<S: SegmentStore> CheckedRem for ArbitraryInteger<S> {
    #[inline]
    fn checked_rem(&self, divisor: &Self) -> Option<Self> {
        self.div_rem(divisor).ok().map(|(_, remainder)| remainder)
    }
}

impl<S: SegmentStore> ToPrimitive for ArbitraryInteger<S> {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        ArbitraryInteger::to_u64(self).and_then(|value| i64::try_from(value).ok())
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        ArbitraryInteger::to_u64(self)
    }
}

// ============================================================================
// Fixed Width Only
// ============================================================================

impl<const N: usize> Bounded for Fixed<N> {
    #[inline]
    fn min_value() -> Self {
        Self::MIN
    }

    #[inline]
    fn max_value() -> Self {
        Self::MAX
    }
}

impl<const N: usize> WrappingAdd for Fixed<N> {
    #[inline]
    fn wrapping_add(&self, other: &Self) -> Self {
        *self + other
    }
}

impl<const N: usize> WrappingSub for Fixed<N> {
    #[inline]
    fn wrapping_sub(&self, other: &Self) -> Self {
        *self - other
    }
}

impl<const N: usize> WrappingMul for Fixed<N> {
    #[inline]
    fn wrapping_mul(&self, other: &Self) -> Self {
        *self * other
    }
}

// ============================================================================
// Width Conversion
// ============================================================================

impl<const N: usize> From<Fixed<N>> for Dynamic {
    #[inline]
    fn from(value: Fixed<N>) -> Self {
        Dynamic::from_segments(value.segments())
    }
}

impl<const N: usize> From<&Fixed<N>> for Dynamic {
    #[inline]
    fn from(value: &Fixed<N>) -> Self {
        Dynamic::from_segments(value.segments())
    }
}

impl Dynamic {
    /// Convert to a fixed width, keeping the value modulo `2^(N*64)`.
    #[inline]
    pub fn to_fixed<const N: usize>(&self) -> Fixed<N> {
        Fixed::from_segments(self.segments())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer::{U128, U256};

    fn sum_all<T: Num + Clone>(values: &[T]) -> T {
        values.iter().cloned().fold(T::zero(), |acc, v| acc + v)
    }

    #[test]
    fn test_zero_one() {
        assert!(Zero::is_zero(&U128::zero()));
        assert_eq!(<Dynamic as One>::one(), Dynamic::from(1u64));
    }

    #[test]
    fn test_generic_num_code() {
        let values = [U256::from(1u64), U256::from(2u64), U256::from(3u64)];
        assert_eq!(sum_all(&values), U256::from(6u64));

        assert_eq!(num_traits::pow(U128::from(2u64), 100), U128::ONE << 100);
        assert_eq!(num_traits::pow(Dynamic::from(2u64), 300), Dynamic::from(1u64) << 300);
    }

    #[test]
    fn test_num_from_str_radix() {
        assert_eq!(
            <Dynamic as Num>::from_str_radix("ff", 16),
            Ok(Dynamic::from(255u64))
        );
        assert_eq!(
            <U128 as Num>::from_str_radix("", 10),
            Err(IntegerError::EmptyInput)
        );
    }

    #[test]
    fn test_checked_division() {
        assert_eq!(
            CheckedDiv::checked_div(&U128::from(42u64), &U128::from(5u64)),
            Some(U128::from(8u64))
        );
        assert_eq!(CheckedDiv::checked_div(&U128::from(42u64), &U128::ZERO), None);
        assert_eq!(
            CheckedRem::checked_rem(&Dynamic::from(42u64), &Dynamic::from(5u64)),
            Some(Dynamic::from(2u64))
        );
        assert_eq!(CheckedRem::checked_rem(&Dynamic::from(42u64), &Dynamic::zero()), None);
    }

    #[test]
    fn test_to_primitive() {
        assert_eq!(ToPrimitive::to_u64(&U128::from(7u64)), Some(7));
        assert_eq!(ToPrimitive::to_u64(&(U128::ONE << 64)), None);
        assert_eq!(ToPrimitive::to_i64(&Dynamic::from(u64::MAX)), None);
        assert_eq!(ToPrimitive::to_i64(&Dynamic::from(9u64)), Some(9));
        assert_eq!(ToPrimitive::to_u32(&Dynamic::from(9u64)), Some(9));
    }

    #[test]
    fn test_bounded_and_wrapping() {
        assert_eq!(<U128 as Bounded>::max_value(), U128::MAX);
        assert_eq!(<U128 as Bounded>::min_value(), U128::ZERO);
        assert_eq!(U128::MAX.wrapping_add(&U128::ONE), U128::ZERO);
        assert_eq!(U128::ZERO.wrapping_sub(&U128::ONE), U128::MAX);
        assert_eq!(U128::MAX.wrapping_mul(&U128::MAX), U128::ONE);
    }

    #[test]
    fn test_limits_and_bounded_together() {
        use crate::integer::NumericLimits;

        // Both traits in scope: unqualified calls must resolve
        assert_eq!(U128::max_value(), U128::largest());
        assert_eq!(U256::min_value(), U256::smallest());
        assert_eq!(U256::lowest(), U256::ZERO);
    }

    #[test]
    fn test_width_conversion() {
        let fixed = U256::from(42u64) << 70;
        let dynamic = Dynamic::from(fixed);
        assert_eq!(dynamic.length(), 2);
        assert_eq!(dynamic, Dynamic::from(42u64) << 70);
        assert_eq!(dynamic.to_fixed::<4>(), fixed);

        let wide = Dynamic::from(1u64) << 200;
        assert_eq!(wide.to_fixed::<2>(), U128::ZERO);
        assert_eq!(Dynamic::from(&U128::MAX).to_string(), U128::MAX.to_string());
    }
}
