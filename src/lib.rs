// ============================================================================
// Arbitrary Integer Library
// Fixed-width and growable unsigned big integers over 64-bit segments
// ============================================================================

//! # Arbitrary Integer
//!
//! Unsigned big-integer arithmetic in two flavours sharing one set of
//! algorithms:
//!
//! - **Fixed width** ([`Fixed<N>`], [`U128`] ... [`U4096`]): `N * 64` bits
//!   chosen at compile time, modular (wrapping) arithmetic, `Copy`.
//! - **Dynamic width** ([`Dynamic`]): grows as operations demand and is
//!   trimmed back to the shortest representation afterwards.
//!
//! ## Features
//!
//! - **Full operator set**: `+ - * / %`, bitwise `& | ^ !`, shifts, negation,
//!   comparisons, increment/decrement
//! - **Defined overflow**: wraparound for fixed widths, growth for dynamic
//! - **Decimal codec** with strict parsing, plus any radix in 2..=36
//! - **Numeric limits** and `num-traits` integration for generic code
//! - **Optional serde** support (decimal strings) behind the `serde` feature
//!
//! ## Example
//!
//! ```rust
//! use arbitrary_integer::prelude::*;
//!
//! // Fixed width wraps
//! let max = U128::from(u64::MAX);
//! assert_eq!((max + U128::ONE).to_string(), "18446744073709551616");
//! assert_eq!(U128::ZERO - U128::ONE, U128::MAX);
//!
//! // Dynamic width grows
//! let mut big = Dynamic::from(1u64) << 200;
//! assert_eq!(big.length(), 4);
//! big >>= 200;
//! assert_eq!(big, Dynamic::from(1u64));
//!
//! // Division by zero is reported, not computed
//! assert_eq!(
//!     U128::from(42u64).div_rem(&U128::ZERO),
//!     Err(IntegerError::DivisionByZero)
//! );
//!
//! // Text round trip
//! let parsed: U256 = from_decimal_str("340282366920938463463374607431768211455").unwrap();
//! assert_eq!(parsed, (U256::ONE << 128) - U256::ONE);
//! ```

pub mod integer;

pub use integer::{
    from_decimal_str, to_decimal_string, ArbitraryInteger, Dynamic, Fixed, IntegerError,
    IntegerResult, NumericLimits, U1024, U128, U2048, U256, U4096, U512,
};

// Re-exports for convenience
pub mod prelude {
    pub use crate::integer::{
        from_decimal_str, to_decimal_string, ArbitraryInteger, Dynamic, Fixed, IntegerError,
        IntegerResult, NumericLimits, SegmentStore, U1024, U128, U2048, U256, U4096, U512,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_fixed_and_dynamic_agree_on_small_values() {
        let dyn_a = Dynamic::from(12345u64);
        let dyn_b = Dynamic::from(67890u64);
        let fix_a = U128::from(12345u64);
        let fix_b = U128::from(67890u64);

        assert_eq!(
            to_decimal_string(&(&dyn_a + &dyn_b)),
            to_decimal_string(&(fix_a + fix_b))
        );
        assert_eq!(
            to_decimal_string(&(&dyn_a * &dyn_b)),
            to_decimal_string(&(fix_a * fix_b))
        );
        assert_eq!(
            to_decimal_string(&(&dyn_b / &dyn_a)),
            to_decimal_string(&(fix_b / fix_a))
        );
    }

    #[test]
    fn test_dynamic_exceeds_fixed_width() {
        let mut value = Dynamic::from(1u64);
        value <<= 200;

        assert!(value.length() >= 4);
        assert!(to_decimal_string(&value).len() > 38);
        assert_eq!(U128::ONE << 200, U128::ZERO);
    }

    #[test]
    fn test_complex_expression() {
        let a = Dynamic::from(12345u64);
        let b = Dynamic::from(67890u64);
        let c = Dynamic::from(111u64);

        let result = ((&a + &b) * &c - (&a * &b / &c)) % Dynamic::from(1_000_000u64);
        // (80235 * 111 - 838102050 / 111) % 1000000
        // = (8906085 - 7550468) % 1000000 = 355617
        assert_eq!(result, Dynamic::from(355_617u64));
    }
}
