// ============================================================================
// Decimal Codec
// Text conversion by repeated division (out) and multiply-accumulate (in)
// ============================================================================

use super::errors::{IntegerError, IntegerResult};
use super::store::SegmentStore;
use super::value::ArbitraryInteger;
use std::fmt;
use std::str::FromStr;

/// Render `value` in base 10.
///
/// Zero renders as `"0"`; there are no leading zeros, signs or separators.
/// Each digit costs one full long division, so this is quadratic in the
/// number of digits.
pub fn to_decimal_string<S: SegmentStore>(value: &ArbitraryInteger<S>) -> String {
    value.to_str_radix(10)
}

/// Parse an unsigned base-10 string.
///
/// Returns `None` for an empty string or any character outside `0-9`
/// (including signs and whitespace). Leading zeros are accepted. There is no
/// overflow check: fixed widths keep the value modulo `2^bits`, dynamic
/// widths grow.
///
/// # Example
/// ```
/// use arbitrary_integer::{from_decimal_str, U256};
///
/// let value: U256 = from_decimal_str("340282366920938463463374607431768211455").unwrap();
/// assert_eq!(value, (U256::ONE << 128) - U256::ONE);
/// assert!(from_decimal_str::<_>("12a").map(|v: U256| v).is_none());
/// ```
pub fn from_decimal_str<S: SegmentStore>(text: &str) -> Option<ArbitraryInteger<S>> {
    ArbitraryInteger::from_str_radix(text, 10).ok()
}

impl<S: SegmentStore> ArbitraryInteger<S> {
    /// Parse a string of digits in `radix` (2..=36, letters in either case).
    ///
    /// Digits are accumulated left to right as `result * radix + digit`.
    ///
    /// # Errors
    /// - `InvalidRadix` if `radix` is outside 2..=36
    /// - `EmptyInput` if `text` is empty
    /// - `InvalidDigit` at the first character that is not a digit of `radix`
    pub fn from_str_radix(text: &str, radix: u32) -> IntegerResult<Self> {
        if !(2..=36).contains(&radix) {
            return Err(IntegerError::InvalidRadix(radix));
        }
        if text.is_empty() {
            tracing::debug!("rejected empty integer text");
            return Err(IntegerError::EmptyInput);
        }

        let base = Self::from(radix);
        let mut result = Self::zero();
        for (index, found) in text.chars().enumerate() {
            let Some(digit) = found.to_digit(radix) else {
                tracing::debug!(index, ?found, radix, "rejected integer text");
                return Err(IntegerError::InvalidDigit { index, found });
            };
            result.mul_assign_ref(&base);
            result.add_assign_ref(&Self::from(digit));
        }

        Ok(result)
    }

    /// Render in `radix` (2..=36, lowercase letters).
    ///
    /// # Panics
    /// Panics if `radix` is outside 2..=36.
    pub fn to_str_radix(&self, radix: u32) -> String {
        assert!((2..=36).contains(&radix), "radix must be in 2..=36");

        if self.is_zero() {
            return "0".to_string();
        }

        let base = Self::from(radix);
        let mut digits = Vec::new();
        let mut rest = self.clone();
        while rest.as_bool() {
            let (quotient, remainder) = rest.div_rem_nonzero(&base);
            digits.push(remainder.tail() as u32);
            rest = quotient;
        }

        digits
            .iter()
            .rev()
            .filter_map(|&digit| char::from_digit(digit, radix))
            .collect()
    }
}

// ============================================================================
// Formatting Traits
// ============================================================================

impl<S: SegmentStore> fmt::Display for ArbitraryInteger<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &to_decimal_string(self))
    }
}

impl<S: SegmentStore> fmt::LowerHex for ArbitraryInteger<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_str_radix(16))
    }
}

impl<S: SegmentStore> FromStr for ArbitraryInteger<S> {
    type Err = IntegerError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "123" -> 123
    /// - "000123" -> 123
    /// - "" -> `EmptyInput`
    /// - "-1", " 1", "1_000" -> `InvalidDigit`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}
