// ============================================================================
// Integer Errors
// Error types for big-integer arithmetic and text conversion
// ============================================================================

use std::fmt;

/// Errors that can occur during big-integer operations.
///
/// Arithmetic is total apart from division: overflow wraps (fixed width) or
/// grows the value (dynamic width), so the only arithmetic failure is a zero
/// divisor. The remaining variants describe rejected text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegerError {
    /// Divisor of a division or remainder was zero
    DivisionByZero,
    /// Input string was empty
    EmptyInput,
    /// Input string contained a character that is not a digit of the radix
    InvalidDigit {
        /// Character position of the offending digit
        index: usize,
        /// The rejected character
        found: char,
    },
    /// Radix outside 2..=36
    InvalidRadix(u32),
}

impl fmt::Display for IntegerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegerError::DivisionByZero => write!(f, "division by zero"),
            IntegerError::EmptyInput => write!(f, "invalid input: empty string"),
            IntegerError::InvalidDigit { index, found } => {
                write!(f, "invalid input: unexpected {:?} at position {}", found, index)
            },
            IntegerError::InvalidRadix(radix) => {
                write!(f, "invalid radix {}: expected a value in 2..=36", radix)
            },
        }
    }
}

impl std::error::Error for IntegerError {}

/// Result type alias for integer operations
pub type IntegerResult<T> = Result<T, IntegerError>;
