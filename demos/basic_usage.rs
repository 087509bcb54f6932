// ============================================================================
// Basic Usage Example
// ============================================================================

use arbitrary_integer::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Arbitrary Integer Example ===\n");

    // Fixed width: wraps at 2^128
    println!("Fixed width (U128):");
    let max = U128::MAX;
    println!("  MAX         = {}", max);
    println!("  MAX + 1     = {}", max + U128::ONE);
    println!("  0 - 1       = {}", U128::ZERO - U128::ONE);
    println!("  2^64        = {}", U128::from(u64::MAX) + U128::ONE);
    println!("  digits10    = {}", <U128 as NumericLimits>::DIGITS10);

    // Dynamic width: grows as needed
    println!("\nDynamic width:");
    let mut factorial = Dynamic::from(1u64);
    for n in 2..=40u64 {
        factorial *= Dynamic::from(n);
    }
    println!("  40!         = {}", factorial);
    println!("  segments    = {}", factorial.length());
    println!("  hex         = {:#x}", factorial);

    let shifted = Dynamic::from(1u64) << 200;
    println!("  1 << 200    = {} ({} segments)", shifted, shifted.length());
    println!("  >> 200      = {}", shifted >> 200);

    // Division
    println!("\nDivision:");
    let (quotient, remainder) = match factorial.div_rem(&Dynamic::from(1_000_000_007u64)) {
        Ok(result) => result,
        Err(e) => {
            println!("  error: {}", e);
            return;
        }
    };
    println!("  40! / p     = {}", quotient);
    println!("  40! % p     = {}", remainder);

    match U128::from(42u64).div_rem(&U128::ZERO) {
        Ok(_) => println!("  42 / 0 unexpectedly succeeded"),
        Err(e) => println!("  42 / 0      -> {}", e),
    }

    // Parsing
    println!("\nParsing:");
    for text in ["340282366920938463463374607431768211455", "000123", "", "12a"] {
        match text.parse::<U256>() {
            Ok(value) => println!("  {:?} -> {}", text, value),
            Err(e) => println!("  {:?} -> {}", text, e),
        }
    }

    // Width conversion
    let narrowed: U128 = (Dynamic::from(1u64) << 130).to_fixed::<2>();
    println!("\n2^130 narrowed to U128 = {}", narrowed);

    println!("\n=== Example Complete ===");
}
