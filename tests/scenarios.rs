// ============================================================================
// Scenario Tests
// Concrete end-to-end behaviour and long-running arithmetic sequences
// ============================================================================

use arbitrary_integer::prelude::*;

// ============================================================================
// Boundary Scenarios
// ============================================================================

#[test]
fn test_fixed_carry_into_second_segment() {
    let result = U128::from(u64::MAX) + U128::from(1u64);
    assert_eq!(result.segments(), &[0, 1]);
    assert_eq!(to_decimal_string(&result), "18446744073709551616");
}

#[test]
fn test_fixed_zero_minus_one_wraps() {
    let result = U128::from(0u64) - U128::from(1u64);
    assert_eq!(result.segments(), &[u64::MAX, u64::MAX]);
    assert_eq!(
        to_decimal_string(&result),
        "340282366920938463463374607431768211455"
    );
}

#[test]
fn test_fixed_division_by_zero_is_rejected() {
    let dividend = U128::from(42u64);
    assert_eq!(
        dividend.div_rem(&U128::from(0u64)),
        Err(IntegerError::DivisionByZero)
    );
    assert_eq!(
        dividend.checked_div(&U128::ZERO),
        Err(IntegerError::DivisionByZero)
    );
    assert_eq!(
        dividend.checked_rem(&U128::ZERO),
        Err(IntegerError::DivisionByZero)
    );
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_division_operator_panics_on_zero() {
    let _ = U128::from(42u64) / U128::ZERO;
}

#[test]
fn test_dynamic_increment_grows() {
    let mut value = Dynamic::from(u64::MAX);
    value.increment();
    assert_eq!(value.length(), 2);
    assert_eq!(value, Dynamic::from(1u64) << 64);
    assert_eq!(value.to_string(), "18446744073709551616");
}

#[test]
fn test_dynamic_shift_roundtrip() {
    let shifted = Dynamic::from(1u64) << 200;
    assert_eq!(shifted.length(), 4);

    let restored = shifted >> 200;
    assert_eq!(restored, Dynamic::from(1u64));
    assert_eq!(restored.length(), 1);
}

#[test]
fn test_fixed_256_parse() {
    let parsed: U256 = from_decimal_str("340282366920938463463374607431768211455").unwrap();
    assert_eq!(parsed, (U256::from(1u64) << 128) - U256::from(1u64));
}

// ============================================================================
// Mode Asymmetries
// ============================================================================

#[test]
fn test_negative_construction() {
    assert_eq!(U128::from(-1i64), U128::MAX);
    assert_eq!(Dynamic::from(-1i64), Dynamic::from(u64::MAX));
    assert_eq!(Dynamic::from(-1i64).length(), 1);
}

#[test]
fn test_complement_of_zero() {
    assert_eq!(!U256::ZERO, U256::MAX);
    assert_eq!((!Dynamic::zero()).segments(), &[u64::MAX]);
}

#[test]
fn test_dynamic_decrement_of_zero_wraps_one_segment() {
    let mut value = Dynamic::zero();
    value.decrement();
    assert_eq!(value.segments(), &[u64::MAX]);

    let mut fixed = U128::ZERO;
    fixed.decrement();
    assert_eq!(fixed, U128::MAX);
}

#[test]
fn test_post_increment_and_decrement() {
    let mut value = U128::from(9u64);
    assert_eq!(value.post_increment(), U128::from(9u64));
    assert_eq!(value, U128::from(10u64));
    assert_eq!(value.post_decrement(), U128::from(10u64));
    assert_eq!(value, U128::from(9u64));

    let mut max = U128::MAX;
    max.increment();
    assert_eq!(max, U128::ZERO);
}

#[test]
fn test_ordering_across_lengths() {
    let small = Dynamic::from(u64::MAX);
    let large = Dynamic::from(1u64) << 64;
    assert!(small < large);
    assert!(U128::from(u64::MAX) < U128::ONE << 64);
    assert!(U128::MAX > U128::ONE << 127);
}

// ============================================================================
// Long-Running Sequences
// ============================================================================

#[test]
fn test_factorial_50() {
    let mut product = Dynamic::from(1u64);
    for n in 2..=50u64 {
        product *= Dynamic::from(n);
    }
    assert_eq!(
        product.to_string(),
        "30414093201713378043612608166064768844377641568960512000000000000"
    );

    // 50! exceeds 128 bits but fits in 256
    let mut fixed = U256::ONE;
    for n in 2..=50u64 {
        fixed *= U256::from(n);
    }
    assert_eq!(Dynamic::from(fixed), product);
}

#[test]
fn test_fibonacci_300() {
    let mut previous = Dynamic::zero();
    let mut current = Dynamic::from(1u64);
    for _ in 1..300 {
        let next = &previous + &current;
        previous = current;
        current = next;
    }
    assert_eq!(
        current.to_string(),
        "222232244629420445529739893461909967206666939096499764990979600"
    );
}

#[test]
fn test_fibonacci_consecutive_terms_are_coprime() {
    let mut previous = U512::ONE;
    let mut current = U512::ONE;
    for _ in 0..200 {
        let next = previous + current;
        previous = current;
        current = next;
        assert_eq!(previous.gcd(&current), U512::ONE);
    }
}

#[test]
fn test_repeated_doubling() {
    let mut dynamic = Dynamic::from(1u64);
    let mut fixed = U1024::ONE;
    for _ in 0..1000 {
        dynamic = &dynamic + &dynamic;
        fixed = fixed + fixed;
    }
    assert_eq!(dynamic, Dynamic::from(1u64) << 1000);
    assert_eq!(dynamic.length(), 16);
    assert_eq!(fixed, U1024::ONE << 1000);
    assert_eq!(Dynamic::from(fixed), dynamic);

    // 24 more doublings overflow 1024 bits
    for _ in 0..24 {
        fixed = fixed + fixed;
    }
    assert_eq!(fixed, U1024::ZERO);
}

#[test]
fn test_euclid_on_large_multiples() {
    let base = Dynamic::from(1_000_000_007u64).pow(5);
    let a = &base * Dynamic::from(6u64);
    let b = &base * Dynamic::from(35u64);
    assert_eq!(a.gcd(&b), base);
    assert_eq!(a.gcd(&Dynamic::zero()), a);
}

#[test]
fn test_digit_sum_of_power() {
    // Sum of the decimal digits of 2^1000
    let value = U1024::ONE << 1000;
    let digit_sum: u32 = value
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .sum();
    assert_eq!(digit_sum, 1366);
}

#[test]
fn test_dynamic_and_fixed_agree() {
    let values = [0u64, 1, 7, 1 << 40, u64::MAX - 3, u64::MAX];
    for &x in &values {
        for &y in &values {
            let (dx, dy) = (Dynamic::from(x), Dynamic::from(y));
            let (fx, fy) = (U256::from(x), U256::from(y));

            assert_eq!(Dynamic::from(fx + fy), &dx + &dy);
            assert_eq!(Dynamic::from(fx * fy), &dx * &dy);
            if y != 0 {
                assert_eq!(Dynamic::from(fx / fy), &dx / &dy);
                assert_eq!(Dynamic::from(fx % fy), &dx % &dy);
            }
        }
    }
}
