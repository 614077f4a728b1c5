//! Integration tests for entities_utilities crate
//!
//! These tests verify big number and rational value operations end-to-end.

use std::cmp::Ordering;

use entities_utilities::*;
use quickcheck_macros::quickcheck;

fn frac(n: i64, d: i64) -> RationalValue {
    RationalValue::from_fraction(n, d).unwrap()
}

#[test]
fn test_big_number_operations_integration() {
    let big1 = BigNumber::from_i64(1234567890123456i64);
    let big2 = BigNumber::from_i64(-987654321098765i64);

    let prod = big1.times(&big2);
    assert!(prod.to_i64().is_none());

    let (q, r) = prod.div_rem(&big2).unwrap();
    assert_eq!(q, big1);
    assert!(r.is_zero());

    let sum = big1.plus(&big2);
    assert_eq!(sum.to_i64(), Some(1234567890123456 - 987654321098765));
}

#[test]
fn test_big_number_edge_cases() {
    let max_i64 = BigNumber::from_i64(i64::MAX);
    assert_eq!(max_i64.to_i64(), Some(i64::MAX));

    let min_i64 = BigNumber::from_i64(i64::MIN);
    assert_eq!(min_i64.to_i64(), Some(i64::MIN));
    assert!(min_i64.neg().to_i64().is_none());
    assert_eq!(min_i64.neg().to_u64(), Some(1u64 << 63));

    assert!(BigNumber::from_i64(-1).to_u64().is_none());
}

#[test]
fn test_rational_chain_stays_exact() {
    // 1/2 + 1/4 + ... + 1/2^80 = 1 - 1/2^80
    let mut sum = RationalValue::zero();
    let mut term = frac(1, 2);
    for _ in 0..80 {
        sum = sum.plus(&term);
        term = term.times(&frac(1, 2));
    }
    let expected = RationalValue::from_i64(1).minus(&RationalValue::new(
        BigNumber::one(),
        BigNumber::one().shl(80),
    )
    .unwrap());
    assert_eq!(sum, expected);
    assert_eq!(sum.denominator(), &BigNumber::one().shl(80));
}

#[test]
fn test_rational_third_times_three() {
    let one = RationalValue::from_i64(1);
    let three = RationalValue::from_i64(3);
    let product = one.div(&three).unwrap().times(&three);
    assert_eq!(product, one);
}

#[quickcheck]
fn prop_normalized_form(n: i64, d: i64) -> bool {
    if d == 0 {
        return RationalValue::from_fraction(n, d) == Err(RationalError::DivisionByZero);
    }
    let r = frac(n, d);
    let g = r.numerator().gcd(r.denominator());
    !r.denominator().is_negative()
        && !r.denominator().is_zero()
        && (r.is_zero() || g == BigNumber::one())
        && (!r.is_zero() || r.denominator() == &BigNumber::one())
}

#[quickcheck]
fn prop_total_order(a: i32, b: i32, c: i32, d: i32) -> bool {
    let d1 = if b == 0 { 1 } else { b as i64 };
    let d2 = if d == 0 { 1 } else { d as i64 };
    let x = frac(a as i64, d1);
    let y = frac(c as i64, d2);
    let outcomes = [x < y, x == y, x > y];
    let exactly_one = outcomes.iter().filter(|&&o| o).count() == 1;
    // Cross-check against i128 cross multiplication
    let reference = (a as i128 * d2 as i128 * d1.signum() as i128 * d2.signum() as i128)
        .cmp(&(c as i128 * d1 as i128 * d1.signum() as i128 * d2.signum() as i128));
    exactly_one && x.comp(&y) == reference
}

#[quickcheck]
fn prop_add_then_sub_is_identity(a: i64, b: i64, c: i64, d: i64) -> bool {
    let x = frac(a, if b == 0 { 1 } else { b });
    let y = frac(c, if d == 0 { 1 } else { d });
    x.plus(&y).minus(&y) == x
}

#[quickcheck]
fn prop_mul_then_div_is_identity(a: i64, b: i64, c: i64, d: i64) -> bool {
    let x = frac(a, if b == 0 { 1 } else { b });
    let y = frac(c, if d == 0 { 1 } else { d });
    if y.is_zero() {
        return x.div(&y) == Err(RationalError::DivisionByZero);
    }
    x.times(&y).div(&y).unwrap() == x
}

#[test]
fn test_comparison_consistent_with_sign() {
    assert_eq!(frac(-1, 3).comp(&RationalValue::zero()), Ordering::Less);
    assert_eq!(frac(1, 3).comp(&RationalValue::zero()), Ordering::Greater);
    assert_eq!(frac(0, 3).comp(&RationalValue::zero()), Ordering::Equal);
}
