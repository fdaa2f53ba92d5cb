#![cfg(test)]

use soroban_sdk::Env;

use crate::math::*;

#[test]
fn test_add_sub_roundtrip() {
    let e = Env::default();
    let a = 985_000_000_i128;
    let b = 15_000_000_i128;
    assert_eq!(add_i128(&e, a, b), 1_000_000_000);
    assert_eq!(sub_i128(&e, add_i128(&e, a, b), b), a);
}

#[test]
fn test_add_handles_extremes() {
    let e = Env::default();
    assert_eq!(add_i128(&e, i128::MAX - 1, 1), i128::MAX);
    assert_eq!(sub_i128(&e, i128::MIN + 1, 1), i128::MIN);
}

#[test]
fn test_mul_div_floors() {
    let e = Env::default();
    // 7 * 3 / 2 = 10.5 floors to 10.
    assert_eq!(mul_div(&e, 7, 3, 2), 10);
    assert_eq!(mul_div(&e, 0, 1_000_000, 3), 0);
}

#[test]
fn test_mul_div_large_intermediate() {
    let e = Env::default();
    // value * 1e9 / price shapes: intermediates well beyond u64.
    let value = 30_000_000_000_000_i128;
    assert_eq!(mul_div(&e, value, 1_000_000_000, 1_000_000_000), value);
    assert_eq!(
        mul_div(&e, value, 1_000_000_000, 2_000_000_000),
        value / 2
    );
}

#[test]
fn test_bps_exact_and_floor() {
    let e = Env::default();
    // The production DAO fee: 150 bps of 1_000_000 units.
    assert_eq!(bps(&e, 1_000_000, 150), 15_000);
    // 150 bps of 999_999 floors (14_999.985 -> 14_999).
    assert_eq!(bps(&e, 999_999, 150), 14_999);
    assert_eq!(bps(&e, 1_000_000, 0), 0);
    assert_eq!(bps(&e, 1_000_000, 10_000), 1_000_000);
}

#[test]
fn test_pow10_decimal_scales() {
    let e = Env::default();
    assert_eq!(pow10(&e, 0), 1);
    assert_eq!(pow10(&e, 6), 1_000_000);
    assert_eq!(pow10(&e, 9), 1_000_000_000);
    assert_eq!(pow10(&e, 38), 10_i128.pow(38));
}
