//! Overflow-safe arithmetic helpers for financial calculations.
//!
//! All functions use checked arithmetic and panic with the shared
//! [`ContractError`] arithmetic codes, so failures surface with wire-stable
//! identities instead of free-form messages.

use soroban_sdk::{panic_with_error, Env};

use crate::errors::ContractError;

/// Checked `i128` addition.
#[inline]
#[must_use]
pub fn add_i128(e: &Env, a: i128, b: i128) -> i128 {
    a.checked_add(b)
        .unwrap_or_else(|| panic_with_error!(e, ContractError::Overflow))
}

/// Checked `i128` subtraction.
#[inline]
#[must_use]
pub fn sub_i128(e: &Env, a: i128, b: i128) -> i128 {
    a.checked_sub(b)
        .unwrap_or_else(|| panic_with_error!(e, ContractError::Underflow))
}

/// Checked `i128` multiplication.
#[inline]
#[must_use]
pub fn mul_i128(e: &Env, a: i128, b: i128) -> i128 {
    a.checked_mul(b)
        .unwrap_or_else(|| panic_with_error!(e, ContractError::Overflow))
}

/// Checked `i128` division. Panics `DivideByZero` for a zero divisor.
#[inline]
#[must_use]
pub fn div_i128(e: &Env, a: i128, b: i128) -> i128 {
    if b == 0 {
        panic_with_error!(e, ContractError::DivideByZero);
    }
    a.checked_div(b)
        .unwrap_or_else(|| panic_with_error!(e, ContractError::Overflow))
}

/// Checked `a * b / c` with floor division.
#[inline]
#[must_use]
pub fn mul_div(e: &Env, a: i128, b: i128, c: i128) -> i128 {
    div_i128(e, mul_i128(e, a, b), c)
}

/// Calculate a basis-point share of an amount: `amount * bps / 10_000`.
#[inline]
#[must_use]
pub fn bps(e: &Env, amount: i128, bps: u32) -> i128 {
    mul_div(e, amount, bps as i128, 10_000)
}

/// `10^exp` as i128. Panics `Overflow` past the i128 range (exp > 38).
#[inline]
#[must_use]
pub fn pow10(e: &Env, exp: u32) -> i128 {
    10_i128
        .checked_pow(exp)
        .unwrap_or_else(|| panic_with_error!(e, ContractError::Overflow))
}
