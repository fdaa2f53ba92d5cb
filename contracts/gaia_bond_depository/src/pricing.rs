//! Debt, price, and vesting arithmetic.
//!
//! Pure functions over [`BondTerms`], [`DebtState`], and [`Bond`] values.
//! Storage never enters here, so every rule is testable at exact numbers;
//! `lib.rs` owns reading state and committing results.

use gaia_common::math;
use soroban_sdk::Env;

use crate::types::{Bond, BondTerms, DebtState};

/// 1e9 fixed point shared by prices, debt ratios, and payout decimals.
pub const PRICE_SCALE: i128 = 1_000_000_000;

/// Payouts below 0.01 of the payout asset are rejected as dust.
pub const MIN_PAYOUT: i128 = 10_000_000;

/// Full vesting, in basis points.
pub const FULLY_VESTED_BPS: u32 = 10_000;

/// Debt that has linearly decayed off the books since `last_decay`, capped
/// at the whole outstanding amount once `vesting_term` has passed.
pub fn debt_decay(e: &Env, debt: &DebtState, vesting_term: u64, now: u64) -> i128 {
    let elapsed = now.saturating_sub(debt.last_decay);
    if elapsed >= vesting_term {
        return debt.total_debt;
    }
    math::mul_div(e, debt.total_debt, elapsed as i128, vesting_term as i128)
}

/// Outstanding debt right now: the stored figure minus pending decay.
pub fn current_debt(e: &Env, debt: &DebtState, vesting_term: u64, now: u64) -> i128 {
    math::sub_i128(e, debt.total_debt, debt_decay(e, debt, vesting_term, now))
}

/// Debt as a 1e9-scale fraction of the payout supply; 0 while nothing has
/// been issued.
pub fn debt_ratio(e: &Env, current_debt: i128, payout_supply: i128) -> i128 {
    if payout_supply <= 0 {
        return 0;
    }
    math::mul_div(e, current_debt, PRICE_SCALE, payout_supply)
}

/// `max(minimum_price, control_variable * debt_ratio)`, 1e9 scale.
pub fn bond_price(e: &Env, terms: &BondTerms, debt_ratio: i128) -> i128 {
    let scaled = math::mul_i128(e, terms.control_variable, debt_ratio);
    if scaled > terms.minimum_price {
        scaled
    } else {
        terms.minimum_price
    }
}

/// Payout purchasable with `value` at `price` (floor).
pub fn payout_for(e: &Env, value: i128, price: i128) -> i128 {
    math::mul_div(e, value, PRICE_SCALE, price)
}

/// Largest single payout: `max_payout_bps` of the payout supply.
pub fn max_payout(e: &Env, payout_supply: i128, max_payout_bps: u32) -> i128 {
    math::bps(e, payout_supply, max_payout_bps)
}

/// Vesting progress of `bond` at `now`, in bps of the payout outstanding
/// since the last interaction. A window of zero width counts as fully
/// vested.
pub fn percent_vested_bps(bond: &Bond, now: u64) -> u32 {
    let window = bond.vesting_end.saturating_sub(bond.last_interaction);
    if window == 0 {
        return FULLY_VESTED_BPS;
    }
    let elapsed = now.saturating_sub(bond.last_interaction);
    if elapsed >= window {
        return FULLY_VESTED_BPS;
    }
    ((elapsed as u128 * FULLY_VESTED_BPS as u128) / window as u128) as u32
}

/// Endpoint for a merged position: the payout-weighted average of the old
/// bond's remaining time and a full fresh term, measured from `now`. An old
/// bond past its endpoint contributes zero remaining time, so the result
/// never lands before `now`.
pub fn blended_vesting_end(
    e: &Env,
    now: u64,
    old: &Bond,
    vesting_term: u64,
    new_payout: i128,
) -> u64 {
    let remaining = old.vesting_end.saturating_sub(now) as i128;
    let weighted = math::add_i128(
        e,
        math::mul_i128(e, remaining, old.payout),
        math::mul_i128(e, vesting_term as i128, new_payout),
    );
    let span = math::div_i128(e, weighted, math::add_i128(e, old.payout, new_payout));
    now.saturating_add(span as u64)
}
