//! Unit tests for the pure pricing and vesting arithmetic.

#![cfg(test)]

use soroban_sdk::Env;

use crate::pricing;
use crate::{Bond, BondTerms, DebtState};

fn terms(control_variable: i128, minimum_price: i128) -> BondTerms {
    BondTerms {
        control_variable,
        minimum_price,
        max_payout_bps: 10_000,
        fee_bps: 150,
        max_debt: 20_000_000_000_000,
        vesting_term: 432_000,
    }
}

fn bond(last_interaction: u64, vesting_end: u64) -> Bond {
    Bond {
        payout: 985_000_000,
        value: 1_000_000_000,
        vesting_end,
        last_interaction,
        price_paid: 1_000_000_000,
    }
}

#[test]
fn test_debt_decay_is_linear_and_capped() {
    let e = Env::default();
    let debt = DebtState {
        total_debt: 1_000_000_000,
        last_decay: 0,
    };
    assert_eq!(pricing::debt_decay(&e, &debt, 432_000, 0), 0);
    assert_eq!(pricing::debt_decay(&e, &debt, 432_000, 86_400), 200_000_000);
    assert_eq!(pricing::debt_decay(&e, &debt, 432_000, 432_000), 1_000_000_000);
    assert_eq!(pricing::debt_decay(&e, &debt, 432_000, 999_999), 1_000_000_000);
}

#[test]
fn test_debt_decay_tolerates_a_clock_behind_last_decay() {
    let e = Env::default();
    let debt = DebtState {
        total_debt: 1_000_000_000,
        last_decay: 500_000,
    };
    assert_eq!(pricing::debt_decay(&e, &debt, 432_000, 400_000), 0);
}

#[test]
fn test_current_debt_is_the_undecayed_remainder() {
    let e = Env::default();
    let debt = DebtState {
        total_debt: 1_000_000_000,
        last_decay: 0,
    };
    assert_eq!(pricing::current_debt(&e, &debt, 432_000, 86_400), 800_000_000);
    assert_eq!(pricing::current_debt(&e, &debt, 432_000, 432_000), 0);
}

#[test]
fn test_debt_ratio_scales_against_supply() {
    let e = Env::default();
    assert_eq!(pricing::debt_ratio(&e, 1_000_000_000, 0), 0);
    assert_eq!(
        pricing::debt_ratio(&e, 500_000_000, 2_000_000_000_000),
        250_000
    );
    // Floor division.
    assert_eq!(pricing::debt_ratio(&e, 1, 3), 333_333_333);
}

#[test]
fn test_bond_price_is_the_scaled_ratio_or_the_floor() {
    let e = Env::default();
    let t = terms(70, 1_000_000_000);
    assert_eq!(pricing::bond_price(&e, &t, 0), 1_000_000_000);
    // 70 * 14_285_714 lands one unit under par; the floor still binds.
    assert_eq!(pricing::bond_price(&e, &t, 14_285_714), 1_000_000_000);
    // One ratio step later the scaled price clears it.
    assert_eq!(pricing::bond_price(&e, &t, 14_285_715), 1_000_000_050);
}

#[test]
fn test_payout_for_divides_value_by_price() {
    let e = Env::default();
    assert_eq!(
        pricing::payout_for(&e, 1_000_000_000, 1_000_000_000),
        1_000_000_000
    );
    assert_eq!(
        pricing::payout_for(&e, 1_000_000_000, 2_000_000_000),
        500_000_000
    );
    // Floors.
    assert_eq!(pricing::payout_for(&e, 10, 3_000_000_000), 3);
}

#[test]
fn test_max_payout_is_a_supply_share() {
    let e = Env::default();
    assert_eq!(
        pricing::max_payout(&e, 2_000_000_000_000, 10_000),
        2_000_000_000_000
    );
    assert_eq!(
        pricing::max_payout(&e, 2_000_000_000_000, 500),
        100_000_000_000
    );
}

#[test]
fn test_percent_vested_walks_the_window() {
    let b = bond(0, 432_000);
    assert_eq!(pricing::percent_vested_bps(&b, 0), 0);
    assert_eq!(pricing::percent_vested_bps(&b, 172_800), 4_000);
    assert_eq!(pricing::percent_vested_bps(&b, 432_000), 10_000);
    assert_eq!(pricing::percent_vested_bps(&b, 1_000_000_000), 10_000);
}

#[test]
fn test_percent_vested_measures_from_last_interaction() {
    // A partial redemption at 172_800 leaves a 259_200s window.
    let b = bond(172_800, 432_000);
    assert_eq!(pricing::percent_vested_bps(&b, 172_800), 0);
    assert_eq!(pricing::percent_vested_bps(&b, 302_400), 5_000);
    assert_eq!(pricing::percent_vested_bps(&b, 432_000), 10_000);
}

#[test]
fn test_percent_vested_treats_zero_window_as_vested() {
    let b = bond(432_000, 432_000);
    assert_eq!(pricing::percent_vested_bps(&b, 432_000), 10_000);
}

#[test]
fn test_blended_vesting_end_averages_by_payout() {
    let e = Env::default();
    // Equal payouts: remaining 259_200 and fresh 432_000 average to
    // 345_600 from now.
    let old = bond(0, 432_000);
    assert_eq!(
        pricing::blended_vesting_end(&e, 172_800, &old, 432_000, 985_000_000),
        518_400
    );
}

#[test]
fn test_blended_vesting_end_weights_the_larger_payout() {
    let e = Env::default();
    let mut old = bond(0, 300_000);
    old.payout = 9_000_000;
    // 9:1 weighting of 100_000 remaining against a fresh 432_000 term.
    assert_eq!(
        pricing::blended_vesting_end(&e, 200_000, &old, 432_000, 1_000_000),
        200_000 + 133_200
    );
}

#[test]
fn test_blended_vesting_end_never_lands_before_now() {
    let e = Env::default();
    // The old bond expired long ago; only the fresh term counts, weighted
    // by the new payout's share.
    let mut old = bond(0, 100);
    old.payout = 1_000_000;
    assert_eq!(
        pricing::blended_vesting_end(&e, 200_000, &old, 432_000, 1_000_000),
        200_000 + 216_000
    );
}
