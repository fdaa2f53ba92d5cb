//! Registry state-machine tests: queue, timelock, toggle, revoke.

#![cfg(test)]

use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{Address, Env};

use crate::test_helpers::*;
use crate::{Role, RoleState};

// ═══════════════════════════════════════════════════════════════════
// 1. Initialization
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_initialize_seeds_first_reserve_token() {
    let e = Env::default();
    let f = setup_with_delay(&e, 0);

    assert!(f.treasury.is_active(&Role::ReserveToken, &f.usdc.address));
    assert_eq!(
        f.treasury.registry_entry(&Role::ReserveToken, &f.usdc.address),
        Some(RoleState::Active)
    );
    assert_eq!(f.treasury.admin(), f.admin);
    assert_eq!(f.treasury.payout_token(), f.gaia.address);
    assert_eq!(f.treasury.total_reserves(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn test_initialize_twice_panics() {
    let e = Env::default();
    let f = setup_with_delay(&e, 0);
    f.treasury
        .initialize(&f.admin, &f.gaia.address, &f.usdc.address, &0_u64);
}

// ═══════════════════════════════════════════════════════════════════
// 2. Queue
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_queue_records_eligibility_timestamp() {
    let e = Env::default();
    e.ledger().with_mut(|li| li.timestamp = 1_000_000);
    let f = setup_with_delay(&e, ONE_DAY);
    let who = Address::generate(&e);

    let eligible_at = f.treasury.queue(&f.admin, &Role::ReserveDepositor, &who);

    assert_eq!(eligible_at, 1_000_000 + ONE_DAY);
    assert_eq!(
        f.treasury.registry_entry(&Role::ReserveDepositor, &who),
        Some(RoleState::Queued(eligible_at))
    );
    assert!(!f.treasury.is_active(&Role::ReserveDepositor, &who));
}

#[test]
#[should_panic(expected = "Error(Contract, #105)")]
fn test_queue_twice_panics() {
    let e = Env::default();
    let f = setup_with_delay(&e, ONE_DAY);
    let who = Address::generate(&e);
    f.treasury.queue(&f.admin, &Role::ReserveDepositor, &who);
    f.treasury.queue(&f.admin, &Role::ReserveDepositor, &who);
}

#[test]
#[should_panic(expected = "Error(Contract, #106)")]
fn test_queue_active_pair_panics() {
    let e = Env::default();
    let f = setup_with_delay(&e, 0);
    // The seeded reserve token is already active.
    f.treasury
        .queue(&f.admin, &Role::ReserveToken, &f.usdc.address);
}

#[test]
#[should_panic(expected = "Error(Contract, #100)")]
fn test_queue_requires_admin() {
    let e = Env::default();
    let f = setup_with_delay(&e, 0);
    let outsider = Address::generate(&e);
    f.treasury
        .queue(&outsider, &Role::ReserveDepositor, &outsider);
}

// ═══════════════════════════════════════════════════════════════════
// 3. Toggle and the timelock
// ═══════════════════════════════════════════════════════════════════

#[test]
#[should_panic(expected = "Error(Contract, #103)")]
fn test_toggle_never_queued_panics() {
    let e = Env::default();
    let f = setup_with_delay(&e, 0);
    let who = Address::generate(&e);
    f.treasury
        .toggle(&f.admin, &Role::ReserveDepositor, &who, &None);
}

#[test]
#[should_panic(expected = "Error(Contract, #104)")]
fn test_toggle_before_delay_panics() {
    let e = Env::default();
    let f = setup_with_delay(&e, ONE_DAY);
    let who = Address::generate(&e);
    f.treasury.queue(&f.admin, &Role::ReserveDepositor, &who);
    advance_time(&e, ONE_DAY - 1);
    f.treasury
        .toggle(&f.admin, &Role::ReserveDepositor, &who, &None);
}

#[test]
fn test_toggle_at_exact_eligibility_activates() {
    let e = Env::default();
    let f = setup_with_delay(&e, ONE_DAY);
    let who = Address::generate(&e);
    f.treasury.queue(&f.admin, &Role::ReserveDepositor, &who);
    advance_time(&e, ONE_DAY);

    let now_active = f
        .treasury
        .toggle(&f.admin, &Role::ReserveDepositor, &who, &None);

    assert!(now_active);
    assert!(f.treasury.is_active(&Role::ReserveDepositor, &who));
    // The pending entry was consumed by activation.
    assert_eq!(
        f.treasury.registry_entry(&Role::ReserveDepositor, &who),
        Some(RoleState::Active)
    );
}

#[test]
fn test_toggle_active_pair_deactivates() {
    let e = Env::default();
    let f = setup_with_delay(&e, 0);
    let who = Address::generate(&e);
    grant_role(&f, &e, Role::ReserveDepositor, &who);

    let now_active = f
        .treasury
        .toggle(&f.admin, &Role::ReserveDepositor, &who, &None);

    assert!(!now_active);
    assert!(!f.treasury.is_active(&Role::ReserveDepositor, &who));
    assert_eq!(
        f.treasury.registry_entry(&Role::ReserveDepositor, &who),
        None
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #103)")]
fn test_reactivation_requires_fresh_queue() {
    let e = Env::default();
    let f = setup_with_delay(&e, 0);
    let who = Address::generate(&e);
    grant_role(&f, &e, Role::ReserveDepositor, &who);

    // Off, then straight back on without a new queue entry.
    f.treasury
        .toggle(&f.admin, &Role::ReserveDepositor, &who, &None);
    f.treasury
        .toggle(&f.admin, &Role::ReserveDepositor, &who, &None);
}

#[test]
fn test_roles_are_independent() {
    let e = Env::default();
    let f = setup_with_delay(&e, 0);
    let who = Address::generate(&e);
    grant_role(&f, &e, Role::ReserveDepositor, &who);

    assert!(f.treasury.is_active(&Role::ReserveDepositor, &who));
    assert!(!f.treasury.is_active(&Role::LiquidityDepositor, &who));
    assert!(!f.treasury.is_active(&Role::ReserveSpender, &who));
}

#[test]
fn test_full_cycle_queue_toggle_off_requeue() {
    let e = Env::default();
    let f = setup_with_delay(&e, ONE_DAY);
    let who = Address::generate(&e);

    f.treasury.queue(&f.admin, &Role::RewardManager, &who);
    advance_time(&e, ONE_DAY);
    assert!(f.treasury.toggle(&f.admin, &Role::RewardManager, &who, &None));
    assert!(!f.treasury.toggle(&f.admin, &Role::RewardManager, &who, &None));

    // A fresh queue entry restarts the delay from scratch.
    let eligible_at = f.treasury.queue(&f.admin, &Role::RewardManager, &who);
    assert_eq!(eligible_at, e.ledger().timestamp() + ONE_DAY);
}

// ═══════════════════════════════════════════════════════════════════
// 4. Calculator binding
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_toggle_binds_calculator_for_liquidity_token() {
    let e = Env::default();
    let f = setup_with_delay(&e, 0);
    let lp = Address::generate(&e);
    let calculator = Address::generate(&e);

    f.treasury.queue(&f.admin, &Role::LiquidityToken, &lp);
    f.treasury
        .toggle(&f.admin, &Role::LiquidityToken, &lp, &Some(calculator.clone()));

    assert!(f.treasury.is_active(&Role::LiquidityToken, &lp));
    assert_eq!(f.treasury.calculator_for(&lp), Some(calculator));
}

#[test]
fn test_toggle_without_calculator_binds_nothing() {
    let e = Env::default();
    let f = setup_with_delay(&e, 0);
    let who = Address::generate(&e);
    grant_role(&f, &e, Role::ReserveDepositor, &who);
    assert_eq!(f.treasury.calculator_for(&who), None);
}
