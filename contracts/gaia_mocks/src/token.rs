//! Mintable test token with configurable decimals.
//!
//! Implements the slice of SEP-41 the Gaia contracts touch (`transfer`,
//! `transfer_from`, `approve`, `balance`, `decimals`) plus the `mint` and
//! `total_supply` surface of the payout asset. `mint` is open to any caller;
//! fixtures gate nothing.

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

#[contracttype]
pub enum TokenKey {
    Decimals,
    Supply,
    Balance(Address),
    Allowance(Address, Address),
}

fn read_balance(e: &Env, id: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&TokenKey::Balance(id.clone()))
        .unwrap_or(0)
}

fn write_balance(e: &Env, id: &Address, amount: i128) {
    e.storage()
        .persistent()
        .set(&TokenKey::Balance(id.clone()), &amount);
}

fn move_balance(e: &Env, from: &Address, to: &Address, amount: i128) {
    if amount < 0 {
        panic!("negative amount");
    }
    let from_bal = read_balance(e, from);
    if from_bal < amount {
        panic!("insufficient balance");
    }
    write_balance(e, from, from_bal - amount);
    write_balance(e, to, read_balance(e, to) + amount);
}

#[contract]
pub struct MockToken;

#[contractimpl]
impl MockToken {
    pub fn initialize(e: Env, decimals: u32) {
        e.storage().instance().set(&TokenKey::Decimals, &decimals);
        e.storage().instance().set(&TokenKey::Supply, &0_i128);
    }

    pub fn mint(e: Env, to: Address, amount: i128) {
        if amount < 0 {
            panic!("negative amount");
        }
        write_balance(&e, &to, read_balance(&e, &to) + amount);
        let supply: i128 = e.storage().instance().get(&TokenKey::Supply).unwrap_or(0);
        e.storage()
            .instance()
            .set(&TokenKey::Supply, &(supply + amount));
    }

    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        move_balance(&e, &from, &to, amount);
    }

    pub fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        let key = TokenKey::Allowance(from.clone(), spender.clone());
        let allowance: i128 = e.storage().persistent().get(&key).unwrap_or(0);
        if allowance < amount {
            panic!("insufficient allowance");
        }
        e.storage().persistent().set(&key, &(allowance - amount));
        move_balance(&e, &from, &to, amount);
    }

    pub fn approve(e: Env, from: Address, spender: Address, amount: i128, live_until_ledger: u32) {
        from.require_auth();
        // Expiry bookkeeping is not modeled; the fixtures approve and spend
        // within the same test.
        let _ = live_until_ledger;
        e.storage()
            .persistent()
            .set(&TokenKey::Allowance(from, spender), &amount);
    }

    pub fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        e.storage()
            .persistent()
            .get(&TokenKey::Allowance(from, spender))
            .unwrap_or(0)
    }

    pub fn balance(e: Env, id: Address) -> i128 {
        read_balance(&e, &id)
    }

    pub fn total_supply(e: Env) -> i128 {
        e.storage().instance().get(&TokenKey::Supply).unwrap_or(0)
    }

    pub fn decimals(e: Env) -> u32 {
        e.storage().instance().get(&TokenKey::Decimals).unwrap_or(7)
    }
}
