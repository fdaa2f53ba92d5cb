//! Liquidity-pair double: an LP share token that also reports pool reserves.
//!
//! Reserves are set directly by the fixture rather than derived from swaps;
//! the calculator only ever reads them.

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

#[contracttype]
pub enum PairKey {
    Token0,
    Token1,
    Reserves,
    Decimals,
    Supply,
    Balance(Address),
    Allowance(Address, Address),
}

fn read_balance(e: &Env, id: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&PairKey::Balance(id.clone()))
        .unwrap_or(0)
}

fn write_balance(e: &Env, id: &Address, amount: i128) {
    e.storage()
        .persistent()
        .set(&PairKey::Balance(id.clone()), &amount);
}

#[contract]
pub struct MockPair;

#[contractimpl]
impl MockPair {
    pub fn initialize(e: Env, token_0: Address, token_1: Address, decimals: u32) {
        e.storage().instance().set(&PairKey::Token0, &token_0);
        e.storage().instance().set(&PairKey::Token1, &token_1);
        e.storage().instance().set(&PairKey::Decimals, &decimals);
        e.storage().instance().set(&PairKey::Supply, &0_i128);
        e.storage()
            .instance()
            .set(&PairKey::Reserves, &(0_i128, 0_i128));
    }

    pub fn set_reserves(e: Env, reserve_0: i128, reserve_1: i128) {
        e.storage()
            .instance()
            .set(&PairKey::Reserves, &(reserve_0, reserve_1));
    }

    pub fn get_reserves(e: Env) -> (i128, i128) {
        e.storage()
            .instance()
            .get(&PairKey::Reserves)
            .unwrap_or((0, 0))
    }

    pub fn token_0(e: Env) -> Address {
        e.storage()
            .instance()
            .get(&PairKey::Token0)
            .unwrap_or_else(|| panic!("pair not initialized"))
    }

    pub fn token_1(e: Env) -> Address {
        e.storage()
            .instance()
            .get(&PairKey::Token1)
            .unwrap_or_else(|| panic!("pair not initialized"))
    }

    // LP shares behave like the mock token: open mint, simple allowances.

    pub fn mint(e: Env, to: Address, amount: i128) {
        if amount < 0 {
            panic!("negative amount");
        }
        write_balance(&e, &to, read_balance(&e, &to) + amount);
        let supply: i128 = e.storage().instance().get(&PairKey::Supply).unwrap_or(0);
        e.storage()
            .instance()
            .set(&PairKey::Supply, &(supply + amount));
    }

    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        let from_bal = read_balance(&e, &from);
        if amount < 0 || from_bal < amount {
            panic!("insufficient balance");
        }
        write_balance(&e, &from, from_bal - amount);
        write_balance(&e, &to, read_balance(&e, &to) + amount);
    }

    pub fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        let key = PairKey::Allowance(from.clone(), spender.clone());
        let allowance: i128 = e.storage().persistent().get(&key).unwrap_or(0);
        if allowance < amount {
            panic!("insufficient allowance");
        }
        e.storage().persistent().set(&key, &(allowance - amount));
        let from_bal = read_balance(&e, &from);
        if amount < 0 || from_bal < amount {
            panic!("insufficient balance");
        }
        write_balance(&e, &from, from_bal - amount);
        write_balance(&e, &to, read_balance(&e, &to) + amount);
    }

    pub fn approve(e: Env, from: Address, spender: Address, amount: i128, live_until_ledger: u32) {
        from.require_auth();
        let _ = live_until_ledger;
        e.storage()
            .persistent()
            .set(&PairKey::Allowance(from, spender), &amount);
    }

    pub fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        e.storage()
            .persistent()
            .get(&PairKey::Allowance(from, spender))
            .unwrap_or(0)
    }

    pub fn balance(e: Env, id: Address) -> i128 {
        read_balance(&e, &id)
    }

    pub fn total_supply(e: Env) -> i128 {
        e.storage().instance().get(&PairKey::Supply).unwrap_or(0)
    }

    pub fn decimals(e: Env) -> u32 {
        e.storage().instance().get(&PairKey::Decimals).unwrap_or(7)
    }
}
