//! Client traits for every surface the Gaia contracts call across a
//! contract boundary.
//!
//! None of these are implemented by the workspace contracts themselves
//! (test doubles aside); the `#[contractclient]` attribute only generates
//! the typed client used at the call site.

use soroban_sdk::{contractclient, Address, Env};

/// The GAIA payout asset. A SEP-41 token extended with a treasury-gated
/// `mint` and a `total_supply` view; 9 decimals.
#[contractclient(name = "GaiaTokenClient")]
pub trait GaiaToken {
    fn mint(env: Env, to: Address, amount: i128);
    fn transfer(env: Env, from: Address, to: Address, amount: i128);
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);
    fn balance(env: Env, id: Address) -> i128;
    fn total_supply(env: Env) -> i128;
    fn decimals(env: Env) -> u32;
}

/// A constant-product liquidity pool whose share token doubles as the LP
/// collateral asset. Only the read surface the calculator needs.
#[contractclient(name = "LiquidityPairClient")]
pub trait LiquidityPair {
    fn get_reserves(env: Env) -> (i128, i128);
    fn token_0(env: Env) -> Address;
    fn token_1(env: Env) -> Address;
    fn total_supply(env: Env) -> i128;
}

/// The treasury surface a bond depository consumes.
#[contractclient(name = "TreasuryClient")]
pub trait Treasury {
    /// Pulls `amount` of `token` from `depositor`, mints `value - profit`
    /// payout to the depositor, and books the value into reserves.
    fn deposit(env: Env, depositor: Address, amount: i128, token: Address, profit: i128) -> i128;

    /// Payout-decimal value of `amount` of `token` under the registry's
    /// valuation rule for that asset.
    fn value_of(env: Env, token: Address, amount: i128) -> i128;
}

/// The calculator surface the treasury and LP depositories consume.
#[contractclient(name = "BondCalculatorClient")]
pub trait BondCalculator {
    fn valuation(env: Env, pair: Address, amount: i128) -> i128;
}
