//! # Gaia Bond Calculator
//!
//! Values LP-share collateral in payout-asset terms. The treasury consults
//! this contract whenever a liquidity token is deposited or priced: the pool
//! is read for its reserves and share supply, and the share's value is the
//! payout-side reserve counted twice (both pool sides hold equal value in a
//! constant-product pool) scaled by the share of supply being valued.

#![no_std]

use gaia_common::errors::ContractError;
use gaia_common::interfaces::LiquidityPairClient;
use gaia_common::math;
use soroban_sdk::{contract, contractimpl, contracttype, panic_with_error, Address, Env};

#[contracttype]
pub enum DataKey {
    /// The payout asset every valuation is denominated in.
    PayoutToken,
}

#[contract]
pub struct GaiaBondCalculator;

#[contractimpl]
impl GaiaBondCalculator {
    /// One-time initialization with the payout asset address.
    pub fn initialize(e: Env, payout_token: Address) {
        if e.storage().instance().has(&DataKey::PayoutToken) {
            panic_with_error!(&e, ContractError::AlreadyInitialized);
        }
        e.storage()
            .instance()
            .set(&DataKey::PayoutToken, &payout_token);
    }

    pub fn payout_token(e: Env) -> Address {
        e.storage()
            .instance()
            .get(&DataKey::PayoutToken)
            .unwrap_or_else(|| panic_with_error!(&e, ContractError::NotInitialized))
    }

    /// Payout-decimal value of `amount` LP shares of `pair`:
    /// `payout_reserve * 2 * amount / total_supply`, floor division.
    ///
    /// Panics `UnsupportedPair` when neither pool side is the payout asset
    /// and `ZeroPoolSupply` when the pool reports no shares outstanding.
    pub fn valuation(e: Env, pair: Address, amount: i128) -> i128 {
        if amount <= 0 {
            panic_with_error!(&e, ContractError::AmountMustBePositive);
        }
        let payout = Self::payout_token(e.clone());
        let pool = LiquidityPairClient::new(&e, &pair);

        let (reserve_0, reserve_1) = pool.get_reserves();
        let payout_reserve = if pool.token_0() == payout {
            reserve_0
        } else if pool.token_1() == payout {
            reserve_1
        } else {
            panic_with_error!(&e, ContractError::UnsupportedPair)
        };

        let supply = pool.total_supply();
        if supply == 0 {
            panic_with_error!(&e, ContractError::ZeroPoolSupply);
        }

        math::mul_div(&e, math::mul_i128(&e, payout_reserve, 2), amount, supply)
    }
}
