//! # Gaia Treasury
//!
//! Custodian of the protocol's reserve assets and the only contract allowed
//! to mint the payout asset. Every mint through `deposit` is matched by at
//! least as much incoming reserve value, so the payout supply never exceeds
//! `total_reserves`; whatever backing is not needed by the outstanding
//! supply is `excess_reserves`, spendable by managers and reward programs.
//!
//! Permissions live in a timelocked registry: an address is `queue`d for a
//! role, waits out the configured delay, and is then `toggle`d active.
//! Toggling an active pair deactivates it; reactivation starts over with a
//! fresh queue entry.

#![no_std]

mod types;

pub use types::{DataKey, Role, RoleState, TreasuryConfig};

use gaia_common::errors::ContractError;
use gaia_common::interfaces::{BondCalculatorClient, GaiaTokenClient};
use gaia_common::math;
use soroban_sdk::{
    contract, contractimpl, panic_with_error, token::TokenClient, Address, Env, Symbol,
};


#[cfg(test)]
mod test_registry;


/// One whole unit of the 9-decimal payout asset.
const PAYOUT_SCALE: i128 = 1_000_000_000;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn require_admin(e: &Env, caller: &Address) {
    caller.require_auth();
    let stored: Address = e
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic_with_error!(e, ContractError::NotInitialized));
    if stored != *caller {
        panic_with_error!(e, ContractError::NotAdmin);
    }
}

fn config(e: &Env) -> TreasuryConfig {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(e, ContractError::NotInitialized))
}

fn registry_state(e: &Env, role: Role, address: &Address) -> Option<RoleState> {
    e.storage()
        .persistent()
        .get(&DataKey::Registry(role, address.clone()))
}

fn active(e: &Env, role: Role, address: &Address) -> bool {
    matches!(registry_state(e, role, address), Some(RoleState::Active))
}

fn require_active(e: &Env, role: Role, address: &Address, err: ContractError) {
    if !active(e, role, address) {
        panic_with_error!(e, err);
    }
}

fn reserves(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalReserves)
        .unwrap_or(0)
}

fn write_reserves(e: &Env, total: i128) {
    e.storage().instance().set(&DataKey::TotalReserves, &total);
    e.events()
        .publish((Symbol::new(e, "reserves_updated"),), total);
}

fn excess(e: &Env) -> i128 {
    let cfg = config(e);
    let supply = GaiaTokenClient::new(e, &cfg.payout_token).total_supply();
    let total = reserves(e);
    if supply >= total {
        0
    } else {
        total - supply
    }
}

/// The single valuation rule shared by every mutating path and `value_of`.
///
/// Reserve assets are rescaled to payout decimals; liquidity assets are
/// priced by their bound calculator. Assets in neither token role value
/// to 0 (mutating paths reject them before ever valuing).
fn value_of_internal(e: &Env, token: &Address, amount: i128) -> i128 {
    if active(e, Role::ReserveToken, token) {
        let decimals = TokenClient::new(e, token).decimals();
        math::mul_div(e, amount, PAYOUT_SCALE, math::pow10(e, decimals))
    } else if active(e, Role::LiquidityToken, token) {
        let calculator: Address = e
            .storage()
            .persistent()
            .get(&DataKey::Calculator(token.clone()))
            .unwrap_or_else(|| panic_with_error!(e, ContractError::CalculatorNotSet));
        BondCalculatorClient::new(e, &calculator).valuation(token, &amount)
    } else {
        0
    }
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct GaiaTreasury;

#[contractimpl]
impl GaiaTreasury {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// One-time initialization.
    ///
    /// `reserve_token` is seeded directly to `Active` in `ReserveToken`, the
    /// way the production deployment constructs the treasury around its
    /// first reserve asset. Everything else goes through queue/toggle.
    pub fn initialize(
        e: Env,
        admin: Address,
        payout_token: Address,
        reserve_token: Address,
        queue_delay: u64,
    ) {
        if e.storage().instance().has(&DataKey::Admin) {
            panic_with_error!(&e, ContractError::AlreadyInitialized);
        }
        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(
            &DataKey::Config,
            &TreasuryConfig {
                payout_token: payout_token.clone(),
                queue_delay,
            },
        );
        e.storage().instance().set(&DataKey::TotalReserves, &0_i128);
        e.storage().persistent().set(
            &DataKey::Registry(Role::ReserveToken, reserve_token.clone()),
            &RoleState::Active,
        );
        e.events().publish(
            (Symbol::new(&e, "treasury_initialized"),),
            (admin, payout_token, reserve_token, queue_delay),
        );
    }

    // ── Registry ───────────────────────────────────────────────────────────

    /// Queue `address` for `role`. The entry becomes eligible for `toggle`
    /// after the configured delay.
    ///
    /// Fails `AlreadyQueued` while a pending entry exists and
    /// `AlreadyActive` for pairs that must be toggled off first; the state
    /// machine per pair is strictly Unset -> Queued -> Active -> Unset.
    pub fn queue(e: Env, admin: Address, role: Role, address: Address) -> u64 {
        require_admin(&e, &admin);
        let cfg = config(&e);
        match registry_state(&e, role, &address) {
            Some(RoleState::Queued(_)) => panic_with_error!(&e, ContractError::AlreadyQueued),
            Some(RoleState::Active) => panic_with_error!(&e, ContractError::AlreadyActive),
            None => {}
        }
        let eligible_at = e
            .ledger()
            .timestamp()
            .checked_add(cfg.queue_delay)
            .unwrap_or_else(|| panic_with_error!(&e, ContractError::Overflow));
        e.storage().persistent().set(
            &DataKey::Registry(role, address.clone()),
            &RoleState::Queued(eligible_at),
        );
        e.events().publish(
            (Symbol::new(&e, "role_queued"), address),
            (role, eligible_at),
        );
        eligible_at
    }

    /// Flip the `(role, address)` pair. Returns the post-toggle activity.
    ///
    /// - Active entries are deactivated (removed); no queue needed.
    /// - Matured queue entries are consumed and become active. For the
    ///   token roles, a supplied `calculator` is bound to the asset.
    /// - Pending entries fail `QueueNotElapsed`; unknown pairs `NotQueued`.
    pub fn toggle(
        e: Env,
        admin: Address,
        role: Role,
        address: Address,
        calculator: Option<Address>,
    ) -> bool {
        require_admin(&e, &admin);
        let key = DataKey::Registry(role, address.clone());
        let now_active = match registry_state(&e, role, &address) {
            Some(RoleState::Active) => {
                e.storage().persistent().remove(&key);
                false
            }
            Some(RoleState::Queued(eligible_at)) => {
                if e.ledger().timestamp() < eligible_at {
                    panic_with_error!(&e, ContractError::QueueNotElapsed);
                }
                e.storage().persistent().set(&key, &RoleState::Active);
                if matches!(role, Role::ReserveToken | Role::LiquidityToken) {
                    if let Some(calc) = calculator {
                        e.storage()
                            .persistent()
                            .set(&DataKey::Calculator(address.clone()), &calc);
                    }
                }
                true
            }
            None => panic_with_error!(&e, ContractError::NotQueued),
        };
        e.events().publish(
            (Symbol::new(&e, "role_toggled"), address),
            (role, now_active),
        );
        now_active
    }

    // ── Reserves ───────────────────────────────────────────────────────────

    /// Deposit `amount` of `token` and mint `value - profit` payout to the
    /// depositor. The declared `profit` stays on the books as excess
    /// backing without a mint against it.
    ///
    /// The depositor must hold the depositor role matching the token's
    /// class; `profit` must lie in `[0, value]`. Returns the minted amount.
    pub fn deposit(e: Env, depositor: Address, amount: i128, token: Address, profit: i128) -> i128 {
        depositor.require_auth();
        let cfg = config(&e);
        if amount <= 0 {
            panic_with_error!(&e, ContractError::AmountMustBePositive);
        }
        if active(&e, Role::ReserveToken, &token) {
            require_active(
                &e,
                Role::ReserveDepositor,
                &depositor,
                ContractError::NotApproved,
            );
        } else if active(&e, Role::LiquidityToken, &token) {
            require_active(
                &e,
                Role::LiquidityDepositor,
                &depositor,
                ContractError::NotApproved,
            );
        } else {
            panic_with_error!(&e, ContractError::AssetNotApproved);
        }

        let value = value_of_internal(&e, &token, amount);
        if profit < 0 || profit > value {
            panic_with_error!(&e, ContractError::ProfitExceedsValue);
        }
        let minted = math::sub_i128(&e, value, profit);

        let contract = e.current_contract_address();
        TokenClient::new(&e, &token).transfer_from(&contract, &depositor, &contract, &amount);
        if minted > 0 {
            GaiaTokenClient::new(&e, &cfg.payout_token).mint(&depositor, &minted);
        }
        write_reserves(&e, math::add_i128(&e, reserves(&e), value));

        e.events().publish(
            (Symbol::new(&e, "deposited"), token),
            (depositor, amount, value),
        );
        minted
    }

    /// Withdraw reserve assets without a mint or burn. Reserved for active
    /// `ReserveSpender`s, and capped by `excess_reserves` so backing for
    /// the outstanding supply can never leave.
    pub fn manage(e: Env, spender: Address, token: Address, amount: i128) {
        spender.require_auth();
        require_active(
            &e,
            Role::ReserveSpender,
            &spender,
            ContractError::NotApproved,
        );
        require_active(
            &e,
            Role::ReserveToken,
            &token,
            ContractError::AssetNotApproved,
        );
        if amount <= 0 {
            panic_with_error!(&e, ContractError::AmountMustBePositive);
        }

        let value = value_of_internal(&e, &token, amount);
        if value > excess(&e) {
            panic_with_error!(&e, ContractError::InsufficientReserves);
        }
        write_reserves(&e, math::sub_i128(&e, reserves(&e), value));

        let contract = e.current_contract_address();
        TokenClient::new(&e, &token).transfer(&contract, &spender, &amount);

        e.events().publish(
            (Symbol::new(&e, "managed"), token),
            (spender, amount, value),
        );
    }

    /// Mint unbacked payout to `recipient`, capped by `excess_reserves`.
    /// Reserved for active `RewardManager`s (emission programs).
    pub fn mint_rewards(e: Env, manager: Address, recipient: Address, amount: i128) {
        manager.require_auth();
        require_active(
            &e,
            Role::RewardManager,
            &manager,
            ContractError::NotApproved,
        );
        if amount <= 0 {
            panic_with_error!(&e, ContractError::AmountMustBePositive);
        }
        if amount > excess(&e) {
            panic_with_error!(&e, ContractError::InsufficientReserves);
        }
        let cfg = config(&e);
        GaiaTokenClient::new(&e, &cfg.payout_token).mint(&recipient, &amount);
        e.events().publish(
            (Symbol::new(&e, "rewards_minted"), manager),
            (recipient, amount),
        );
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Payout-decimal value of `amount` of `token`; the same rule every
    /// mutating path uses. 0 for assets in neither token role.
    pub fn value_of(e: Env, token: Address, amount: i128) -> i128 {
        value_of_internal(&e, &token, amount)
    }

    pub fn total_reserves(e: Env) -> i128 {
        reserves(&e)
    }

    /// Reserves beyond what the outstanding payout supply needs, floored
    /// at 0. The spendable budget for `manage` and `mint_rewards`.
    pub fn excess_reserves(e: Env) -> i128 {
        excess(&e)
    }

    pub fn is_active(e: Env, role: Role, address: Address) -> bool {
        active(&e, role, &address)
    }

    pub fn registry_entry(e: Env, role: Role, address: Address) -> Option<RoleState> {
        registry_state(&e, role, &address)
    }

    pub fn calculator_for(e: Env, token: Address) -> Option<Address> {
        e.storage().persistent().get(&DataKey::Calculator(token))
    }

    pub fn admin(e: Env) -> Address {
        e.storage()
            .instance()
            .get(&DataKey::Admin)
            .unwrap_or_else(|| panic_with_error!(&e, ContractError::NotInitialized))
    }

    pub fn payout_token(e: Env) -> Address {
        config(&e).payout_token
    }

    pub fn queue_delay(e: Env) -> u64 {
        config(&e).queue_delay
    }
}
