//! # Gaia Bond Depository
//!
//! Sells vesting claims on the payout asset ("bonds") in exchange for
//! collateral. The price floats on outstanding bond debt: every sale books
//! the collateral's value as debt, the debt decays linearly over a vesting
//! term, and `bond_price = max(minimum_price, BCV * debt_ratio)`. Sold
//! collateral is forwarded to the treasury, which mints the bonder's payout
//! back to this contract for escrow until redemption.
//!
//! One code base serves both collateral kinds. A reserve-asset instance is
//! constructed without a calculator and its deposits are valued by decimal
//! rescaling; an LP instance names the bond calculator the treasury values
//! the principle with. The difference lives entirely in the treasury's
//! valuation rule and the standardized debt-ratio view.

#![no_std]

mod pricing;
mod types;

pub use types::{Bond, BondConfig, BondTerms, DataKey, DebtState, Parameter};

use gaia_common::errors::ContractError;
use gaia_common::interfaces::{BondCalculatorClient, GaiaTokenClient, TreasuryClient};
use gaia_common::math;
use soroban_sdk::{
    contract, contractimpl, panic_with_error, token::TokenClient, Address, Env, Symbol,
};


#[cfg(test)]
mod test_pricing;



/// Shortest vesting term the term setters accept (36 hours).
const MIN_VESTING_TERM: u64 = 129_600;

/// Ledger-sequence lifetime of the per-deposit treasury allowance. The
/// allowance is consumed within the same invocation.
const ALLOWANCE_LEDGERS: u32 = 100;

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

fn config(e: &Env) -> BondConfig {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(e, ContractError::NotInitialized))
}

fn read_terms(e: &Env) -> BondTerms {
    e.storage()
        .instance()
        .get(&DataKey::Terms)
        .unwrap_or_else(|| panic_with_error!(e, ContractError::TermsNotInitialized))
}

fn read_debt(e: &Env) -> DebtState {
    e.storage()
        .instance()
        .get(&DataKey::Debt)
        .unwrap_or_else(|| panic_with_error!(e, ContractError::TermsNotInitialized))
}

fn write_debt(e: &Env, debt: &DebtState) {
    e.storage().instance().set(&DataKey::Debt, debt);
}

fn read_bond(e: &Env, depositor: &Address) -> Option<Bond> {
    e.storage()
        .persistent()
        .get(&DataKey::Bond(depositor.clone()))
}

fn payout_supply(e: &Env, cfg: &BondConfig) -> i128 {
    GaiaTokenClient::new(e, &cfg.payout_token).total_supply()
}

/// Fold the pending decay into storage so the figure on the books is
/// current before a mutation builds on it.
fn commit_decay(e: &Env, vesting_term: u64) -> DebtState {
    let now = e.ledger().timestamp();
    let debt = read_debt(e);
    let committed = DebtState {
        total_debt: pricing::current_debt(e, &debt, vesting_term, now),
        last_decay: now,
    };
    write_debt(e, &committed);
    committed
}

/// Debt ratio at the current timestamp, decay applied virtually.
fn ratio_now(e: &Env) -> i128 {
    let cfg = config(e);
    let terms = read_terms(e);
    let debt = read_debt(e);
    let current = pricing::current_debt(e, &debt, terms.vesting_term, e.ledger().timestamp());
    pricing::debt_ratio(e, current, payout_supply(e, &cfg))
}

fn price_now(e: &Env) -> i128 {
    pricing::bond_price(e, &read_terms(e), ratio_now(e))
}

/// Bounds shared by `initialize_bond_terms` and `set_bond_terms`.
fn check_terms(e: &Env, terms: &BondTerms) {
    if terms.vesting_term < MIN_VESTING_TERM
        || terms.max_payout_bps > 10_000
        || terms.fee_bps > 10_000
        || terms.control_variable <= 0
        || terms.minimum_price < 0
        || terms.max_debt < 0
    {
        panic_with_error!(e, ContractError::InvalidTerms);
    }
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct GaiaBondDepository;

#[contractimpl]
impl GaiaBondDepository {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// One-time wiring. `calculator` selects the instance kind: `None` for
    /// reserve-asset collateral, `Some` for LP shares (the same calculator
    /// the treasury values the principle with).
    pub fn initialize(
        e: Env,
        admin: Address,
        payout_token: Address,
        principle: Address,
        treasury: Address,
        dao: Address,
        calculator: Option<Address>,
    ) {
        if e.storage().instance().has(&DataKey::Admin) {
            panic_with_error!(&e, ContractError::AlreadyInitialized);
        }
        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(
            &DataKey::Config,
            &BondConfig {
                payout_token: payout_token.clone(),
                principle: principle.clone(),
                treasury,
                dao,
                calculator,
            },
        );
        e.events().publish(
            (Symbol::new(&e, "depository_initialized"),),
            (admin, payout_token, principle),
        );
    }

    /// Set the full term sheet and seed the debt clock. Callable once; later
    /// adjustments go through `set_bond_terms` one field at a time.
    pub fn initialize_bond_terms(
        e: Env,
        admin: Address,
        control_variable: i128,
        minimum_price: i128,
        max_payout_bps: u32,
        fee_bps: u32,
        max_debt: i128,
        initial_debt: i128,
        vesting_term: u64,
    ) {
        require_admin(&e, &admin);
        if e.storage().instance().has(&DataKey::Terms) {
            panic_with_error!(&e, ContractError::TermsAlreadyInitialized);
        }
        if initial_debt < 0 {
            panic_with_error!(&e, ContractError::InvalidTerms);
        }
        let terms = BondTerms {
            control_variable,
            minimum_price,
            max_payout_bps,
            fee_bps,
            max_debt,
            vesting_term,
        };
        check_terms(&e, &terms);
        e.storage().instance().set(&DataKey::Terms, &terms);
        write_debt(
            &e,
            &DebtState {
                total_debt: initial_debt,
                last_decay: e.ledger().timestamp(),
            },
        );
        e.events().publish(
            (Symbol::new(&e, "terms_initialized"),),
            (control_variable, minimum_price, vesting_term),
        );
    }

    /// Adjust a single term, under the same bounds `initialize_bond_terms`
    /// enforces. The BCV is fixed at initialization and not adjustable here.
    pub fn set_bond_terms(e: Env, admin: Address, parameter: Parameter, input: i128) {
        require_admin(&e, &admin);
        let mut terms = read_terms(&e);
        match parameter {
            Parameter::Vesting => {
                terms.vesting_term = u64::try_from(input)
                    .unwrap_or_else(|_| panic_with_error!(&e, ContractError::InvalidTerms));
            }
            Parameter::Payout => {
                terms.max_payout_bps = u32::try_from(input)
                    .unwrap_or_else(|_| panic_with_error!(&e, ContractError::InvalidTerms));
            }
            Parameter::Fee => {
                terms.fee_bps = u32::try_from(input)
                    .unwrap_or_else(|_| panic_with_error!(&e, ContractError::InvalidTerms));
            }
            Parameter::Debt => terms.max_debt = input,
            Parameter::MinimumPrice => terms.minimum_price = input,
        }
        check_terms(&e, &terms);
        e.storage().instance().set(&DataKey::Terms, &terms);
        e.events()
            .publish((Symbol::new(&e, "terms_set"), parameter), input);
    }

    // ── Bonding ────────────────────────────────────────────────────────────

    /// Buy a bond: exchange `amount` of the principle for a vesting claim on
    /// the payout asset at the current `bond_price`.
    ///
    /// `from` pays the collateral; the claim is recorded for `depositor`,
    /// merging into any open position. `max_price` bounds the accepted price.
    /// The DAO fee is carved out of the payout and settled in collateral;
    /// the remaining collateral moves to the treasury, which mints the net
    /// payout to this contract for escrow. Returns the credited payout.
    pub fn deposit(
        e: Env,
        from: Address,
        amount: i128,
        max_price: i128,
        depositor: Address,
    ) -> i128 {
        from.require_auth();
        let cfg = config(&e);
        let terms = read_terms(&e);
        if amount <= 0 {
            panic_with_error!(&e, ContractError::AmountMustBePositive);
        }

        let debt = commit_decay(&e, terms.vesting_term);
        let supply = payout_supply(&e, &cfg);
        let ratio = pricing::debt_ratio(&e, debt.total_debt, supply);
        let price = pricing::bond_price(&e, &terms, ratio);
        if price > max_price {
            panic_with_error!(&e, ContractError::SlippageExceeded);
        }

        let treasury = TreasuryClient::new(&e, &cfg.treasury);
        let value = treasury.value_of(&cfg.principle, &amount);
        let payout = pricing::payout_for(&e, value, price);
        if payout < pricing::MIN_PAYOUT {
            panic_with_error!(&e, ContractError::PayoutTooSmall);
        }
        if payout > pricing::max_payout(&e, supply, terms.max_payout_bps) {
            panic_with_error!(&e, ContractError::PayoutTooLarge);
        }
        let new_debt = math::add_i128(&e, debt.total_debt, value);
        if new_debt > terms.max_debt {
            panic_with_error!(&e, ContractError::DebtCeilingExceeded);
        }

        let fee = math::bps(&e, payout, terms.fee_bps);
        let fee_collateral = math::bps(&e, amount, terms.fee_bps);
        let net = math::sub_i128(&e, amount, fee_collateral);
        let net_value = treasury.value_of(&cfg.principle, &net);
        // The fee floors independently in payout and collateral units, so
        // the net collateral can value a unit under payout - fee. The
        // credit never exceeds what the treasury receives.
        let after_fee = math::sub_i128(&e, payout, fee);
        let credited = if after_fee > net_value {
            net_value
        } else {
            after_fee
        };

        // Record and debt go to storage before any token moves.
        let now = e.ledger().timestamp();
        let bond = match read_bond(&e, &depositor) {
            Some(old) => Bond {
                payout: math::add_i128(&e, old.payout, credited),
                value: math::add_i128(&e, old.value, value),
                vesting_end: pricing::blended_vesting_end(
                    &e,
                    now,
                    &old,
                    terms.vesting_term,
                    credited,
                ),
                last_interaction: now,
                price_paid: price,
            },
            None => Bond {
                payout: credited,
                value,
                vesting_end: now
                    .checked_add(terms.vesting_term)
                    .unwrap_or_else(|| panic_with_error!(&e, ContractError::Overflow)),
                last_interaction: now,
                price_paid: price,
            },
        };
        e.storage()
            .persistent()
            .set(&DataKey::Bond(depositor.clone()), &bond);
        write_debt(
            &e,
            &DebtState {
                total_debt: new_debt,
                last_decay: now,
            },
        );

        let contract = e.current_contract_address();
        let principle = TokenClient::new(&e, &cfg.principle);
        principle.transfer_from(&contract, &from, &contract, &amount);
        if fee_collateral > 0 {
            principle.transfer(&contract, &cfg.dao, &fee_collateral);
        }
        // The treasury mints net_value - profit, i.e. exactly the credited
        // payout, back to this contract.
        let profit = math::sub_i128(&e, net_value, credited);
        principle.approve(
            &contract,
            &cfg.treasury,
            &net,
            &e.ledger().sequence().saturating_add(ALLOWANCE_LEDGERS),
        );
        treasury.deposit(&contract, &net, &cfg.principle, &profit);

        e.events().publish(
            (Symbol::new(&e, "bond_created"), depositor),
            (amount, credited, bond.vesting_end, price),
        );
        credited
    }

    /// Pay out whatever has vested for `recipient`.
    ///
    /// Permissionless: anyone may trigger a redemption, the payout only ever
    /// reaches the record owner. Returns the amount paid; an address with no
    /// open bond, or nothing vested yet, gets 0.
    pub fn redeem(e: Env, recipient: Address) -> i128 {
        let cfg = config(&e);
        let terms = read_terms(&e);
        let bond = match read_bond(&e, &recipient) {
            Some(bond) => bond,
            None => return 0,
        };

        let debt = commit_decay(&e, terms.vesting_term);
        let now = e.ledger().timestamp();
        let vested = pricing::percent_vested_bps(&bond, now);

        let (paid, value_cleared, remaining) = if vested >= pricing::FULLY_VESTED_BPS {
            e.storage()
                .persistent()
                .remove(&DataKey::Bond(recipient.clone()));
            (bond.payout, bond.value, 0)
        } else {
            let paid = math::bps(&e, bond.payout, vested);
            if paid == 0 {
                return 0;
            }
            let value_cleared = math::bps(&e, bond.value, vested);
            let rest = Bond {
                payout: math::sub_i128(&e, bond.payout, paid),
                value: math::sub_i128(&e, bond.value, value_cleared),
                vesting_end: bond.vesting_end,
                last_interaction: now,
                price_paid: bond.price_paid,
            };
            e.storage()
                .persistent()
                .set(&DataKey::Bond(recipient.clone()), &rest);
            (paid, value_cleared, rest.payout)
        };

        // The redeemed principal leaves the debt book, floored at zero since
        // decay may already have cleared part of it.
        let total_debt = if value_cleared >= debt.total_debt {
            0
        } else {
            debt.total_debt - value_cleared
        };
        write_debt(
            &e,
            &DebtState {
                total_debt,
                last_decay: now,
            },
        );

        TokenClient::new(&e, &cfg.payout_token).transfer(
            &e.current_contract_address(),
            &recipient,
            &paid,
        );

        e.events()
            .publish((Symbol::new(&e, "bond_redeemed"), recipient), (paid, remaining));
        paid
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn terms(e: Env) -> BondTerms {
        read_terms(&e)
    }

    pub fn bond_info(e: Env, depositor: Address) -> Option<Bond> {
        read_bond(&e, &depositor)
    }

    /// Current bond price, 1e9 scale.
    pub fn bond_price(e: Env) -> i128 {
        price_now(&e)
    }

    /// Outstanding debt as a 1e9-scale fraction of the payout supply.
    pub fn debt_ratio(e: Env) -> i128 {
        ratio_now(&e)
    }

    /// Debt ratio weighted by the payout value of one whole principle unit,
    /// comparable across depositories. Equal to `debt_ratio` for reserve
    /// instances.
    pub fn standardized_debt_ratio(e: Env) -> i128 {
        let cfg = config(&e);
        let ratio = ratio_now(&e);
        match cfg.calculator {
            Some(calculator) => {
                let unit = math::pow10(&e, TokenClient::new(&e, &cfg.principle).decimals());
                let unit_value =
                    BondCalculatorClient::new(&e, &calculator).valuation(&cfg.principle, &unit);
                math::mul_div(&e, ratio, unit_value, pricing::PRICE_SCALE)
            }
            None => ratio,
        }
    }

    /// Debt still on the books once pending decay is applied.
    pub fn current_debt(e: Env) -> i128 {
        let terms = read_terms(&e);
        let debt = read_debt(&e);
        pricing::current_debt(&e, &debt, terms.vesting_term, e.ledger().timestamp())
    }

    /// Decay accrued since the last mutating call.
    pub fn debt_decay(e: Env) -> i128 {
        let terms = read_terms(&e);
        let debt = read_debt(&e);
        pricing::debt_decay(&e, &debt, terms.vesting_term, e.ledger().timestamp())
    }

    /// Largest payout a single deposit may buy right now.
    pub fn max_payout(e: Env) -> i128 {
        let cfg = config(&e);
        let terms = read_terms(&e);
        pricing::max_payout(&e, payout_supply(&e, &cfg), terms.max_payout_bps)
    }

    /// Payout `value` buys at the current price.
    pub fn payout_for(e: Env, value: i128) -> i128 {
        pricing::payout_for(&e, value, price_now(&e))
    }

    /// Vesting progress for `depositor` in bps; 0 without an open bond.
    pub fn percent_vested_for(e: Env, depositor: Address) -> u32 {
        match read_bond(&e, &depositor) {
            Some(bond) => pricing::percent_vested_bps(&bond, e.ledger().timestamp()),
            None => 0,
        }
    }

    /// Payout `redeem` would pay `depositor` right now.
    pub fn pending_payout_for(e: Env, depositor: Address) -> i128 {
        match read_bond(&e, &depositor) {
            Some(bond) => {
                let vested = pricing::percent_vested_bps(&bond, e.ledger().timestamp());
                if vested >= pricing::FULLY_VESTED_BPS {
                    bond.payout
                } else {
                    math::bps(&e, bond.payout, vested)
                }
            }
            None => 0,
        }
    }
}
