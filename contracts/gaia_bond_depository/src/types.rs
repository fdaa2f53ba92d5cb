use soroban_sdk::{contracttype, Address};

// ─── Configuration ─────────────────────────────────────────────────────────

/// Singleton depository wiring, fixed at `initialize`.
#[contracttype]
#[derive(Clone, Debug)]
pub struct BondConfig {
    /// The payout asset bonds vest into.
    pub payout_token: Address,
    /// The collateral asset this depository sells bonds against.
    pub principle: Address,
    /// Treasury that custodies the collateral and mints the payout.
    pub treasury: Address,
    /// Sink for the DAO's share of every deposit.
    pub dao: Address,
    /// `Some` marks an LP-collateral instance and names the calculator the
    /// treasury values the principle with.
    pub calculator: Option<Address>,
}

/// Pricing and policy knobs, set once via `initialize_bond_terms` and
/// adjusted one field at a time via `set_bond_terms`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BondTerms {
    /// BCV: scales the debt ratio into a premium over par.
    pub control_variable: i128,
    /// Price floor, 1e9 scale (1e9 = par).
    pub minimum_price: i128,
    /// Largest single payout, in bps of the payout total supply.
    pub max_payout_bps: u32,
    /// DAO fee in bps, carved out of the bonder's payout.
    pub fee_bps: u32,
    /// Ceiling on `total_debt`, payout-decimal value.
    pub max_debt: i128,
    /// Seconds a fresh bond takes to vest fully.
    pub vesting_term: u64,
}

/// `set_bond_terms` target field.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Parameter {
    Vesting = 0,
    Payout = 1,
    Fee = 2,
    Debt = 3,
    MinimumPrice = 4,
}

// ─── Bond state ────────────────────────────────────────────────────────────

/// One depositor's open position. Re-deposits merge into it; redemptions
/// shrink it and delete it once fully paid out.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bond {
    /// Payout still owed, in payout decimals.
    pub payout: i128,
    /// Collateral value still carried as bond debt for this position.
    pub value: i128,
    /// Timestamp at which the position is fully vested.
    pub vesting_end: u64,
    /// Timestamp of the deposit or partial redemption that produced the
    /// current `payout`; vesting progress is measured from here.
    pub last_interaction: u64,
    /// Bond price at the most recent deposit, 1e9 scale.
    pub price_paid: i128,
}

/// Outstanding bond debt and the timestamp decay was last applied.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DebtState {
    pub total_debt: i128,
    pub last_decay: u64,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
pub enum DataKey {
    /// Depository admin (governance).
    Admin,
    /// BondConfig singleton.
    Config,
    /// BondTerms singleton.
    Terms,
    /// DebtState singleton.
    Debt,
    /// Open position per depositor.
    Bond(Address),
}
