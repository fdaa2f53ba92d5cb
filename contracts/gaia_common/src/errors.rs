use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring, alerting, and dashboards.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `ContractError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup and one-time configuration errors (codes 1-99).
    Initialization,
    /// Caller identity, registry role, and timelock errors (codes 100-199).
    Authorization,
    /// Bond pricing and lifecycle errors (codes 200-299).
    Bond,
    /// Treasury accounting errors (codes 300-399).
    Treasury,
    /// Collateral valuation errors (codes 400-499).
    Valuation,
    /// Argument validation errors (codes 500-599).
    Validation,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  ContractError
/// @notice Canonical error enum shared by all Gaia smart contracts.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///         Use the ErrorExt trait to retrieve the category and description.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Bond
///   300 - 399 : Treasury
///   400 - 499 : Valuation
///   500 - 599 : Validation
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ContractError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    /// Contracts: treasury, depository, calculator
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    /// Contracts: treasury, depository, calculator
    AlreadyInitialized = 2,

    /// Bond terms have not been initialized yet.
    /// Contracts: depository
    TermsNotInitialized = 3,

    /// Bond terms were already initialized; use set_bond_terms to adjust.
    /// Contracts: depository
    TermsAlreadyInitialized = 4,

    // --- Authorization (100-199) ---
    /// Caller is not the admin.
    /// Contracts: treasury, depository
    NotAdmin = 100,

    /// Caller does not hold the registry role this operation requires.
    /// Contracts: treasury
    NotApproved = 101,

    /// Asset is not active in the registry role this operation requires.
    /// Contracts: treasury
    AssetNotApproved = 102,

    /// Toggle was called for a (role, address) pair that was never queued.
    /// Contracts: treasury
    NotQueued = 103,

    /// The queue timelock for this (role, address) pair has not elapsed.
    /// Contracts: treasury
    QueueNotElapsed = 104,

    /// A queue entry for this (role, address) pair is already pending.
    /// Contracts: treasury
    AlreadyQueued = 105,

    /// The (role, address) pair is already active; toggle it off first.
    /// Contracts: treasury
    AlreadyActive = 106,

    // --- Bond (200-299) ---
    /// Current bond price exceeds the caller's max_price ceiling.
    /// Contracts: depository
    SlippageExceeded = 200,

    /// Computed payout is below the 0.01-payout dust threshold.
    /// Contracts: depository
    PayoutTooSmall = 201,

    /// Computed payout exceeds the max_payout share of total supply.
    /// Contracts: depository
    PayoutTooLarge = 202,

    /// Accepting this bond would push total debt above max_debt.
    /// Contracts: depository
    DebtCeilingExceeded = 203,

    // --- Treasury (300-399) ---
    /// Declared profit lies outside [0, value of deposit].
    /// Contracts: treasury
    ProfitExceedsValue = 300,

    /// Requested value exceeds reserves not needed to back supply.
    /// Contracts: treasury
    InsufficientReserves = 301,

    // --- Valuation (400-499) ---
    /// Neither side of the referenced pool is the payout asset.
    /// Contracts: calculator
    UnsupportedPair = 400,

    /// The referenced pool reports zero total supply.
    /// Contracts: calculator
    ZeroPoolSupply = 401,

    /// Liquidity token is active but has no bond calculator bound.
    /// Contracts: treasury
    CalculatorNotSet = 402,

    // --- Validation (500-599) ---
    /// Amount argument must be strictly positive (> 0).
    /// Contracts: treasury, depository, calculator
    AmountMustBePositive = 500,

    /// A bond term value is outside its permitted range.
    /// Contracts: depository
    InvalidTerms = 501,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    /// Contracts: all
    Overflow = 700,

    /// Integer underflow detected during a checked arithmetic operation.
    /// Contracts: all
    Underflow = 701,

    /// Division by zero detected during a checked arithmetic operation.
    /// Contracts: all
    DivideByZero = 702,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
/// @dev    Use this for structured logging, monitoring, and off-chain display.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::TermsNotInitialized
            | ContractError::TermsAlreadyInitialized => ErrorCategory::Initialization,

            ContractError::NotAdmin
            | ContractError::NotApproved
            | ContractError::AssetNotApproved
            | ContractError::NotQueued
            | ContractError::QueueNotElapsed
            | ContractError::AlreadyQueued
            | ContractError::AlreadyActive => ErrorCategory::Authorization,

            ContractError::SlippageExceeded
            | ContractError::PayoutTooSmall
            | ContractError::PayoutTooLarge
            | ContractError::DebtCeilingExceeded => ErrorCategory::Bond,

            ContractError::ProfitExceedsValue | ContractError::InsufficientReserves => {
                ErrorCategory::Treasury
            }

            ContractError::UnsupportedPair
            | ContractError::ZeroPoolSupply
            | ContractError::CalculatorNotSet => ErrorCategory::Valuation,

            ContractError::AmountMustBePositive | ContractError::InvalidTerms => {
                ErrorCategory::Validation
            }

            ContractError::Overflow | ContractError::Underflow | ContractError::DivideByZero => {
                ErrorCategory::Arithmetic
            }
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract has already been initialized",
            ContractError::TermsNotInitialized => "Bond terms have not been initialized",
            ContractError::TermsAlreadyInitialized => {
                "Bond terms were already initialized; use set_bond_terms"
            }
            ContractError::NotAdmin => "Caller is not the admin",
            ContractError::NotApproved => "Caller does not hold the required registry role",
            ContractError::AssetNotApproved => "Asset is not active in the required registry role",
            ContractError::NotQueued => "No queue entry exists for this (role, address) pair",
            ContractError::QueueNotElapsed => "The queue timelock has not elapsed",
            ContractError::AlreadyQueued => "A queue entry is already pending for this pair",
            ContractError::AlreadyActive => "The (role, address) pair is already active",
            ContractError::SlippageExceeded => "Bond price exceeds the caller's max_price",
            ContractError::PayoutTooSmall => "Bond payout is below the dust threshold",
            ContractError::PayoutTooLarge => "Bond payout exceeds the max_payout cap",
            ContractError::DebtCeilingExceeded => "Bond would push total debt above max_debt",
            ContractError::ProfitExceedsValue => "Declared profit is outside [0, deposit value]",
            ContractError::InsufficientReserves => {
                "Value exceeds reserves not needed to back supply"
            }
            ContractError::UnsupportedPair => "Neither pool side is the payout asset",
            ContractError::ZeroPoolSupply => "Pool reports zero total supply",
            ContractError::CalculatorNotSet => "Liquidity token has no bond calculator bound",
            ContractError::AmountMustBePositive => "Amount must be strictly positive (> 0)",
            ContractError::InvalidTerms => "Bond term value is outside its permitted range",
            ContractError::Overflow => "Integer overflow in checked arithmetic",
            ContractError::Underflow => "Integer underflow in checked arithmetic",
            ContractError::DivideByZero => "Division by zero in checked arithmetic",
        }
    }
}
