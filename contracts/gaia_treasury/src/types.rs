use soroban_sdk::{contracttype, Address};

// ─── Registry ──────────────────────────────────────────────────────────────

/// Permission classes managed by the treasury registry.
///
/// Discriminants are wire-stable and keep the upstream managing-enum
/// positions; the gaps (3, 6) are reserved. `Debtor` is registered state
/// only; no debt operation ships in this workspace.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    ReserveDepositor = 0,
    ReserveSpender = 1,
    ReserveToken = 2,
    LiquidityDepositor = 4,
    LiquidityToken = 5,
    Debtor = 7,
    RewardManager = 8,
}

/// Lifecycle of one `(role, address)` pair. No storage entry means the pair
/// was never queued, or was toggled off.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RoleState {
    /// Pending; wraps the earliest timestamp `toggle` may activate it.
    Queued(u64),
    Active,
}

// ─── Configuration ─────────────────────────────────────────────────────────

/// Singleton treasury configuration.
#[contracttype]
#[derive(Clone, Debug)]
pub struct TreasuryConfig {
    /// The payout asset this treasury mints against reserves.
    pub payout_token: Address,
    /// Seconds between `queue` and the earliest activating `toggle`.
    pub queue_delay: u64,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
pub enum DataKey {
    /// Treasury admin (governance).
    Admin,
    /// TreasuryConfig singleton.
    Config,
    /// Payout-decimal sum of all reserve value on the books.
    TotalReserves,
    /// Registry entry per (role, address).
    Registry(Role, Address),
    /// Bond calculator bound to a token at toggle time.
    Calculator(Address),
}
