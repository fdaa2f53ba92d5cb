//! Test doubles for the Gaia contract fixtures.
//!
//! The protocol consumes its payout asset through `mint` and `total_supply`,
//! which the built-in Stellar asset contract does not expose, and the
//! observed reserve asset has 6 decimals while the asset contract is fixed
//! at 7. These doubles cover both gaps plus the pair surface the bond
//! calculator reads. Not deployable protocol code.

#![no_std]

pub mod pair;
pub mod token;

pub use pair::{MockPair, MockPairClient};
pub use token::{MockToken, MockTokenClient};
