//! Shared building blocks for the Gaia treasury-backed bonding contracts.
//!
//! - [`errors`]: one wire-stable error enum for every contract in the
//!   workspace, with category/description metadata for off-chain tooling.
//! - [`math`]: overflow-checked arithmetic that panics with the shared
//!   arithmetic error codes.
//! - [`interfaces`]: `#[contractclient]` traits for the contracts and token
//!   surfaces consumed across contract boundaries.

#![no_std]

pub mod errors;
pub mod interfaces;
pub mod math;

pub use errors::{ContractError, ErrorCategory, ErrorExt};


#[cfg(test)]
mod test_math;
