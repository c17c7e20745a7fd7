#![no_std]

mod error;
mod ledger;
mod tick;

pub use error::*;
pub use ledger::*;
pub use tick::*;

use soroban_sdk::{Env, Vec};

/// Number of reward channels tracked in lock-step per pool
pub const NUM_REWARDS: u32 = 10;

/// Q64 constant (2^64) for fixed-point math
pub const Q64: u128 = 1 << 64;

/// Emission rates are reported in millionths of a token unit per second
/// (same 1e-6 scale the pool uses for fees)
pub const RATE_SCALE: u128 = 1_000_000;

/// Minimum tick index
/// Limited by u128 representation (originally -887272 for uint160)
pub const MIN_TICK: i32 = -443636;

/// Maximum tick index
/// Limited by u128 representation (originally 887272 for uint160)
pub const MAX_TICK: i32 = 443636;

/// An all-zero per-channel growth vector
pub fn zero_growths(env: &Env) -> Vec<u128> {
    Vec::from_array(env, [0u128; NUM_REWARDS as usize])
}
