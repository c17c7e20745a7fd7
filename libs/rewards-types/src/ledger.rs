use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::zero_growths;

/// Mutable ledger state - stored in Instance storage for frequent access
#[contracttype]
#[derive(Clone, Debug)]
pub struct LedgerState {
    /// Per-channel cumulative reward growth per unit of active liquidity
    /// (Q128.128, wraps modulo 2^128)
    pub rewards_growth_global: Vec<u128>,
    /// Liquidity currently in range
    pub active_liquidity: u128,
    /// Ledger timestamp of the last accrual
    pub last_accrual_time: u64,
}

impl LedgerState {
    pub fn new(env: &Env, now: u64) -> Self {
        Self {
            rewards_growth_global: zero_growths(env),
            active_liquidity: 0,
            last_accrual_time: now,
        }
    }
}

/// Ledger configuration - immutable after creation
#[contracttype]
#[derive(Clone, Debug)]
pub struct LedgerConfig {
    /// Base pool this ledger accounts for
    pub pool: Address,
    /// The only caller allowed to change range liquidity
    pub position_manager: Address,
    /// External rewards controller yielding emission rates
    pub rate_source: Address,
}
