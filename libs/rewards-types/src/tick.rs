use soroban_sdk::{contracttype, Env, Vec};

use crate::zero_growths;

/// Reward bookkeeping stored for each initialized tick
#[contracttype]
#[derive(Clone, Debug)]
pub struct TickRewardInfo {
    /// Total liquidity referencing this tick
    pub liquidity_gross: u128,
    /// Net liquidity change when tick is crossed (+ when moving right)
    pub liquidity_net: i128,
    /// Per-channel reward growth on the side away from current price when
    /// the tick was last crossed; relative values, only meaningful against
    /// the global accumulators
    pub rewards_growth_outside: Vec<u128>,
    /// True if tick has been initialized
    pub initialized: bool,
}

impl TickRewardInfo {
    pub fn new(env: &Env) -> Self {
        Self {
            liquidity_gross: 0,
            liquidity_net: 0,
            rewards_growth_outside: zero_growths(env),
            initialized: false,
        }
    }
}
