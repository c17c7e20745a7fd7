#![no_std]

mod accrual;
mod crossing;
mod liquidity;
mod pool;
mod storage;
mod tick;

pub mod invariants;

#[cfg(feature = "certora")]
mod certora_specs;

use rewards_types::{LedgerConfig, LedgerState, RewardsError, TickRewardInfo};
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Vec};
use storage::{get_config, get_state, get_tick, has_config, set_config, set_state};

#[contract]
pub struct RewardLedger;

#[contractimpl]
impl RewardLedger {
    /// Create the ledger alongside its base pool.
    ///
    /// Called exactly once by the deployer at pool-creation time, before any
    /// crossing or liquidity event can reach the ledger. Seeds the accrual
    /// clock from the current ledger timestamp.
    pub fn initialize(env: Env, pool: Address, position_manager: Address, rate_source: Address) {
        if has_config(&env) {
            panic_with_error!(&env, RewardsError::AlreadyInitialized);
        }

        set_config(
            &env,
            &LedgerConfig {
                pool,
                position_manager,
                rate_source,
            },
        );

        let state = LedgerState::new(&env, env.ledger().timestamp());
        set_state(&env, &state);
    }

    /// Advance reward accrual to the current ledger timestamp
    pub fn accrue(env: Env, caller: Address) {
        require_pool_or_manager(&env, &caller);
        accrual::accrue(&env);
    }

    /// Notification from the base pool that price crossed `tick`.
    /// `zero_for_one` is true when price is decreasing.
    pub fn on_tick_crossed(env: Env, caller: Address, tick: i32, zero_for_one: bool) {
        require_pool_or_manager(&env, &caller);
        crossing::on_tick_crossed(&env, tick, zero_for_one);
    }

    /// Notification from the position manager that range liquidity changed
    pub fn on_liquidity_changed(
        env: Env,
        caller: Address,
        tick_lower: i32,
        tick_upper: i32,
        liquidity_delta: i128,
    ) {
        caller.require_auth();
        let config = get_config(&env);
        if caller != config.position_manager {
            panic_with_error!(&env, RewardsError::Unauthorized);
        }

        liquidity::on_liquidity_changed(&env, tick_lower, tick_upper, liquidity_delta);
    }

    // === View Functions ===

    /// Per-channel reward growth that occurred inside [tick_lower, tick_upper),
    /// against the live pool tick and the stored global snapshot
    pub fn reward_growth_inside(env: Env, tick_lower: i32, tick_upper: i32) -> Vec<u128> {
        let config = get_config(&env);
        let state = get_state(&env);

        let (_sqrt_price, current_tick) = pool::current_tick_and_price(&env, &config);

        tick::get_reward_growth_inside(
            &env,
            tick_lower,
            tick_upper,
            current_tick,
            &state.rewards_growth_global,
        )
    }

    /// Per-channel global growth accumulators
    pub fn rewards_growth_global(env: Env) -> Vec<u128> {
        get_state(&env).rewards_growth_global
    }

    /// Liquidity currently in range
    pub fn active_liquidity(env: Env) -> u128 {
        get_state(&env).active_liquidity
    }

    /// Ledger timestamp of the last accrual
    pub fn last_accrual_time(env: Env) -> u64 {
        get_state(&env).last_accrual_time
    }

    /// Reward bookkeeping for a tick (zero record if uninitialized)
    pub fn get_tick(env: Env, tick: i32) -> TickRewardInfo {
        get_tick(&env, tick)
    }

    /// Ledger configuration
    pub fn get_config(env: Env) -> LedgerConfig {
        get_config(&env)
    }
}

fn require_pool_or_manager(env: &Env, caller: &Address) {
    caller.require_auth();
    let config = get_config(env);
    if *caller != config.pool && *caller != config.position_manager {
        panic_with_error!(env, RewardsError::Unauthorized);
    }
}
