//! Read-only views into the base pool, reached by cross-contract invocation.
//! The ledger never polls the pool on its own; these are consulted inside
//! notifications the pool or the position manager pushes.

use rewards_types::LedgerConfig;
use soroban_sdk::{Env, IntoVal, Symbol};

/// Current (sqrt price, tick) pair of the base pool
pub fn current_tick_and_price(env: &Env, config: &LedgerConfig) -> (u128, i32) {
    env.invoke_contract(
        &config.pool,
        &Symbol::new(env, "current_tick_and_price"),
        ().into_val(env),
    )
}

/// Pool-wide cap on liquidity referencing a single tick
pub fn max_liquidity_per_tick(env: &Env, config: &LedgerConfig) -> u128 {
    env.invoke_contract(
        &config.pool,
        &Symbol::new(env, "max_liquidity_per_tick"),
        ().into_val(env),
    )
}
