use crate::storage::{get_config, get_state, set_state};
use crate::{accrual, pool, tick};
use rewards_math::add_delta;
use rewards_types::{RewardsError, MAX_TICK, MIN_TICK};
use soroban_sdk::{panic_with_error, Env};

/// Record a range-liquidity change pushed by the position manager.
/// Accrues first, updates both bounds against a snapshot of the global
/// growth, applies the delta to active liquidity when the range contains
/// the current price, and reclaims bounds a removal flipped to zero.
pub fn on_liquidity_changed(env: &Env, tick_lower: i32, tick_upper: i32, liquidity_delta: i128) {
    validate_ticks(env, tick_lower, tick_upper);

    accrual::accrue(env);

    if liquidity_delta == 0 {
        return;
    }

    let config = get_config(env);
    let mut state = get_state(env);

    let (_sqrt_price, current_tick) = pool::current_tick_and_price(env, &config);
    let max_liquidity = pool::max_liquidity_per_tick(env, &config);

    let flipped_lower = tick::update(
        env,
        tick_lower,
        current_tick,
        liquidity_delta,
        &state.rewards_growth_global,
        false, // lower tick
        max_liquidity,
    );

    let flipped_upper = tick::update(
        env,
        tick_upper,
        current_tick,
        liquidity_delta,
        &state.rewards_growth_global,
        true, // upper tick
        max_liquidity,
    );

    // Only ranges that straddle the current price change active liquidity
    if current_tick >= tick_lower && current_tick < tick_upper {
        state.active_liquidity = add_delta(env, state.active_liquidity, liquidity_delta);
        set_state(env, &state);
    }

    if liquidity_delta < 0 {
        if flipped_lower {
            tick::clear(env, tick_lower);
        }
        if flipped_upper {
            tick::clear(env, tick_upper);
        }
    }
}

/// Validate tick range parameters
fn validate_ticks(env: &Env, tick_lower: i32, tick_upper: i32) {
    if tick_lower >= tick_upper {
        panic_with_error!(env, RewardsError::InvalidTickRange);
    }
    if tick_lower < MIN_TICK || tick_upper > MAX_TICK {
        panic_with_error!(env, RewardsError::InvalidTick);
    }
}
