use crate::storage::{get_tick, remove_tick, set_tick};
use rewards_math::add_delta;
use rewards_types::{RewardsError, NUM_REWARDS};
use soroban_sdk::{panic_with_error, Env, Vec};

/// Apply a liquidity delta to a tick record.
/// Returns true if the tick was flipped (initialized or uninitialized).
pub fn update(
    env: &Env,
    tick: i32,
    tick_current: i32,
    liquidity_delta: i128,
    rewards_growth_global: &Vec<u128>,
    upper: bool,
    max_liquidity: u128,
) -> bool {
    let mut info = get_tick(env, tick);

    let liquidity_gross_before = info.liquidity_gross;
    let liquidity_gross_after = add_delta(env, liquidity_gross_before, liquidity_delta);

    if liquidity_gross_after > max_liquidity {
        panic_with_error!(env, RewardsError::LiquidityOverflow);
    }

    let flipped = (liquidity_gross_after == 0) != (liquidity_gross_before == 0);

    if liquidity_gross_before == 0 {
        // Initialize tick. All growth before first initialization is deemed
        // to have happened below a tick sitting at or below current price.
        if tick <= tick_current {
            info.rewards_growth_outside = rewards_growth_global.clone();
        }
        info.initialized = true;
    }

    info.liquidity_gross = liquidity_gross_after;

    // Update liquidity_net (add for lower tick, subtract for upper tick)
    info.liquidity_net = if upper {
        match info.liquidity_net.checked_sub(liquidity_delta) {
            Some(net) => net,
            None => panic_with_error!(env, RewardsError::LiquidityOverflow),
        }
    } else {
        match info.liquidity_net.checked_add(liquidity_delta) {
            Some(net) => net,
            None => panic_with_error!(env, RewardsError::LiquidityOverflow),
        }
    };

    set_tick(env, tick, &info);

    flipped
}

/// Cross a tick as price moves past it.
/// Returns the liquidity delta for the caller to apply (negated by the
/// caller when price is decreasing).
pub fn cross(env: &Env, tick: i32, rewards_growth_global: &Vec<u128>) -> i128 {
    let mut info = get_tick(env, tick);

    // Flip growth outside on every channel in lock-step. Wrapping is
    // intentional: accumulators are monotone modulo 2^128 and the wrapped
    // difference is always the complementary region's growth.
    let mut outside = Vec::new(env);
    for channel in 0..NUM_REWARDS {
        let global = rewards_growth_global.get(channel).unwrap_or(0);
        let previous = info.rewards_growth_outside.get(channel).unwrap_or(0);
        outside.push_back(global.wrapping_sub(previous));
    }
    info.rewards_growth_outside = outside;

    set_tick(env, tick, &info);

    info.liquidity_net
}

/// Reset a tick to the zero record, reclaiming its storage entry.
/// Only called right after an update flips liquidity_gross back to zero, so
/// no residual bookkeeping can bias a later re-initialization.
pub fn clear(env: &Env, tick: i32) {
    remove_tick(env, tick);
}

/// Per-channel reward growth inside a tick range. Pure query; uninitialized
/// ticks read as zero records. A range whose bounds were never initialized
/// therefore reports the entire global growth as "inside" - callers
/// checkpoint against bounds they themselves initialized, so the reference
/// behavior is kept rather than guarded against.
pub fn get_reward_growth_inside(
    env: &Env,
    tick_lower: i32,
    tick_upper: i32,
    tick_current: i32,
    rewards_growth_global: &Vec<u128>,
) -> Vec<u128> {
    let lower = get_tick(env, tick_lower);
    let upper = get_tick(env, tick_upper);

    let mut inside = Vec::new(env);
    for channel in 0..NUM_REWARDS {
        let global = rewards_growth_global.get(channel).unwrap_or(0);
        let lower_outside = lower.rewards_growth_outside.get(channel).unwrap_or(0);
        let upper_outside = upper.rewards_growth_outside.get(channel).unwrap_or(0);

        let below = if tick_current >= tick_lower {
            lower_outside
        } else {
            global.wrapping_sub(lower_outside)
        };

        let above = if tick_current < tick_upper {
            upper_outside
        } else {
            global.wrapping_sub(upper_outside)
        };

        inside.push_back(global.wrapping_sub(below).wrapping_sub(above));
    }

    inside
}
