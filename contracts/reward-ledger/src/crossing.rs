use crate::storage::{get_state, get_tick, set_state};
use crate::{accrual, tick};
use rewards_math::add_delta;
use soroban_sdk::Env;

/// Settle a tick crossing pushed by the base pool.
/// `zero_for_one` is true when the crossing moves price down; the tick's
/// net liquidity is negated in that direction before being applied.
pub fn on_tick_crossed(env: &Env, tick_index: i32, zero_for_one: bool) {
    // Growth must reflect time up to, not past, the crossing
    accrual::accrue(env);

    let info = get_tick(env, tick_index);
    if info.liquidity_gross == 0 {
        // Nothing references this tick; crossing it moves no liquidity
        return;
    }

    let mut state = get_state(env);

    let liquidity_net = tick::cross(env, tick_index, &state.rewards_growth_global);
    let liquidity_net = if zero_for_one {
        -liquidity_net
    } else {
        liquidity_net
    };

    state.active_liquidity = add_delta(env, state.active_liquidity, liquidity_net);
    set_state(env, &state);
}
