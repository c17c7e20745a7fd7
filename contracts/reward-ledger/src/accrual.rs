use crate::storage::{get_config, get_state, set_state};
use rewards_math::reward_growth_delta;
use rewards_types::{LedgerConfig, NUM_REWARDS};
use soroban_sdk::{Env, IntoVal, Symbol, Vec};

/// Advance the global growth accumulators to the current ledger timestamp.
///
/// Idempotent within a ledger close. An interval with no active liquidity
/// only advances the clock: rewards emitted while nobody was in range are
/// forfeited, not carried forward. Runs before any structural mutation in
/// the same invocation so growth never reflects time past a crossing.
pub fn accrue(env: &Env) {
    let mut state = get_state(env);
    let now = env.ledger().timestamp();

    if now <= state.last_accrual_time {
        return;
    }

    if state.active_liquidity == 0 {
        state.last_accrual_time = now;
        set_state(env, &state);
        return;
    }

    let config = get_config(env);
    let (rates, end_time) = latest_period_info(env, &config);

    let duration = accrual_window(state.last_accrual_time, now, end_time);
    if duration > 0 {
        let mut growth = state.rewards_growth_global.clone();
        for channel in 0..NUM_REWARDS {
            let rate = rates.get(channel).unwrap_or(0);
            if rate == 0 {
                continue;
            }
            let delta = reward_growth_delta(env, rate, duration, state.active_liquidity);
            let current = growth.get(channel).unwrap_or(0);
            // Accumulators are monotone modulo 2^128; differences stay exact
            growth.set(channel, current.wrapping_add(delta));
        }
        state.rewards_growth_global = growth;
    }

    state.last_accrual_time = now;
    set_state(env, &state);
}

/// Seconds of [last, now] that overlap the live emission stream.
/// Zero when the stream ended before the last accrual; clipped to end_time
/// when it ends mid-interval.
fn accrual_window(last: u64, now: u64, end_time: u64) -> u64 {
    let capped = if now < end_time { now } else { end_time };
    capped.saturating_sub(last)
}

/// Per-channel emission rates and the stream end-time for this pool,
/// as reported by the external rewards controller
fn latest_period_info(env: &Env, config: &LedgerConfig) -> (Vec<u128>, u64) {
    env.invoke_contract(
        &config.rate_source,
        &Symbol::new(env, "latest_period_info"),
        (config.pool.clone(),).into_val(env),
    )
}

#[cfg(test)]
mod tests {
    use super::accrual_window;

    #[test]
    fn test_window_fully_inside_stream() {
        assert_eq!(accrual_window(100, 600, 1000), 500);
    }

    #[test]
    fn test_window_clipped_at_stream_end() {
        assert_eq!(accrual_window(100, 1500, 1000), 900);
    }

    #[test]
    fn test_window_zero_when_stream_already_ended() {
        assert_eq!(accrual_window(1200, 1500, 1000), 0);
    }

    #[test]
    fn test_window_zero_when_time_did_not_advance() {
        assert_eq!(accrual_window(500, 500, 1000), 0);
    }

    #[test]
    fn test_window_ends_exactly_at_now() {
        assert_eq!(accrual_window(100, 1000, 1000), 900);
    }
}
