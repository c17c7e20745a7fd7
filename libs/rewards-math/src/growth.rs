use crate::full_math::mul_div;
use rewards_types::{Q64, RATE_SCALE};
use soroban_sdk::Env;

/// Reward growth per unit of active liquidity for one channel over an
/// accrual window, as a Q128.128 value:
///
///   duration * rate * 2^128 / (RATE_SCALE * liquidity)
///
/// Built from two mul_div calls, each contributing one 2^64 factor, so no
/// intermediate exceeds 256 bits. `rate_per_second` is in RATE_SCALE-ths of
/// a token unit per second. Fails with ArithmeticOverflow if the delta
/// itself does not fit the accumulator width.
pub fn reward_growth_delta(
    env: &Env,
    rate_per_second: u128,
    duration: u64,
    liquidity: u128,
) -> u128 {
    let elapsed_x64 = (duration as u128) << 64;
    let accrued_x64 = mul_div(env, rate_per_second, elapsed_x64, RATE_SCALE);
    mul_div(env, accrued_x64, Q64, liquidity)
}
