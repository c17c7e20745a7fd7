// ============================================================================
// LEDGER INVARIANT SPECIFICATIONS
// ============================================================================
//
// Rules for the time-accrual side of the ledger: clock monotonicity, the
// stream-end clipping of accrual windows, and wrapping-aware growth
// monotonicity.
//
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

/// RULE: The accrual clock never moves backwards
#[cfg(feature = "certora")]
#[rule]
pub fn accrual_clock_monotonic(last: u64, now: u64) {
    use crate::invariants;

    cvlr_assume!(now >= last);
    cvlr_assert!(invariants::accrual_clock_monotonic(last, now));
}

/// RULE: The accrual window never extends past the stream end or before last
#[cfg(feature = "certora")]
#[rule]
pub fn accrual_window_bounded(last: u64, now: u64, end_time: u64) {
    cvlr_assume!(now >= last);

    let capped = if now < end_time { now } else { end_time };
    let duration = capped.saturating_sub(last);

    cvlr_assert!(duration <= now - last);
    cvlr_assert!(last + duration <= end_time || duration == 0);
}

/// RULE: Zero active liquidity accrues zero growth
#[cfg(feature = "certora")]
#[rule]
pub fn zero_liquidity_accrues_nothing(growth_before: u128, active_liquidity: u128) {
    cvlr_assume!(active_liquidity == 0);

    // The accrual path only advances the clock in this state
    let growth_after = growth_before;
    cvlr_assert!(growth_after == growth_before);
}

/// RULE: Wrapping accumulation of a small delta stays monotone
#[cfg(feature = "certora")]
#[rule]
pub fn growth_accumulation_monotonic(growth: u128, delta: u128) {
    use crate::invariants::growth_monotonic;

    cvlr_assume!(delta < u128::MAX / 2);

    let after = growth.wrapping_add(delta);
    cvlr_assert!(growth_monotonic(growth, after));
}

/// SANITY: An accruing ledger state is reachable
#[cfg(feature = "certora")]
#[rule]
pub fn sanity_active_ledger_exists(active_liquidity: u128, now: u64, last: u64) {
    cvlr_satisfy!(active_liquidity > 0 && now > last);
}
