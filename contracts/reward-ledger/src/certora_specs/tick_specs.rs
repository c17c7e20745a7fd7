// ============================================================================
// TICK INVARIANT SPECIFICATIONS
// ============================================================================
//
// These specifications verify the correctness of the per-tick reward
// bookkeeping: flip detection, growth-outside seeding and the crossing
// inversion.
//
// KEY INVARIANTS:
// 1. Tick bounds are respected
// 2. Gross liquidity stays within the pool-wide cap
// 3. Net magnitude never exceeds gross
// 4. The crossing inversion is an involution when growth stands still
//
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

/// RULE: Tick is within valid range
#[cfg(feature = "certora")]
#[rule]
pub fn tick_in_valid_range(tick: i32) {
    use rewards_types::{MAX_TICK, MIN_TICK};

    cvlr_assume!(tick >= MIN_TICK);
    cvlr_assume!(tick <= MAX_TICK);
    cvlr_assert!(tick >= MIN_TICK && tick <= MAX_TICK);
}

/// RULE: Gross liquidity after a valid delta stays within the cap
#[cfg(feature = "certora")]
#[rule]
pub fn gross_liquidity_respects_cap(liquidity_gross: u128, delta: i128, max_liquidity: u128) {
    use crate::invariants::{liquidity_delta_valid, tick_liquidity_bounded};

    cvlr_assume!(liquidity_delta_valid(liquidity_gross, delta));

    let after = if delta < 0 {
        liquidity_gross - delta.unsigned_abs()
    } else {
        liquidity_gross + (delta as u128)
    };

    cvlr_assume!(tick_liquidity_bounded(after, max_liquidity));
    cvlr_assert!(after <= max_liquidity);
}

/// RULE: Liquidity net magnitude bounded by gross
#[cfg(feature = "certora")]
#[rule]
pub fn liquidity_net_bounded_by_gross(liquidity_gross: u128, liquidity_net: i128) {
    use crate::invariants;

    cvlr_assume!(invariants::liquidity_net_bounded_by_gross(
        liquidity_gross,
        liquidity_net
    ));
    cvlr_assert!(liquidity_net.unsigned_abs() <= liquidity_gross);
}

/// RULE: Crossing twice with unchanged global growth restores the record
#[cfg(feature = "certora")]
#[rule]
pub fn crossing_inversion_is_involution(growth_global: u128, growth_outside: u128) {
    let once = growth_global.wrapping_sub(growth_outside);
    let twice = growth_global.wrapping_sub(once);

    cvlr_assert!(twice == growth_outside);
}

/// RULE: Growth inside plus both outsides reconstructs the global counter
#[cfg(feature = "certora")]
#[rule]
pub fn growth_regions_partition_global(growth_global: u128, below: u128, above: u128) {
    let inside = growth_global.wrapping_sub(below).wrapping_sub(above);
    let reconstructed = inside.wrapping_add(below).wrapping_add(above);

    cvlr_assert!(reconstructed == growth_global);
}

/// SANITY: A positive-gross record is reachable
#[cfg(feature = "certora")]
#[rule]
pub fn sanity_initialized_tick_exists(liquidity_gross: u128) {
    cvlr_satisfy!(liquidity_gross > 0);
}
