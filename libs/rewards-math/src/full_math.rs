use rewards_types::RewardsError;
use soroban_sdk::{panic_with_error, Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 {
        panic_with_error!(env, RewardsError::DivisionByZero);
    }

    let a_256 = U256::from_u128(env, a);
    let b_256 = U256::from_u128(env, b);
    let denom_256 = U256::from_u128(env, denominator);

    let product = a_256.mul(&b_256);
    let result = product.div(&denom_256);

    u128_from_u256(env, &result)
}

/// Multiply and divide with 256-bit intermediate precision (rounds up)
/// Returns ceil((a * b) / denominator)
pub fn mul_div_rounding_up(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    let result = mul_div(env, a, b, denominator);

    // Check if there was a remainder
    let a_256 = U256::from_u128(env, a);
    let b_256 = U256::from_u128(env, b);
    let denom_256 = U256::from_u128(env, denominator);

    let product = a_256.mul(&b_256);
    let remainder = product.rem_euclid(&denom_256);

    if remainder.gt(&U256::from_u32(env, 0)) {
        match result.checked_add(1) {
            Some(rounded) => rounded,
            None => panic_with_error!(env, RewardsError::ArithmeticOverflow),
        }
    } else {
        result
    }
}

/// Convert U256 to u128, fails with ArithmeticOverflow if it does not fit
fn u128_from_u256(env: &Env, value: &U256) -> u128 {
    match value.to_u128() {
        Some(value) => value,
        None => panic_with_error!(env, RewardsError::ArithmeticOverflow),
    }
}

/// Unsigned division with rounding up
pub fn div_rounding_up(env: &Env, a: u128, b: u128) -> u128 {
    if b == 0 {
        panic_with_error!(env, RewardsError::DivisionByZero);
    }
    if a == 0 {
        return 0;
    }
    (a - 1) / b + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    // === mul_div tests ===

    #[test]
    fn test_mul_div_basic() {
        let env = Env::default();
        // Basic test: (10 * 20) / 5 = 40
        assert_eq!(mul_div(&env, 10, 20, 5), 40);
    }

    #[test]
    fn test_mul_div_large_numbers() {
        let env = Env::default();
        // Products that would overflow u128 must still divide back down
        // (2^100 * 2^100) / 2^100 = 2^100
        let large = 1u128 << 100;
        assert_eq!(mul_div(&env, large, large, large), large);
    }

    #[test]
    fn test_mul_div_max_values() {
        let env = Env::default();
        // (MAX * MAX) / MAX = MAX (works via the U256 intermediate)
        let max = u128::MAX;
        assert_eq!(mul_div(&env, max, max, max), max);
    }

    #[test]
    fn test_mul_div_zero_numerator() {
        let env = Env::default();
        assert_eq!(mul_div(&env, 0, 100, 50), 0);
        assert_eq!(mul_div(&env, 100, 0, 50), 0);
    }

    #[test]
    fn test_mul_div_rounds_down() {
        let env = Env::default();
        // 1 * 1 / 2 = 0 (rounds down)
        assert_eq!(mul_div(&env, 1, 1, 2), 0);
        // 3 * 1 / 2 = 1 (rounds down from 1.5)
        assert_eq!(mul_div(&env, 3, 1, 2), 1);
        // 5 * 1 / 3 = 1 (rounds down from 1.67)
        assert_eq!(mul_div(&env, 5, 1, 3), 1);
    }

    #[test]
    fn test_mul_div_q128_scaling() {
        let env = Env::default();
        // Simulate per-liquidity growth scaling: one 2^64 step at a time
        let q64 = 1u128 << 64;
        assert_eq!(mul_div(&env, 1, q64, q64), 1);
        assert_eq!(mul_div(&env, q64, q64, q64), q64);
    }

    #[test]
    #[should_panic]
    fn test_mul_div_zero_denominator() {
        let env = Env::default();
        mul_div(&env, 10, 20, 0);
    }

    #[test]
    #[should_panic]
    fn test_mul_div_result_exceeds_u128() {
        let env = Env::default();
        // MAX * MAX / 1 cannot fit back into u128
        mul_div(&env, u128::MAX, u128::MAX, 1);
    }

    // === mul_div_rounding_up tests ===

    #[test]
    fn test_mul_div_rounding_up_exact() {
        let env = Env::default();
        // Exact division: (10 * 20) / 5 = 40
        assert_eq!(mul_div_rounding_up(&env, 10, 20, 5), 40);
    }

    #[test]
    fn test_mul_div_rounding_up_with_remainder() {
        let env = Env::default();
        // With remainder: (10 * 3) / 7 = 4.28... -> 5
        assert_eq!(mul_div_rounding_up(&env, 10, 3, 7), 5);
        // 1 * 1 / 2 = 0.5 -> 1
        assert_eq!(mul_div_rounding_up(&env, 1, 1, 2), 1);
        // 1 * 1 / 3 = 0.33 -> 1
        assert_eq!(mul_div_rounding_up(&env, 1, 1, 3), 1);
    }

    #[test]
    fn test_mul_div_rounding_up_vs_down_difference() {
        let env = Env::default();
        // When there's a remainder, rounding up is exactly 1 more
        let result_down = mul_div(&env, 7, 11, 13);
        let result_up = mul_div_rounding_up(&env, 7, 11, 13);
        // 7 * 11 = 77, 77 / 13 = 5.923... -> down: 5, up: 6
        assert_eq!(result_down, 5);
        assert_eq!(result_up, 6);
    }

    #[test]
    #[should_panic]
    fn test_mul_div_rounding_up_zero_denominator() {
        let env = Env::default();
        mul_div_rounding_up(&env, 10, 20, 0);
    }

    #[test]
    fn test_mul_div_rounding_up_exact_at_max() {
        let env = Env::default();
        // Exact quotient at the top of the range needs no rounding step
        assert_eq!(mul_div_rounding_up(&env, u128::MAX, 7, 7), u128::MAX);
    }

    // === div_rounding_up tests ===

    #[test]
    fn test_div_rounding_up_exact() {
        let env = Env::default();
        assert_eq!(div_rounding_up(&env, 9, 3), 3);
        assert_eq!(div_rounding_up(&env, 100, 10), 10);
    }

    #[test]
    fn test_div_rounding_up_with_remainder() {
        let env = Env::default();
        assert_eq!(div_rounding_up(&env, 10, 3), 4);
        assert_eq!(div_rounding_up(&env, 11, 3), 4);
        assert_eq!(div_rounding_up(&env, 1, 2), 1);
    }

    #[test]
    fn test_div_rounding_up_zero_numerator() {
        let env = Env::default();
        assert_eq!(div_rounding_up(&env, 0, 5), 0);
    }

    #[test]
    #[should_panic]
    fn test_div_rounding_up_zero_denominator() {
        let env = Env::default();
        div_rounding_up(&env, 10, 0);
    }

    // === phantom overflow ===

    #[test]
    fn test_phantom_overflow_scenario() {
        let env = Env::default();
        // a * b overflows u128 but the quotient fits
        let q64 = 1u128 << 64;
        let a = q64 * 3;
        let b = q64 * 2;
        // (3 * 2^64) * (2 * 2^64) / 2^64 = 6 * 2^64
        assert_eq!(mul_div(&env, a, b, q64), q64 * 6);
    }
}
