// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Formal verification rules for the reward ledger, covering the growth
// accounting invariants that unit tests can only sample.
//
// STRUCTURE (following Certora best practices):
//
// - tick_specs.rs   : Tick index update/cross/growth-inside rules
// - ledger_specs.rs : Accrual window and active-liquidity rules
//
// PATTERNS USED:
//
// 1. Skolem variables - Prove universal properties for arbitrary values
// 2. Assume/assert pairs around the pure helpers in `invariants`
// 3. Sanity rules - Ensure rules aren't vacuously true
//
// USAGE:
// - Unit tests: cargo test -p reward-ledger
// - Certora build: cargo build --features certora -p reward-ledger
// - Verification: certoraSorobanProver reward_ledger.conf
//
// ============================================================================

pub mod ledger_specs;
pub mod tick_specs;
