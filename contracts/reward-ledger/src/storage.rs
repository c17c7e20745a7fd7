use rewards_types::{LedgerConfig, LedgerState, RewardsError, TickRewardInfo};
use soroban_sdk::{contracttype, panic_with_error, Env};

// ============================================================================
// SOROBAN RESOURCE LIMITS - Constraints for ledger operations:
// ============================================================================
// - Ledger entry size: 128 KiB max per entry
// - Read entries per tx: 100 entries / 200 KB
// - Write entries per tx: 50 entries / 132 KB
//
// Storage design considerations:
// - Each tick record (~400 bytes with ten growth slots) is a separate entry,
//   keyed by tick index; absent entries are logically zero records
// - Empty records are removed so the tick set stays sparse even though the
//   key range spans hundreds of thousands of indices
// - A liquidity change touches 2 tick entries + state; a crossing touches 1
//   tick entry + state - both far inside the write entry limit
// ============================================================================

/// Storage keys for the reward ledger contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Ledger configuration (Instance storage)
    Config,
    /// Accrual state (Instance storage)
    State,
    /// Tick data: tick_index -> TickRewardInfo (Persistent storage)
    Tick(i32),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Config ===

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> LedgerConfig {
    extend_instance_ttl(env);
    match env.storage().instance().get(&DataKey::Config) {
        Some(config) => config,
        None => panic_with_error!(env, RewardsError::NotInitialized),
    }
}

pub fn set_config(env: &Env, config: &LedgerConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === State ===

pub fn get_state(env: &Env) -> LedgerState {
    extend_instance_ttl(env);
    match env.storage().instance().get(&DataKey::State) {
        Some(state) => state,
        None => panic_with_error!(env, RewardsError::NotInitialized),
    }
}

pub fn set_state(env: &Env, state: &LedgerState) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance_ttl(env);
}

// === Tick ===

pub fn get_tick(env: &Env, tick: i32) -> TickRewardInfo {
    let key = DataKey::Tick(tick);
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| TickRewardInfo::new(env))
}

pub fn set_tick(env: &Env, tick: i32, info: &TickRewardInfo) {
    let key = DataKey::Tick(tick);
    if info.liquidity_gross == 0 && !info.initialized {
        // Remove empty tick
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, info);
        extend_persistent_ttl(env, &key);
    }
}

pub fn remove_tick(env: &Env, tick: i32) {
    env.storage().persistent().remove(&DataKey::Tick(tick));
}

pub fn has_tick(env: &Env, tick: i32) -> bool {
    env.storage().persistent().has(&DataKey::Tick(tick))
}
