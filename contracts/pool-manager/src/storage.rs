// Pool manager storage module for BelugaSwap

use belugaswap_math::PoolError;
use belugaswap_tick::{TickChanges, TickInfo, TickStorage};
use soroban_sdk::{contracttype, Address, BytesN, Env, Vec};

use crate::types::{ManagerConfig, PoolState};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    /// Manager configuration
    Config,
    /// Pool state by pool id
    Pool(BytesN<32>),
    /// Tick info by (pool id, tick)
    Tick(BytesN<32>, i32),
    /// Sorted initialized ticks by pool id
    TickIndex(BytesN<32>),
    /// Pause flag by pool id
    Paused(BytesN<32>),
    /// Protocol fees accrued per currency
    ProtocolFees(Address),
    /// In-flight operation flag by pool id (temporary storage)
    Lock(BytesN<32>),
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
/// TTL bump threshold
const PERSISTENT_BUMP: u32 = 6_307_200;

/// Extend TTL for a persistent storage key
fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &ManagerConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_ttl(env, &DataKey::Config);
}

/// Read manager configuration (written by the constructor)
pub fn read_config(env: &Env) -> Result<ManagerConfig, PoolError> {
    env.storage()
        .persistent()
        .get(&DataKey::Config)
        .ok_or(PoolError::InvalidConfig)
}

// ============================================================
// POOL STATE
// ============================================================

pub fn has_pool(env: &Env, id: &BytesN<32>) -> bool {
    env.storage().persistent().has(&DataKey::Pool(id.clone()))
}

pub fn read_pool(env: &Env, id: &BytesN<32>) -> Result<PoolState, PoolError> {
    env.storage()
        .persistent()
        .get(&DataKey::Pool(id.clone()))
        .ok_or(PoolError::PoolNotInitialized)
}

pub fn write_pool(env: &Env, id: &BytesN<32>, state: &PoolState) {
    let key = DataKey::Pool(id.clone());
    env.storage().persistent().set(&key, state);
    extend_ttl(env, &key);
}

// ============================================================
// TICKS
// ============================================================

pub fn read_tick(env: &Env, id: &BytesN<32>, tick: i32) -> Option<TickInfo> {
    env.storage().persistent().get(&DataKey::Tick(id.clone(), tick))
}

pub fn read_tick_index(env: &Env, id: &BytesN<32>) -> Vec<i32> {
    env.storage()
        .persistent()
        .get(&DataKey::TickIndex(id.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

/// Write staged tick changes; uninitialized ticks are deleted
pub fn write_tick_changes(env: &Env, id: &BytesN<32>, changes: &TickChanges) {
    for (tick, info) in changes.ticks.iter() {
        let key = DataKey::Tick(id.clone(), tick);
        if info.is_initialized() {
            env.storage().persistent().set(&key, &info);
            extend_ttl(env, &key);
        } else {
            env.storage().persistent().remove(&key);
        }
    }

    if let Some(index) = &changes.index {
        let key = DataKey::TickIndex(id.clone());
        env.storage().persistent().set(&key, index);
        extend_ttl(env, &key);
    }
}

/// One pool's persisted ticks, as seen by the tick ledger
pub struct PoolTicks {
    pub id: BytesN<32>,
}

impl TickStorage for PoolTicks {
    fn read_tick(&self, env: &Env, tick: i32) -> Option<TickInfo> {
        read_tick(env, &self.id, tick)
    }

    fn read_tick_index(&self, env: &Env) -> Vec<i32> {
        read_tick_index(env, &self.id)
    }
}

// ============================================================
// PAUSE
// ============================================================

pub fn is_paused(env: &Env, id: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Paused(id.clone()))
        .unwrap_or(false)
}

pub fn write_paused(env: &Env, id: &BytesN<32>, paused: bool) {
    let key = DataKey::Paused(id.clone());
    env.storage().persistent().set(&key, &paused);
    extend_ttl(env, &key);
}

// ============================================================
// PROTOCOL FEES
// ============================================================

pub fn read_protocol_fees(env: &Env, currency: &Address) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::ProtocolFees(currency.clone()))
        .unwrap_or(0)
}

/// Add to the protocol fees accrued in `currency`
pub fn accrue_protocol_fees(env: &Env, currency: &Address, amount: u128) -> Result<(), PoolError> {
    if amount == 0 {
        return Ok(());
    }
    let total = read_protocol_fees(env, currency)
        .checked_add(amount)
        .ok_or(PoolError::AmountOverflow)?;

    let key = DataKey::ProtocolFees(currency.clone());
    env.storage().persistent().set(&key, &total);
    extend_ttl(env, &key);
    Ok(())
}
