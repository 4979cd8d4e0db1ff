// Per-pool operation lock
//
// Held in temporary storage from the start of a mutating operation until it
// returns, across every hook call in between.

use belugaswap_math::PoolError;
use soroban_sdk::{BytesN, Env};

use crate::storage::DataKey;

pub fn is_locked(env: &Env, id: &BytesN<32>) -> bool {
    env.storage().temporary().has(&DataKey::Lock(id.clone()))
}

/// # Errors
/// * `PoolLocked` - another operation on this pool is in flight
pub fn acquire(env: &Env, id: &BytesN<32>) -> Result<(), PoolError> {
    if is_locked(env, id) {
        return Err(PoolError::PoolLocked);
    }
    env.storage().temporary().set(&DataKey::Lock(id.clone()), &true);
    Ok(())
}

pub fn release(env: &Env, id: &BytesN<32>) {
    env.storage().temporary().remove(&DataKey::Lock(id.clone()));
}
