// Pool manager events module for BelugaSwap
// Every event is published after its operation has committed.
// Topics: (name, pool_id)

use soroban_sdk::{Address, BytesN, Env, Symbol, U256};

use crate::types::{BalanceDelta, ManagerConfig, PoolKey};

/// Emitted when a pool is initialized
/// Data: (key, sqrt_price_x96, tick)
pub fn emit_initialize(env: &Env, id: &BytesN<32>, key: &PoolKey, sqrt_price_x96: &U256, tick: i32) {
    env.events().publish(
        (Symbol::new(env, "initialize"), id.clone()),
        (key.clone(), sqrt_price_x96.clone(), tick),
    );
}

/// Emitted when liquidity is added or removed
/// Data: (caller, tick_lower, tick_upper, liquidity_delta, amount0, amount1)
pub fn emit_modify_liquidity(
    env: &Env,
    id: &BytesN<32>,
    caller: &Address,
    tick_lower: i32,
    tick_upper: i32,
    liquidity_delta: i128,
    delta: &BalanceDelta,
) {
    env.events().publish(
        (Symbol::new(env, "modify_liquidity"), id.clone()),
        (
            caller.clone(),
            tick_lower,
            tick_upper,
            liquidity_delta,
            delta.amount0,
            delta.amount1,
        ),
    );
}

/// Emitted after each swap
/// Data: (caller, amount0, amount1, sqrt_price_x96, liquidity, tick, lp_fee)
#[allow(clippy::too_many_arguments)]
pub fn emit_swap(
    env: &Env,
    id: &BytesN<32>,
    caller: &Address,
    delta: &BalanceDelta,
    sqrt_price_x96: &U256,
    liquidity: u128,
    tick: i32,
    lp_fee: u32,
) {
    env.events().publish(
        (Symbol::new(env, "swap"), id.clone()),
        (
            caller.clone(),
            delta.amount0,
            delta.amount1,
            sqrt_price_x96.clone(),
            liquidity,
            tick,
            lp_fee,
        ),
    );
}

pub fn emit_paused(env: &Env, id: &BytesN<32>, paused: bool) {
    env.events()
        .publish((Symbol::new(env, "paused"), id.clone()), paused);
}

pub fn emit_protocol_fee(env: &Env, id: &BytesN<32>, protocol_fee: u32) {
    env.events()
        .publish((Symbol::new(env, "protocol_fee"), id.clone()), protocol_fee);
}

pub fn emit_dynamic_fee(env: &Env, id: &BytesN<32>, lp_fee: u32) {
    env.events()
        .publish((Symbol::new(env, "dynamic_fee"), id.clone()), lp_fee);
}

/// Config is manager-wide, so its topic carries the admin instead of a pool id
pub fn emit_config(env: &Env, config: &ManagerConfig) {
    env.events().publish(
        (Symbol::new(env, "config"), config.admin.clone()),
        (config.max_ticks_per_pool, config.min_tick_liquidity),
    );
}
