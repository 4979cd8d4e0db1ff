#![no_std]

use soroban_sdk::{contract, contractimpl, xdr::ToXdr, Address, BytesN, Env, Vec, U256};

// External packages
use belugaswap_math::{
    add_delta, check_tick_spacing,
    constants::{DEFAULT_MAX_TICKS_PER_POOL, DEFAULT_MIN_TICK_LIQUIDITY, DYNAMIC_FEE_FLAG, MAX_LP_FEE, MAX_PROTOCOL_FEE},
    get_amount_0_delta_signed, get_amount_1_delta_signed, get_sqrt_price_at_tick, get_tick_at_sqrt_price, PoolError,
};
use belugaswap_swap::{execute_swap, quote_swap, SwapFees, SwapRequest};
use belugaswap_tick::{check_ticks, get_fee_growth_inside};

// Local modules
pub mod convert;
mod events;
pub mod hooks;
pub mod lock;
mod staging;
pub mod storage;
pub mod types;

use convert::{to_host, to_native};
use events::*;
use hooks::HookDispatcher;
use staging::{swap_state, StagedPool};
use storage::*;
use types::{BalanceDelta, ManagerConfig, ModifyLiquidityParams, PoolKey, PoolState, SwapParams, SwapQuote, TickInfo};

#[contract]
pub struct PoolManager;

#[contractimpl]
impl PoolManager {
    // ========================================================
    // CONSTRUCTOR
    // ========================================================

    pub fn __constructor(env: Env, admin: Address) {
        let config = ManagerConfig {
            admin,
            max_ticks_per_pool: DEFAULT_MAX_TICKS_PER_POOL,
            min_tick_liquidity: DEFAULT_MIN_TICK_LIQUIDITY,
        };
        write_config(&env, &config);
        emit_config(&env, &config);
    }

    // ========================================================
    // POOL LIFECYCLE
    // ========================================================

    /// Create a pool at a starting price
    ///
    /// # Arguments
    /// * `caller` - Account creating the pool (forwarded to hooks)
    /// * `key` - Pool identity; currencies must be sorted
    /// * `sqrt_price_x96` - Starting sqrt price, Q64.96
    ///
    /// # Returns
    /// The starting tick
    pub fn initialize(env: Env, caller: Address, key: PoolKey, sqrt_price_x96: U256) -> Result<i32, PoolError> {
        caller.require_auth();

        validate_key(&key)?;
        let tick = get_tick_at_sqrt_price(to_native(&sqrt_price_x96))?;

        let id = Self::pool_id(env.clone(), key.clone());
        if has_pool(&env, &id) {
            return Err(PoolError::PoolAlreadyInitialized);
        }

        lock::acquire(&env, &id)?;
        let result = initialize_locked(&env, &id, &caller, &key, &sqrt_price_x96, tick);
        lock::release(&env, &id);
        result?;

        emit_initialize(&env, &id, &key, &sqrt_price_x96, tick);
        Ok(tick)
    }

    /// Add or remove liquidity over `[tick_lower, tick_upper)`
    ///
    /// # Returns
    /// Token amounts owed to the pool (positive) or to the caller (negative)
    pub fn modify_liquidity(
        env: Env,
        caller: Address,
        key: PoolKey,
        params: ModifyLiquidityParams,
    ) -> Result<BalanceDelta, PoolError> {
        caller.require_auth();

        let id = Self::pool_id(env.clone(), key.clone());
        if !has_pool(&env, &id) {
            return Err(PoolError::PoolNotInitialized);
        }
        if is_paused(&env, &id) {
            return Err(PoolError::PoolPaused);
        }
        check_ticks(params.tick_lower, params.tick_upper, key.tick_spacing)?;

        lock::acquire(&env, &id)?;
        let result = modify_liquidity_locked(&env, &id, &caller, &key, &params);
        lock::release(&env, &id);
        let delta = result?;

        emit_modify_liquidity(
            &env,
            &id,
            &caller,
            params.tick_lower,
            params.tick_upper,
            params.liquidity_delta,
            &delta,
        );
        Ok(delta)
    }

    /// Swap against the pool until the amount is used or the limit is hit
    ///
    /// # Returns
    /// Token amounts owed to the pool (positive) or to the caller (negative)
    pub fn swap(env: Env, caller: Address, key: PoolKey, params: SwapParams) -> Result<BalanceDelta, PoolError> {
        caller.require_auth();

        let id = Self::pool_id(env.clone(), key.clone());
        if !has_pool(&env, &id) {
            return Err(PoolError::PoolNotInitialized);
        }
        if is_paused(&env, &id) {
            return Err(PoolError::PoolPaused);
        }

        lock::acquire(&env, &id)?;
        let result = swap_locked(&env, &id, &caller, &key, &params);
        lock::release(&env, &id);
        let (delta, state) = result?;

        emit_swap(
            &env,
            &id,
            &caller,
            &delta,
            &state.sqrt_price_x96,
            state.liquidity,
            state.tick,
            state.lp_fee,
        );
        Ok(delta)
    }

    /// Simulate a swap without hooks or state changes
    pub fn quote_swap(env: Env, key: PoolKey, params: SwapParams) -> Result<SwapQuote, PoolError> {
        let id = Self::pool_id(env.clone(), key);
        let state = read_pool(&env, &id)?;
        let ticks = PoolTicks { id };

        let (outcome, after) = quote_swap(
            &env,
            &ticks,
            &swap_state(&state),
            &swap_request(&params),
            swap_fees(&state),
        )?;

        Ok(SwapQuote {
            amount0: outcome.amount0,
            amount1: outcome.amount1,
            sqrt_price_x96: to_host(&env, after.sqrt_price_x96),
            tick: after.tick,
            liquidity: after.liquidity,
            ticks_crossed: outcome.ticks_crossed,
        })
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    /// Pause or unpause liquidity changes and swaps on a pool
    pub fn set_paused(env: Env, key: PoolKey, paused: bool) -> Result<(), PoolError> {
        read_config(&env)?.admin.require_auth();

        let id = Self::pool_id(env.clone(), key);
        if !has_pool(&env, &id) {
            return Err(PoolError::PoolNotInitialized);
        }

        write_paused(&env, &id, paused);
        emit_paused(&env, &id, paused);
        Ok(())
    }

    /// Set the protocol's share of swap input, in pips
    pub fn set_protocol_fee(env: Env, key: PoolKey, protocol_fee: u32) -> Result<(), PoolError> {
        read_config(&env)?.admin.require_auth();

        if protocol_fee > MAX_PROTOCOL_FEE {
            return Err(PoolError::ProtocolFeeTooLarge);
        }

        let id = Self::pool_id(env.clone(), key);
        let mut state = read_pool(&env, &id)?;
        state.protocol_fee = protocol_fee;
        write_pool(&env, &id, &state);

        emit_protocol_fee(&env, &id, protocol_fee);
        Ok(())
    }

    /// Set the LP fee of a dynamic-fee pool (hook only)
    pub fn update_dynamic_lp_fee(env: Env, key: PoolKey, lp_fee: u32) -> Result<(), PoolError> {
        if key.fee != DYNAMIC_FEE_FLAG {
            return Err(PoolError::NotDynamicFee);
        }
        let hooks = key.hooks.clone().ok_or(PoolError::NotDynamicFee)?;
        hooks.require_auth();

        if lp_fee > MAX_LP_FEE {
            return Err(PoolError::LpFeeTooLarge);
        }

        let id = Self::pool_id(env.clone(), key);
        let mut state = read_pool(&env, &id)?;
        state.lp_fee = lp_fee;
        write_pool(&env, &id, &state);

        emit_dynamic_fee(&env, &id, lp_fee);
        Ok(())
    }

    /// Replace the manager configuration (current admin only)
    pub fn update_config(env: Env, config: ManagerConfig) -> Result<(), PoolError> {
        read_config(&env)?.admin.require_auth();

        if config.max_ticks_per_pool == 0 {
            return Err(PoolError::InvalidConfig);
        }

        write_config(&env, &config);
        emit_config(&env, &config);
        Ok(())
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    /// Storage id of a pool: sha256 of the XDR-encoded key
    pub fn pool_id(env: Env, key: PoolKey) -> BytesN<32> {
        env.crypto().sha256(&key.to_xdr(&env)).to_bytes()
    }

    pub fn get_pool_state(env: Env, key: PoolKey) -> Result<PoolState, PoolError> {
        read_pool(&env, &Self::pool_id(env.clone(), key))
    }

    /// Active liquidity at the current tick
    pub fn get_liquidity(env: Env, key: PoolKey) -> Result<u128, PoolError> {
        Ok(Self::get_pool_state(env, key)?.liquidity)
    }

    /// Sorted initialized ticks
    pub fn get_initialized_ticks(env: Env, key: PoolKey) -> Result<Vec<i32>, PoolError> {
        let id = Self::pool_id(env.clone(), key);
        if !has_pool(&env, &id) {
            return Err(PoolError::PoolNotInitialized);
        }
        Ok(read_tick_index(&env, &id))
    }

    /// Tick info; uninitialized ticks read as zero
    pub fn get_tick_info(env: Env, key: PoolKey, tick: i32) -> TickInfo {
        let id = Self::pool_id(env.clone(), key);
        read_tick(&env, &id, tick).unwrap_or_default()
    }

    /// Fee growth per unit of liquidity inside a range, per currency (Q64.64)
    pub fn get_fee_growth_inside(
        env: Env,
        key: PoolKey,
        tick_lower: i32,
        tick_upper: i32,
    ) -> Result<(u128, u128), PoolError> {
        let tick_spacing = key.tick_spacing;
        let id = Self::pool_id(env.clone(), key);
        let state = read_pool(&env, &id)?;
        check_ticks(tick_lower, tick_upper, tick_spacing)?;

        Ok(get_fee_growth_inside(
            tick_lower,
            &read_tick(&env, &id, tick_lower).unwrap_or_default(),
            tick_upper,
            &read_tick(&env, &id, tick_upper).unwrap_or_default(),
            state.tick,
            state.fee_growth_global_0_x64,
            state.fee_growth_global_1_x64,
        ))
    }

    pub fn is_paused(env: Env, key: PoolKey) -> bool {
        is_paused(&env, &Self::pool_id(env.clone(), key))
    }

    pub fn get_protocol_fees_accrued(env: Env, currency: Address) -> u128 {
        read_protocol_fees(&env, &currency)
    }

    pub fn get_config(env: Env) -> Result<ManagerConfig, PoolError> {
        read_config(&env)
    }
}

// ============================================================
// OPERATION BODIES (run with the pool lock held)
// ============================================================

fn initialize_locked(
    env: &Env,
    id: &BytesN<32>,
    caller: &Address,
    key: &PoolKey,
    sqrt_price_x96: &U256,
    tick: i32,
) -> Result<(), PoolError> {
    let hooks = HookDispatcher::new(env, caller, key);
    hooks.before_initialize(sqrt_price_x96)?;

    let state = PoolState {
        sqrt_price_x96: sqrt_price_x96.clone(),
        tick,
        liquidity: 0,
        protocol_fee: 0,
        lp_fee: if key.fee == DYNAMIC_FEE_FLAG { 0 } else { key.fee },
        fee_growth_global_0_x64: 0,
        fee_growth_global_1_x64: 0,
    };

    hooks.after_initialize(sqrt_price_x96, tick)?;

    write_pool(env, id, &state);
    Ok(())
}

fn modify_liquidity_locked(
    env: &Env,
    id: &BytesN<32>,
    caller: &Address,
    key: &PoolKey,
    params: &ModifyLiquidityParams,
) -> Result<BalanceDelta, PoolError> {
    let hooks = HookDispatcher::new(env, caller, key);
    hooks.before_modify_liquidity(params)?;

    let config = read_config(env)?;
    let ticks = PoolTicks { id: id.clone() };
    let mut staged = StagedPool::load(env, &ticks)?;
    let limits = StagedPool::limits(&config, key.tick_spacing)?;

    let tick = staged.state.tick;
    let (fee_growth_0, fee_growth_1) = (
        staged.state.fee_growth_global_0_x64,
        staged.state.fee_growth_global_1_x64,
    );
    staged.ledger.apply_liquidity_delta(
        params.tick_lower,
        params.tick_upper,
        params.liquidity_delta,
        tick,
        fee_growth_0,
        fee_growth_1,
        &limits,
    )?;

    let sqrt_price_lower = get_sqrt_price_at_tick(params.tick_lower)?;
    let sqrt_price_upper = get_sqrt_price_at_tick(params.tick_upper)?;
    let delta = params.liquidity_delta;

    let mut balance = BalanceDelta::default();
    if tick < params.tick_lower {
        // Range entirely above the price: only currency0
        balance.amount0 = get_amount_0_delta_signed(sqrt_price_lower, sqrt_price_upper, delta)?;
    } else if tick < params.tick_upper {
        let sqrt_price = to_native(&staged.state.sqrt_price_x96);
        balance.amount0 = get_amount_0_delta_signed(sqrt_price, sqrt_price_upper, delta)?;
        balance.amount1 = get_amount_1_delta_signed(sqrt_price_lower, sqrt_price, delta)?;
        staged.state.liquidity = add_delta(staged.state.liquidity, delta)?;
    } else {
        balance.amount1 = get_amount_1_delta_signed(sqrt_price_lower, sqrt_price_upper, delta)?;
    }

    hooks.after_modify_liquidity(params, &balance)?;

    staged.commit();
    Ok(balance)
}

fn swap_locked(
    env: &Env,
    id: &BytesN<32>,
    caller: &Address,
    key: &PoolKey,
    params: &SwapParams,
) -> Result<(BalanceDelta, PoolState), PoolError> {
    let hooks = HookDispatcher::new(env, caller, key);
    hooks.before_swap(params)?;

    let ticks = PoolTicks { id: id.clone() };
    let mut staged = StagedPool::load(env, &ticks)?;
    let fees = swap_fees(&staged.state);

    let mut swap_state = staged.swap_state();
    let outcome = execute_swap(&mut staged.ledger, &mut swap_state, &swap_request(params), fees)?;
    staged.set_swap_state(&swap_state);

    let balance = BalanceDelta {
        amount0: outcome.amount0,
        amount1: outcome.amount1,
    };

    hooks.after_swap(params, &balance)?;

    let input_currency = if params.zero_for_one { &key.currency0 } else { &key.currency1 };
    accrue_protocol_fees(env, input_currency, outcome.protocol_fee_amount)?;

    let state = staged.state.clone();
    staged.commit();
    Ok((balance, state))
}

// ============================================================
// HELPERS
// ============================================================

/// # Errors
/// * `CurrenciesOutOfOrder` - currency0 does not sort strictly below currency1
/// * `TickSpacingTooSmall` / `TickSpacingTooLarge`
/// * `LpFeeTooLarge` - static fee above MAX_LP_FEE
fn validate_key(key: &PoolKey) -> Result<(), PoolError> {
    if key.currency0 >= key.currency1 {
        return Err(PoolError::CurrenciesOutOfOrder);
    }
    check_tick_spacing(key.tick_spacing)?;
    if key.fee != DYNAMIC_FEE_FLAG && key.fee > MAX_LP_FEE {
        return Err(PoolError::LpFeeTooLarge);
    }
    Ok(())
}

fn swap_request(params: &SwapParams) -> SwapRequest {
    SwapRequest {
        zero_for_one: params.zero_for_one,
        amount_specified: params.amount_specified,
        sqrt_price_limit_x96: to_native(&params.sqrt_price_limit_x96),
    }
}

fn swap_fees(state: &PoolState) -> SwapFees {
    SwapFees {
        lp_fee: state.lp_fee,
        protocol_fee: state.protocol_fee,
    }
}
