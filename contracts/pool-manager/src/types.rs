// Pool Manager Types

use soroban_sdk::{contracttype, Address, U256};

// Re-export types from packages
pub use belugaswap_tick::TickInfo;

// ============================================================
// POOL IDENTITY
// ============================================================

/// Identity of a pool
///
/// Two keys that differ in any field are different pools, including pools
/// over the same pair that only differ by hook.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolKey {
    /// Lower-sorting currency
    pub currency0: Address,
    /// Higher-sorting currency
    pub currency1: Address,
    /// LP fee in pips, or DYNAMIC_FEE_FLAG
    pub fee: u32,
    pub tick_spacing: i32,
    /// Hook contract called around every operation, if any
    pub hooks: Option<Address>,
}

// ============================================================
// POOL STATE
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    /// Current sqrt price as Q64.96 fixed point
    pub sqrt_price_x96: U256,
    /// Tick whose price bracket contains `sqrt_price_x96`
    pub tick: i32,
    /// Active liquidity in range
    pub liquidity: u128,
    /// Protocol share of swap input, in pips
    pub protocol_fee: u32,
    /// LP fee in pips
    pub lp_fee: u32,
    /// Global fee growth for currency0 (Q64.64)
    pub fee_growth_global_0_x64: u128,
    /// Global fee growth for currency1 (Q64.64)
    pub fee_growth_global_1_x64: u128,
}

// ============================================================
// OPERATION PARAMETERS
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModifyLiquidityParams {
    pub tick_lower: i32,
    pub tick_upper: i32,
    /// Positive adds liquidity, negative removes it
    pub liquidity_delta: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapParams {
    /// true: sell currency0 and move the price down
    pub zero_for_one: bool,
    /// Positive: exact input. Negative: exact output.
    pub amount_specified: i128,
    pub sqrt_price_limit_x96: U256,
}

/// Signed token amounts resulting from an operation
///
/// Positive values are owed to the pool, negative values are owed by it.
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BalanceDelta {
    pub amount0: i128,
    pub amount1: i128,
}

/// Simulated swap result
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapQuote {
    pub amount0: i128,
    pub amount1: i128,
    pub sqrt_price_x96: U256,
    pub tick: i32,
    pub liquidity: u128,
    pub ticks_crossed: u32,
}

// ============================================================
// MANAGER CONFIGURATION
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ManagerConfig {
    /// May pause pools, set protocol fees and update this config
    pub admin: Address,
    /// Cap on initialized ticks in any one pool
    pub max_ticks_per_pool: u32,
    /// Gross liquidity a tick must reach when it becomes initialized
    pub min_tick_liquidity: u128,
}
