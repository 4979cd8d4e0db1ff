// Compatible with OpenZeppelin Stellar Soroban Contracts patterns
//
// Constants module following OpenZeppelin conventions:
// - Clear documentation for each constant
// - Grouped by functionality
// - Uses appropriate types for each constant

use crate::u256::U256;

// ============================================================
// TICK CONSTANTS
// ============================================================

/// Minimum valid tick value (corresponds to minimum price)
/// Price at MIN_TICK ≈ 2.94e-39
pub const MIN_TICK: i32 = -887272;

/// Maximum valid tick value (corresponds to maximum price)
/// Price at MAX_TICK ≈ 3.40e+38
pub const MAX_TICK: i32 = 887272;

/// Smallest tick spacing a pool may use
pub const MIN_TICK_SPACING: i32 = 1;

/// Largest tick spacing a pool may use
pub const MAX_TICK_SPACING: i32 = 32767;

// ============================================================
// SQRT PRICE CONSTANTS (Q64.96 format)
// ============================================================

/// Minimum sqrt price, equal to get_sqrt_price_at_tick(MIN_TICK)
/// 4295128739
pub const MIN_SQRT_PRICE: U256 = U256([4_295_128_739, 0, 0, 0]);

/// Maximum sqrt price, equal to get_sqrt_price_at_tick(MAX_TICK)
/// 1461446703485210103287273052203988822378723970342 (exclusive upper bound)
pub const MAX_SQRT_PRICE: U256 = U256([
    0x5d95_1d52_6398_8d26,
    0xefd1_fc6a_5064_8849,
    0xfffd_8963,
    0,
]);

/// Sqrt price for 1:1 price ratio (2^96)
pub const SQRT_PRICE_1_1: U256 = U256([0, 1 << 32, 0, 0]);

// ============================================================
// MATH CONSTANTS
// ============================================================

/// Q96 multiplier (2^96), the scaling factor for Q64.96 sqrt prices
pub const Q96: U256 = U256([0, 1 << 32, 0, 0]);

/// Number of fractional bits in a Q64.96 value
pub const RESOLUTION: usize = 96;

/// Largest value representable in 160 bits
pub const MAX_U160: U256 = U256([u64::MAX, u64::MAX, u32::MAX as u64, 0]);

/// Q64 multiplier (2^64), the scaling factor for fee growth accumulators
pub const Q64: u128 = 1u128 << 64;

// ============================================================
// FEE CONSTANTS (pips = parts per million)
// ============================================================

/// Denominator for every fee expressed in pips
pub const PIPS_DENOMINATOR: u32 = 1_000_000;

/// Maximum static or dynamic LP fee (10%)
pub const MAX_LP_FEE: u32 = 100_000;

/// Maximum protocol fee (0.1%)
pub const MAX_PROTOCOL_FEE: u32 = 1_000;

/// Fee value in a pool key marking a hook-controlled LP fee
pub const DYNAMIC_FEE_FLAG: u32 = 0x80_0000;

// ============================================================
// TICK LEDGER DEFAULTS
// ============================================================

/// Default cap on initialized ticks per pool
pub const DEFAULT_MAX_TICKS_PER_POOL: u32 = 1000;

/// Default minimum gross liquidity a tick must reach when first initialized
pub const DEFAULT_MIN_TICK_LIQUIDITY: u128 = 1000;
