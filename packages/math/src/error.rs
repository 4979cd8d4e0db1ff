// SPDX-License-Identifier: MIT
// Engine Error Codes
//
// A single error enum shared by every package and by the pool manager
// contract. Codes are grouped by failure class:
// - 1xx: validation (request rejected before any state is touched)
// - 2xx: pool / tick state
// - 3xx: resource limits
// - 4xx: hook acknowledgement
// - 5xx: fixed-point arithmetic

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    // Validation errors (100-199)
    /// Tick outside [MIN_TICK, MAX_TICK]
    TickOutOfBounds = 100,
    /// Sqrt price outside [MIN_SQRT_PRICE, MAX_SQRT_PRICE)
    SqrtPriceOutOfBounds = 101,
    /// Lower tick must be strictly below upper tick
    TicksMisordered = 102,
    /// Tick is not a multiple of the pool's tick spacing
    TickMisaligned = 103,
    /// currency0 must sort strictly below currency1
    CurrenciesOutOfOrder = 104,
    /// Tick spacing below MIN_TICK_SPACING
    TickSpacingTooSmall = 105,
    /// Tick spacing above MAX_TICK_SPACING
    TickSpacingTooLarge = 106,
    /// LP fee above MAX_LP_FEE
    LpFeeTooLarge = 107,
    /// Protocol fee above MAX_PROTOCOL_FEE
    ProtocolFeeTooLarge = 108,
    /// Swap amount must be non-zero
    SwapAmountCannotBeZero = 109,
    /// Price limit is already on the wrong side of the current price
    PriceLimitAlreadyExceeded = 110,
    /// Price limit outside the open interval (MIN_SQRT_PRICE, MAX_SQRT_PRICE)
    PriceLimitOutOfBounds = 111,
    /// Pool does not use a dynamic LP fee
    NotDynamicFee = 112,
    /// Manager configuration value rejected
    InvalidConfig = 113,

    // State errors (200-299)
    /// Pool has already been initialized
    PoolAlreadyInitialized = 200,
    /// Pool has not been initialized
    PoolNotInitialized = 201,
    /// Removing more liquidity than is referenced or active
    InsufficientLiquidity = 202,
    /// New tick does not clear the minimum liquidity threshold
    TickLiquidityTooLow = 203,
    /// Tick gross liquidity above max liquidity per tick
    TickLiquidityOverflow = 204,
    /// Pool is paused by the admin
    PoolPaused = 205,
    /// Pool already has a mutating operation in flight
    PoolLocked = 206,

    // Resource errors (300-399)
    /// Initialized-tick index is at capacity
    TickIndexFull = 300,

    // Hook errors (400-499)
    /// Hook returned something other than the expected acknowledgement
    InvalidHookResponse = 400,
    /// Hook invocation failed
    HookCallFailed = 401,

    // Math errors (500-599)
    /// mul_div result does not fit in 256 bits
    MulDivOverflow = 500,
    /// Division by zero
    DivisionByZero = 501,
    /// Token amount does not fit the target integer type
    AmountOverflow = 502,
    /// Liquidity addition overflowed u128
    LiquidityOverflow = 503,
    /// Next sqrt price does not fit in 160 bits or would cross zero
    PriceOverflow = 504,
    /// Price movement requested against zero liquidity
    ZeroLiquidity = 505,
}
