// SPDX-License-Identifier: MIT
// Liquidity Calculations

use crate::constants::{Q96, RESOLUTION};
use crate::error::PoolError;
use crate::full_math::{div_rounding_up, mul_div, mul_div_rounding_up};
use crate::u256::{to_i128, U256};

#[inline]
fn sort_prices(a: U256, b: U256) -> (U256, U256) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

/// Amount of token0 between two sqrt prices for a given liquidity
///
/// amount0 = L * (sqrt_upper - sqrt_lower) / (sqrt_upper * sqrt_lower)
pub fn get_amount_0_delta(
    sqrt_price_a: U256,
    sqrt_price_b: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<U256, PoolError> {
    let (sqrt_lower, sqrt_upper) = sort_prices(sqrt_price_a, sqrt_price_b);

    if sqrt_lower.is_zero() {
        return Err(PoolError::SqrtPriceOutOfBounds);
    }

    let numerator1 = U256::from(liquidity) << RESOLUTION;
    let numerator2 = sqrt_upper - sqrt_lower;

    if round_up {
        let scaled = mul_div_rounding_up(numerator1, numerator2, sqrt_upper)?;
        div_rounding_up(scaled, sqrt_lower)
    } else {
        Ok(mul_div(numerator1, numerator2, sqrt_upper)? / sqrt_lower)
    }
}

/// Amount of token1 between two sqrt prices for a given liquidity
///
/// amount1 = L * (sqrt_upper - sqrt_lower)
pub fn get_amount_1_delta(
    sqrt_price_a: U256,
    sqrt_price_b: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<U256, PoolError> {
    let (sqrt_lower, sqrt_upper) = sort_prices(sqrt_price_a, sqrt_price_b);
    let diff = sqrt_upper - sqrt_lower;

    if round_up {
        mul_div_rounding_up(U256::from(liquidity), diff, Q96)
    } else {
        mul_div(U256::from(liquidity), diff, Q96)
    }
}

/// Signed token0 amount for a liquidity delta
///
/// Adding liquidity (positive delta) rounds up and is owed to the pool;
/// removing rounds down and is owed to the caller, reported negative.
pub fn get_amount_0_delta_signed(
    sqrt_price_a: U256,
    sqrt_price_b: U256,
    liquidity_delta: i128,
) -> Result<i128, PoolError> {
    let magnitude = liquidity_delta.unsigned_abs();
    if liquidity_delta < 0 {
        let amount = to_i128(get_amount_0_delta(sqrt_price_a, sqrt_price_b, magnitude, false)?)?;
        Ok(-amount)
    } else {
        to_i128(get_amount_0_delta(sqrt_price_a, sqrt_price_b, magnitude, true)?)
    }
}

/// Signed token1 amount for a liquidity delta
pub fn get_amount_1_delta_signed(
    sqrt_price_a: U256,
    sqrt_price_b: U256,
    liquidity_delta: i128,
) -> Result<i128, PoolError> {
    let magnitude = liquidity_delta.unsigned_abs();
    if liquidity_delta < 0 {
        let amount = to_i128(get_amount_1_delta(sqrt_price_a, sqrt_price_b, magnitude, false)?)?;
        Ok(-amount)
    } else {
        to_i128(get_amount_1_delta(sqrt_price_a, sqrt_price_b, magnitude, true)?)
    }
}

/// Apply a signed delta to an unsigned liquidity value
///
/// # Errors
/// * `InsufficientLiquidity` - the result would be negative
/// * `LiquidityOverflow` - the result would exceed u128::MAX
pub fn add_delta(liquidity: u128, delta: i128) -> Result<u128, PoolError> {
    if delta < 0 {
        liquidity
            .checked_sub(delta.unsigned_abs())
            .ok_or(PoolError::InsufficientLiquidity)
    } else {
        liquidity
            .checked_add(delta as u128)
            .ok_or(PoolError::LiquidityOverflow)
    }
}
