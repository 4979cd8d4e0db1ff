// SPDX-License-Identifier: MIT
// Sqrt Price Calculations

use crate::constants::{MAX_U160, RESOLUTION};
use crate::error::PoolError;
use crate::full_math::{div_rounding_up, mul_div_rounding_up};
use crate::u256::U256;

/// Next sqrt price after adding or removing `amount` of token0
///
/// Always rounds up: moving down (add) the price must not fall further than
/// the exact value, moving up (remove) it must reach at least the exact value.
pub fn get_next_sqrt_price_from_amount0_rounding_up(
    sqrt_price: U256,
    liquidity: u128,
    amount: u128,
    add: bool,
) -> Result<U256, PoolError> {
    if amount == 0 {
        return Ok(sqrt_price);
    }

    let numerator1 = U256::from(liquidity) << RESOLUTION;
    let amount = U256::from(amount);
    let (product, product_overflow) = amount.overflowing_mul(sqrt_price);

    if add {
        if !product_overflow {
            let (denominator, sum_overflow) = numerator1.overflowing_add(product);
            if !sum_overflow {
                return mul_div_rounding_up(numerator1, sqrt_price, denominator);
            }
        }
        // L / (L / P + x), which cannot overflow
        div_rounding_up(numerator1, (numerator1 / sqrt_price) + amount)
    } else {
        if product_overflow || numerator1 <= product {
            return Err(PoolError::PriceOverflow);
        }
        let denominator = numerator1 - product;
        let next = mul_div_rounding_up(numerator1, sqrt_price, denominator)?;
        if next > MAX_U160 {
            return Err(PoolError::PriceOverflow);
        }
        Ok(next)
    }
}

/// Next sqrt price after adding or removing `amount` of token1
///
/// Always rounds down: moving up (add) the price must not exceed the exact
/// value, moving down (remove) it must reach at most the exact value.
pub fn get_next_sqrt_price_from_amount1_rounding_down(
    sqrt_price: U256,
    liquidity: u128,
    amount: u128,
    add: bool,
) -> Result<U256, PoolError> {
    if liquidity == 0 {
        return Err(PoolError::ZeroLiquidity);
    }

    let liquidity = U256::from(liquidity);
    let shifted = U256::from(amount) << RESOLUTION;

    if add {
        let quotient = shifted / liquidity;
        let (next, overflow) = sqrt_price.overflowing_add(quotient);
        if overflow || next > MAX_U160 {
            return Err(PoolError::PriceOverflow);
        }
        Ok(next)
    } else {
        let quotient = div_rounding_up(shifted, liquidity)?;
        if sqrt_price <= quotient {
            return Err(PoolError::PriceOverflow);
        }
        Ok(sqrt_price - quotient)
    }
}

/// Next sqrt price given an input amount of token0 or token1
///
/// # Errors
/// * `SqrtPriceOutOfBounds` - sqrt_price is zero
/// * `ZeroLiquidity` - liquidity is zero
pub fn get_next_sqrt_price_from_input(
    sqrt_price: U256,
    liquidity: u128,
    amount_in: u128,
    zero_for_one: bool,
) -> Result<U256, PoolError> {
    if sqrt_price.is_zero() {
        return Err(PoolError::SqrtPriceOutOfBounds);
    }
    if liquidity == 0 {
        return Err(PoolError::ZeroLiquidity);
    }

    if zero_for_one {
        get_next_sqrt_price_from_amount0_rounding_up(sqrt_price, liquidity, amount_in, true)
    } else {
        get_next_sqrt_price_from_amount1_rounding_down(sqrt_price, liquidity, amount_in, true)
    }
}

/// Next sqrt price given an output amount of token0 or token1
///
/// # Errors
/// * `SqrtPriceOutOfBounds` - sqrt_price is zero
/// * `ZeroLiquidity` - liquidity is zero
/// * `PriceOverflow` - the pool cannot pay out `amount_out`
pub fn get_next_sqrt_price_from_output(
    sqrt_price: U256,
    liquidity: u128,
    amount_out: u128,
    zero_for_one: bool,
) -> Result<U256, PoolError> {
    if sqrt_price.is_zero() {
        return Err(PoolError::SqrtPriceOutOfBounds);
    }
    if liquidity == 0 {
        return Err(PoolError::ZeroLiquidity);
    }

    if zero_for_one {
        get_next_sqrt_price_from_amount1_rounding_down(sqrt_price, liquidity, amount_out, false)
    } else {
        get_next_sqrt_price_from_amount0_rounding_up(sqrt_price, liquidity, amount_out, false)
    }
}
