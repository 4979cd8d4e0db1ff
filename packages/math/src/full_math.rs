// SPDX-License-Identifier: MIT
// Full-Precision Multiply/Divide

use crate::error::PoolError;
use crate::u256::{narrow, widen, U256, U512};

/// Calculates floor(a * b / denominator) with a 512-bit intermediate
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256, PoolError> {
    if denominator.is_zero() {
        return Err(PoolError::DivisionByZero);
    }

    let product = widen(a) * widen(b);
    let quotient = product / widen(denominator);

    narrow(quotient).ok_or(PoolError::MulDivOverflow)
}

/// Calculates ceil(a * b / denominator) with a 512-bit intermediate
pub fn mul_div_rounding_up(a: U256, b: U256, denominator: U256) -> Result<U256, PoolError> {
    if denominator.is_zero() {
        return Err(PoolError::DivisionByZero);
    }

    let product = widen(a) * widen(b);
    let den = widen(denominator);
    let mut quotient = product / den;
    if !(product % den).is_zero() {
        quotient = quotient + U512::one();
    }

    narrow(quotient).ok_or(PoolError::MulDivOverflow)
}

/// Divide with rounding up
#[inline]
pub fn div_rounding_up(numerator: U256, denominator: U256) -> Result<U256, PoolError> {
    if denominator.is_zero() {
        return Err(PoolError::DivisionByZero);
    }
    let quotient = numerator / denominator;
    if (numerator % denominator).is_zero() {
        Ok(quotient)
    } else {
        Ok(quotient + U256::one())
    }
}

/// Calculates floor(a * b / denominator) for u128 operands
///
/// The result must fit back into u128.
pub fn mul_div_u128(a: u128, b: u128, denominator: u128) -> Result<u128, PoolError> {
    let result = mul_div(U256::from(a), U256::from(b), U256::from(denominator))?;
    crate::u256::to_u128(result)
}

/// Calculates ceil(a * b / denominator) for u128 operands
pub fn mul_div_rounding_up_u128(a: u128, b: u128, denominator: u128) -> Result<u128, PoolError> {
    let result = mul_div_rounding_up(U256::from(a), U256::from(b), U256::from(denominator))?;
    crate::u256::to_u128(result)
}
