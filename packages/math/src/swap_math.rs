// SPDX-License-Identifier: MIT
// Single Swap Step

use crate::constants::PIPS_DENOMINATOR;
use crate::error::PoolError;
use crate::full_math::{mul_div_rounding_up_u128, mul_div_u128};
use crate::liquidity::{get_amount_0_delta, get_amount_1_delta};
use crate::sqrt_price::{get_next_sqrt_price_from_input, get_next_sqrt_price_from_output};
use crate::u256::{to_u128, U256};

/// Result of one price movement within a single liquidity region
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SwapStep {
    pub sqrt_price_next: U256,
    /// Input consumed, excluding the fee
    pub amount_in: u128,
    pub amount_out: u128,
    /// Fee charged on top of `amount_in`
    pub fee_amount: u128,
}

/// Compute one swap step from `sqrt_price_current` toward `sqrt_price_target`
///
/// `amount_remaining > 0` is input still to spend (fee included),
/// `amount_remaining < 0` is output still owed. Direction is implied by the
/// target: a target at or below the current price swaps token0 for token1.
///
/// The returned price never passes the target. The fee is rounded up and
/// the output rounded down, so a step never pays out more than it takes in.
pub fn compute_swap_step(
    sqrt_price_current: U256,
    sqrt_price_target: U256,
    liquidity: u128,
    amount_remaining: i128,
    fee_pips: u32,
) -> Result<SwapStep, PoolError> {
    if fee_pips >= PIPS_DENOMINATOR {
        return Err(PoolError::LpFeeTooLarge);
    }

    // No depth: jump straight to the target
    if liquidity == 0 {
        return Ok(SwapStep {
            sqrt_price_next: sqrt_price_target,
            amount_in: 0,
            amount_out: 0,
            fee_amount: 0,
        });
    }

    let zero_for_one = sqrt_price_current >= sqrt_price_target;
    let exact_in = amount_remaining > 0;
    let remaining = amount_remaining.unsigned_abs();
    let fee = fee_pips as u128;
    let denominator = PIPS_DENOMINATOR as u128;

    // Input needed to move all the way to `to`, rounded up
    let input_to = |to: U256| -> Result<U256, PoolError> {
        if zero_for_one {
            get_amount_0_delta(to, sqrt_price_current, liquidity, true)
        } else {
            get_amount_1_delta(sqrt_price_current, to, liquidity, true)
        }
    };

    // Output released moving all the way to `to`, rounded down
    let output_to = |to: U256| -> Result<U256, PoolError> {
        if zero_for_one {
            get_amount_1_delta(to, sqrt_price_current, liquidity, false)
        } else {
            get_amount_0_delta(sqrt_price_current, to, liquidity, false)
        }
    };

    if exact_in {
        let remaining_less_fee = mul_div_u128(remaining, denominator - fee, denominator)?;
        let max_in = input_to(sqrt_price_target)?;

        let (sqrt_price_next, amount_in, fee_amount) = if U256::from(remaining_less_fee) >= max_in {
            let amount_in = to_u128(max_in)?;
            let fee_amount = mul_div_rounding_up_u128(amount_in, fee, denominator - fee)?;
            (sqrt_price_target, amount_in, fee_amount)
        } else {
            let next = get_next_sqrt_price_from_input(
                sqrt_price_current,
                liquidity,
                remaining_less_fee,
                zero_for_one,
            )?;
            // Whatever is left over after the input is the fee
            (next, remaining_less_fee, remaining - remaining_less_fee)
        };

        let amount_out = to_u128(output_to(sqrt_price_next)?)?;

        Ok(SwapStep {
            sqrt_price_next,
            amount_in,
            amount_out,
            fee_amount,
        })
    } else {
        let max_out = output_to(sqrt_price_target)?;

        let (sqrt_price_next, amount_out) = if U256::from(remaining) >= max_out {
            (sqrt_price_target, to_u128(max_out)?)
        } else {
            let next = get_next_sqrt_price_from_output(
                sqrt_price_current,
                liquidity,
                remaining,
                zero_for_one,
            )?;
            (next, remaining)
        };

        let amount_in = to_u128(input_to(sqrt_price_next)?)?;
        let fee_amount = mul_div_rounding_up_u128(amount_in, fee, denominator - fee)?;

        Ok(SwapStep {
            sqrt_price_next,
            amount_in,
            amount_out,
            fee_amount,
        })
    }
}
