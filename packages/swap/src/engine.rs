use belugaswap_math::{
    add_delta, compute_swap_step,
    constants::{MAX_SQRT_PRICE, MIN_SQRT_PRICE, PIPS_DENOMINATOR},
    get_sqrt_price_at_tick, get_tick_at_sqrt_price, mul_div_u128, PoolError,
};
use belugaswap_tick::{fee_growth_delta, TickLedger, TickStorage};
use soroban_sdk::Env;

use crate::types::{SwapFees, SwapOutcome, SwapRequest, SwapState};

// ============================================================
// FEES
// ============================================================

/// Total fee charged on swap input
///
/// The protocol fee is taken first and the LP fee applies to the rest:
/// `protocol + lp - protocol * lp / 1e6`.
#[inline]
pub fn compute_swap_fee(fees: SwapFees) -> u32 {
    if fees.protocol_fee == 0 {
        return fees.lp_fee;
    }
    let protocol = fees.protocol_fee as u64;
    let lp = fees.lp_fee as u64;
    (protocol + lp - protocol * lp / PIPS_DENOMINATOR as u64) as u32
}

// ============================================================
// VALIDATION
// ============================================================

/// Reject swaps that cannot make progress
///
/// # Errors
/// * `SwapAmountCannotBeZero` - amount_specified is 0
/// * `PriceLimitAlreadyExceeded` - limit is not beyond the current price
/// * `PriceLimitOutOfBounds` - limit is at or past the global price bounds
pub fn validate_swap(state: &SwapState, request: &SwapRequest) -> Result<(), PoolError> {
    if request.amount_specified == 0 {
        return Err(PoolError::SwapAmountCannotBeZero);
    }

    let limit = request.sqrt_price_limit_x96;
    if request.zero_for_one {
        if limit >= state.sqrt_price_x96 {
            return Err(PoolError::PriceLimitAlreadyExceeded);
        }
        if limit <= MIN_SQRT_PRICE {
            return Err(PoolError::PriceLimitOutOfBounds);
        }
    } else {
        if limit <= state.sqrt_price_x96 {
            return Err(PoolError::PriceLimitAlreadyExceeded);
        }
        if limit >= MAX_SQRT_PRICE {
            return Err(PoolError::PriceLimitOutOfBounds);
        }
    }

    Ok(())
}

// ============================================================
// SWAP LOOP
// ============================================================

/// Execute a swap against staged pool state
///
/// Steps from one initialized tick to the next until the specified amount
/// is used up or the price limit is reached. Crossed ticks are written to
/// `ledger`; the final price, tick, liquidity and fee growth are written to
/// `state` only if the whole swap succeeds.
pub fn execute_swap<S: TickStorage>(
    ledger: &mut TickLedger<'_, S>,
    state: &mut SwapState,
    request: &SwapRequest,
    fees: SwapFees,
) -> Result<SwapOutcome, PoolError> {
    validate_swap(state, request)?;

    let zero_for_one = request.zero_for_one;
    let exact_in = request.amount_specified > 0;
    let limit = request.sqrt_price_limit_x96;
    let swap_fee = compute_swap_fee(fees);

    let mut remaining = request.amount_specified;
    let mut calculated: i128 = 0;
    let mut sqrt_price = state.sqrt_price_x96;
    let mut tick = state.tick;
    let mut liquidity = state.liquidity;
    let mut fee_growth_global = if zero_for_one {
        state.fee_growth_global_0_x64
    } else {
        state.fee_growth_global_1_x64
    };
    let mut outcome = SwapOutcome::default();

    while remaining != 0 && sqrt_price != limit {
        let sqrt_price_start = sqrt_price;

        // Downward the tick at `tick` itself is still ahead of the price
        let next = if zero_for_one {
            ledger.next_initialized_tick(tick.saturating_add(1), true)
        } else {
            ledger.next_initialized_tick(tick, false)
        };
        let sqrt_price_next = get_sqrt_price_at_tick(next.tick)?;

        let target = if zero_for_one {
            sqrt_price_next.max(limit)
        } else {
            sqrt_price_next.min(limit)
        };

        let step = compute_swap_step(sqrt_price, target, liquidity, remaining, swap_fee)?;
        sqrt_price = step.sqrt_price_next;

        let gross_in = step
            .amount_in
            .checked_add(step.fee_amount)
            .ok_or(PoolError::AmountOverflow)?;
        let gross_in_signed = i128::try_from(gross_in).map_err(|_| PoolError::AmountOverflow)?;
        let out_signed = i128::try_from(step.amount_out).map_err(|_| PoolError::AmountOverflow)?;

        if exact_in {
            remaining = remaining
                .checked_sub(gross_in_signed)
                .ok_or(PoolError::AmountOverflow)?;
            calculated = calculated
                .checked_sub(out_signed)
                .ok_or(PoolError::AmountOverflow)?;
        } else {
            remaining = remaining
                .checked_add(out_signed)
                .ok_or(PoolError::AmountOverflow)?;
            calculated = calculated
                .checked_add(gross_in_signed)
                .ok_or(PoolError::AmountOverflow)?;
        }

        let mut lp_fee_amount = step.fee_amount;
        if fees.protocol_fee > 0 {
            let protocol_share = if swap_fee == fees.protocol_fee {
                step.fee_amount
            } else {
                mul_div_u128(gross_in, fees.protocol_fee as u128, PIPS_DENOMINATOR as u128)?
            };
            lp_fee_amount -= protocol_share;
            outcome.protocol_fee_amount = outcome
                .protocol_fee_amount
                .checked_add(protocol_share)
                .ok_or(PoolError::AmountOverflow)?;
        }
        outcome.lp_fee_amount = outcome
            .lp_fee_amount
            .checked_add(lp_fee_amount)
            .ok_or(PoolError::AmountOverflow)?;

        if liquidity > 0 && lp_fee_amount > 0 {
            fee_growth_global = fee_growth_global.wrapping_add(fee_growth_delta(lp_fee_amount, liquidity)?);
        }

        if sqrt_price == sqrt_price_next {
            if next.initialized {
                let (fee_growth_0, fee_growth_1) = if zero_for_one {
                    (fee_growth_global, state.fee_growth_global_1_x64)
                } else {
                    (state.fee_growth_global_0_x64, fee_growth_global)
                };

                let mut liquidity_net = ledger.cross(next.tick, fee_growth_0, fee_growth_1);
                if zero_for_one {
                    liquidity_net = liquidity_net.checked_neg().ok_or(PoolError::LiquidityOverflow)?;
                }
                liquidity = add_delta(liquidity, liquidity_net)?;
                outcome.ticks_crossed += 1;
            }
            tick = if zero_for_one { next.tick - 1 } else { next.tick };
        } else if sqrt_price != sqrt_price_start {
            tick = get_tick_at_sqrt_price(sqrt_price)?;
        }
    }

    let specified_used = request
        .amount_specified
        .checked_sub(remaining)
        .ok_or(PoolError::AmountOverflow)?;

    if zero_for_one == exact_in {
        outcome.amount0 = specified_used;
        outcome.amount1 = calculated;
    } else {
        outcome.amount0 = calculated;
        outcome.amount1 = specified_used;
    }

    state.sqrt_price_x96 = sqrt_price;
    state.tick = tick;
    state.liquidity = liquidity;
    if zero_for_one {
        state.fee_growth_global_0_x64 = fee_growth_global;
    } else {
        state.fee_growth_global_1_x64 = fee_growth_global;
    }

    Ok(outcome)
}

/// Quote a swap without executing (read-only simulation)
///
/// Runs the same loop over a throwaway ledger and a cloned state.
///
/// # Returns
/// `(outcome, state after the swap)`
pub fn quote_swap<S: TickStorage>(
    env: &Env,
    storage: &S,
    state: &SwapState,
    request: &SwapRequest,
    fees: SwapFees,
) -> Result<(SwapOutcome, SwapState), PoolError> {
    let mut ledger = TickLedger::load(env, storage);
    let mut sim_state = state.clone();

    let outcome = execute_swap(&mut ledger, &mut sim_state, request, fees)?;

    Ok((outcome, sim_state))
}
