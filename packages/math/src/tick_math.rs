// SPDX-License-Identifier: MIT
// Tick <-> Sqrt Price Codec (Q64.96)

use crate::constants::{MAX_SQRT_PRICE, MAX_TICK, MIN_SQRT_PRICE, MIN_TICK, MAX_TICK_SPACING, MIN_TICK_SPACING};
use crate::error::PoolError;
use crate::u256::U256;

// ============================================================
// PER-BIT RATIOS
// ============================================================

/// 2^128 / sqrt(1.0001)^(2^i) for i in 0..20
const RATIOS: [u128; 20] = [
    0xfffcb933bd6fad37aa2d162d1a594001,
    0xfff97272373d413259a46990580e213a,
    0xfff2e50f5f656932ef12357cf3c7fdcc,
    0xffe5caca7e10e4e61c3624eaa0941cd0,
    0xffcb9843d60f6159c9db58835c926644,
    0xff973b41fa98c081472e6896dfb254c0,
    0xff2ea16466c96a3843ec78b326b52861,
    0xfe5dee046a99a2a811c461f1969c3053,
    0xfcbe86c7900a88aedcffc83b479aa3a4,
    0xf987a7253ac413176f2b074cf7815e54,
    0xf3392b0822b70005940c7a398e4b70f3,
    0xe7159475a2c29b7443b29c7fa6e889d9,
    0xd097f3bdfd2022b8845ad8f792aa5825,
    0xa9f746462d870fdf8a65dc1f90e061e5,
    0x70d869a156d2a1b890bb3df62baf32f7,
    0x31be135f97d08fd981231505542fcfa6,
    0x09aa508b5b7a84e1c677de54f3e99bc9,
    0x005d6af8dedb81196699c329225ee604,
    0x00002216e584f5fa1ea926041bedfe98,
    0x00000000048a170391f7dc42444e8fa2,
];

/// log_sqrt(1.0001)(2) in Q128.128 divided by 2^64
const LOG_SQRT_10001_MULTIPLIER: u128 = 255738958999603826347141;

/// Error margins applied to the log before truncation to a tick
const TICK_LOW_ERROR: u128 = 3402992956809132418596140100660247210;
const TICK_HIGH_ERROR: u128 = 291339464771989622907027621153398088495;

// ============================================================
// TICK -> SQRT PRICE
// ============================================================

/// Returns sqrt(1.0001^tick) * 2^96
///
/// Each set bit of |tick| multiplies a Q128.128 accumulator by the matching
/// precomputed ratio; the result is inverted for positive ticks and rounded
/// up when shifted down to Q64.96, so that `get_tick_at_sqrt_price` of the
/// result returns `tick` again.
///
/// # Errors
/// * `TickOutOfBounds` - tick outside [MIN_TICK, MAX_TICK]
pub fn get_sqrt_price_at_tick(tick: i32) -> Result<U256, PoolError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(PoolError::TickOutOfBounds);
    }

    let abs_tick = tick.unsigned_abs();

    let mut ratio = if abs_tick & 0x1 != 0 {
        U256::from(RATIOS[0])
    } else {
        U256::one() << 128
    };

    for (bit, constant) in RATIOS.iter().enumerate().skip(1) {
        if abs_tick & (1u32 << bit) != 0 {
            ratio = (ratio * U256::from(*constant)) >> 128;
        }
    }

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128.128 -> Q64.96, rounding up
    let round_up = ratio.low_u64() & 0xffff_ffff != 0;
    let mut sqrt_price = ratio >> 32;
    if round_up {
        sqrt_price = sqrt_price + U256::one();
    }

    Ok(sqrt_price)
}

// ============================================================
// SQRT PRICE -> TICK
// ============================================================

/// Returns the greatest tick whose sqrt price is <= `sqrt_price_x96`
///
/// # Errors
/// * `SqrtPriceOutOfBounds` - price outside [MIN_SQRT_PRICE, MAX_SQRT_PRICE)
pub fn get_tick_at_sqrt_price(sqrt_price_x96: U256) -> Result<i32, PoolError> {
    if sqrt_price_x96 < MIN_SQRT_PRICE || sqrt_price_x96 >= MAX_SQRT_PRICE {
        return Err(PoolError::SqrtPriceOutOfBounds);
    }

    // Q128.128 ratio; the price bounds keep the msb within [64, 191]
    let ratio = sqrt_price_x96 << 32;
    let msb = ratio.bits() - 1;

    let mut r = if msb >= 128 {
        ratio >> (msb - 127)
    } else {
        ratio << (127 - msb)
    };

    let mut log_2: i128 = (msb as i128 - 128) << 64;

    for shift in (50..64).rev() {
        r = (r * r) >> 127;
        let f = r >> 128;
        if !f.is_zero() {
            log_2 |= 1i128 << shift;
            r = r >> 1;
        }
    }

    let log_sqrt10001 = twos_complement(log_2)
        .overflowing_mul(U256::from(LOG_SQRT_10001_MULTIPLIER))
        .0;

    let tick_low = arithmetic_shift_128(log_sqrt10001.overflowing_sub(U256::from(TICK_LOW_ERROR)).0);
    let tick_high = arithmetic_shift_128(log_sqrt10001.overflowing_add(U256::from(TICK_HIGH_ERROR)).0);

    if tick_low == tick_high {
        return Ok(tick_low);
    }

    if get_sqrt_price_at_tick(tick_high)? <= sqrt_price_x96 {
        Ok(tick_high)
    } else {
        Ok(tick_low)
    }
}

/// Encode a signed value as a 256-bit two's complement word
fn twos_complement(value: i128) -> U256 {
    let magnitude = U256::from(value.unsigned_abs());
    if value < 0 {
        U256::zero().overflowing_sub(magnitude).0
    } else {
        magnitude
    }
}

/// Signed `x >> 128` of a two's complement word, truncated to a tick
fn arithmetic_shift_128(x: U256) -> i32 {
    let shifted = if x.bit(255) { !((!x) >> 128) } else { x >> 128 };
    shifted.low_u128() as i128 as i32
}

// ============================================================
// TICK SPACING
// ============================================================

/// Validate a pool's tick spacing
pub fn check_tick_spacing(tick_spacing: i32) -> Result<(), PoolError> {
    if tick_spacing < MIN_TICK_SPACING {
        return Err(PoolError::TickSpacingTooSmall);
    }
    if tick_spacing > MAX_TICK_SPACING {
        return Err(PoolError::TickSpacingTooLarge);
    }
    Ok(())
}

/// Max gross liquidity any single tick may reference
///
/// Spreads u128::MAX evenly over every usable tick so that active liquidity
/// cannot overflow even if every tick is crossed in one direction.
pub fn max_liquidity_per_tick(tick_spacing: i32) -> Result<u128, PoolError> {
    check_tick_spacing(tick_spacing)?;

    let min_tick = (MIN_TICK / tick_spacing) * tick_spacing;
    let max_tick = (MAX_TICK / tick_spacing) * tick_spacing;
    let num_ticks = ((max_tick - min_tick) / tick_spacing) as u128 + 1;

    Ok(u128::MAX / num_ticks)
}

/// Returns true if `tick` is a multiple of `tick_spacing`
#[inline]
pub fn is_aligned(tick: i32, tick_spacing: i32) -> bool {
    tick % tick_spacing == 0
}
