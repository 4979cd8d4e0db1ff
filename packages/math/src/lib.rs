// BelugaSwap Math Package
//
// Fixed-point primitives for the concentrated-liquidity engine:
// Q64.96 sqrt prices, the tick codec, amount deltas and single swap steps.

#![no_std]

pub mod constants;
pub mod error;
pub mod full_math;
pub mod liquidity;
pub mod sqrt_price;
pub mod swap_math;
pub mod tick_math;
pub mod u256;

// Re-export commonly used items from constants
pub use constants::*;

pub use error::PoolError;

pub use u256::{U256, U512};

pub use full_math::{div_rounding_up, mul_div, mul_div_rounding_up, mul_div_rounding_up_u128, mul_div_u128};

pub use tick_math::{
    check_tick_spacing,
    get_sqrt_price_at_tick,
    get_tick_at_sqrt_price,
    is_aligned,
    max_liquidity_per_tick,
};

pub use sqrt_price::{get_next_sqrt_price_from_input, get_next_sqrt_price_from_output};

pub use liquidity::{
    add_delta,
    get_amount_0_delta,
    get_amount_0_delta_signed,
    get_amount_1_delta,
    get_amount_1_delta_signed,
};

pub use swap_math::{compute_swap_step, SwapStep};
