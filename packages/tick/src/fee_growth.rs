// Fee Growth Calculations

use belugaswap_math::{mul_div, PoolError, Q64, U256};

use crate::types::TickInfo;

/// Fee growth per unit of liquidity accrued inside [lower_tick, upper_tick)
///
/// All accumulators are Q64.64 and wrap; only differences are meaningful.
pub fn get_fee_growth_inside(
    lower_tick: i32,
    lower_info: &TickInfo,
    upper_tick: i32,
    upper_info: &TickInfo,
    current_tick: i32,
    fee_growth_global_0: u128,
    fee_growth_global_1: u128,
) -> (u128, u128) {
    let (fee_growth_below_0, fee_growth_below_1) = if current_tick >= lower_tick {
        (lower_info.fee_growth_outside_0_x64, lower_info.fee_growth_outside_1_x64)
    } else {
        (
            fee_growth_global_0.wrapping_sub(lower_info.fee_growth_outside_0_x64),
            fee_growth_global_1.wrapping_sub(lower_info.fee_growth_outside_1_x64),
        )
    };

    let (fee_growth_above_0, fee_growth_above_1) = if current_tick < upper_tick {
        (upper_info.fee_growth_outside_0_x64, upper_info.fee_growth_outside_1_x64)
    } else {
        (
            fee_growth_global_0.wrapping_sub(upper_info.fee_growth_outside_0_x64),
            fee_growth_global_1.wrapping_sub(upper_info.fee_growth_outside_1_x64),
        )
    };

    let fee_growth_inside_0 = fee_growth_global_0
        .wrapping_sub(fee_growth_below_0)
        .wrapping_sub(fee_growth_above_0);

    let fee_growth_inside_1 = fee_growth_global_1
        .wrapping_sub(fee_growth_below_1)
        .wrapping_sub(fee_growth_above_1);

    (fee_growth_inside_0, fee_growth_inside_1)
}

/// Fee growth increment for `fee_amount` spread over `liquidity`, in Q64.64
///
/// Truncated to 128 bits; accumulators wrap.
pub fn fee_growth_delta(fee_amount: u128, liquidity: u128) -> Result<u128, PoolError> {
    let growth = mul_div(U256::from(fee_amount), U256::from(Q64), U256::from(liquidity))?;
    Ok(growth.low_u128())
}
