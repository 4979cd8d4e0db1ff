#![allow(dead_code)]

use belugaswap_math::{get_sqrt_price_at_tick, PoolError, U256};
use belugaswap_swap::*;
use belugaswap_tick::{LedgerLimits, TickInfo, TickLedger};
use soroban_sdk::{Env, Map};

pub const L: i128 = 1_000_000_000_000_000_000;
pub const FEE: u32 = 3_000;

pub fn limits() -> LedgerLimits {
    LedgerLimits {
        max_liquidity_per_tick: u128::MAX,
        min_tick_liquidity: 1_000,
        max_ticks: 100,
    }
}

pub fn price(tick: i32) -> U256 {
    get_sqrt_price_at_tick(tick).unwrap()
}

pub fn u(s: &str) -> U256 {
    U256::from_dec_str(s).unwrap()
}

/// Tick table holding the given (lower, upper, liquidity) ranges
pub fn ticks_with(env: &Env, ranges: &[(i32, i32, i128)]) -> Map<i32, TickInfo> {
    let mut store = Map::new(env);
    let changes = {
        let mut ledger = TickLedger::load(env, &store);
        for (lower, upper, delta) in ranges {
            ledger
                .apply_liquidity_delta(*lower, *upper, *delta, 0, 0, 0, &limits())
                .unwrap();
        }
        ledger.into_changes()
    };
    for (tick, info) in changes.ticks.iter() {
        store.set(tick, info);
    }
    store
}

pub fn state_at(tick: i32, liquidity: u128) -> SwapState {
    SwapState {
        sqrt_price_x96: price(tick),
        tick,
        liquidity,
        fee_growth_global_0_x64: 0,
        fee_growth_global_1_x64: 0,
    }
}

pub fn request(zero_for_one: bool, amount_specified: i128, limit: U256) -> SwapRequest {
    SwapRequest {
        zero_for_one,
        amount_specified,
        sqrt_price_limit_x96: limit,
    }
}

pub fn fees(lp_fee: u32, protocol_fee: u32) -> SwapFees {
    SwapFees { lp_fee, protocol_fee }
}

/// Run a swap over a fresh ledger, returning the outcome and the ticks it wrote
pub fn run(
    env: &Env,
    store: &Map<i32, TickInfo>,
    state: &mut SwapState,
    req: &SwapRequest,
    fees: SwapFees,
) -> Result<(SwapOutcome, Map<i32, TickInfo>), PoolError> {
    let mut ledger = TickLedger::load(env, store);
    let outcome = execute_swap(&mut ledger, state, req, fees)?;
    Ok((outcome, ledger.into_changes().ticks))
}
