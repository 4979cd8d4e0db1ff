#![allow(dead_code)]

use belugaswap_tick::{LedgerLimits, TickChanges, TickInfo};
use soroban_sdk::Map;

pub const MIN_LIQ: u128 = 1_000;

pub fn limits(max_ticks: u32) -> LedgerLimits {
    LedgerLimits {
        max_liquidity_per_tick: u128::MAX,
        min_tick_liquidity: MIN_LIQ,
        max_ticks,
    }
}

/// Apply staged changes to an in-memory tick table
pub fn commit(store: &mut Map<i32, TickInfo>, changes: TickChanges) {
    for (tick, info) in changes.ticks.iter() {
        if info.is_initialized() {
            store.set(tick, info);
        } else {
            store.remove(tick);
        }
    }
}

/// Sum of liquidity_net over every stored tick
pub fn net_sum(store: &Map<i32, TickInfo>) -> i128 {
    store.values().iter().map(|info| info.liquidity_net).sum()
}
