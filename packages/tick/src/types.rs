// Tick Types

use soroban_sdk::contracttype;

/// Information stored for each initialized tick
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TickInfo {
    /// Total liquidity referencing this tick
    pub liquidity_gross: u128,
    /// Net liquidity change when crossing left-to-right
    pub liquidity_net: i128,
    /// Fee growth on the other side of this tick for token0 (Q64.64)
    pub fee_growth_outside_0_x64: u128,
    /// Fee growth on the other side of this tick for token1 (Q64.64)
    pub fee_growth_outside_1_x64: u128,
}

impl TickInfo {
    /// A tick is initialized iff some range still references it
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.liquidity_gross > 0
    }
}

/// Bounds applied when a liquidity delta touches a tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LedgerLimits {
    /// Cap on `liquidity_gross` for any single tick
    pub max_liquidity_per_tick: u128,
    /// Gross liquidity a tick must reach when it becomes initialized
    pub min_tick_liquidity: u128,
    /// Cap on the number of initialized ticks
    pub max_ticks: u32,
}

/// Next tick a swap can reach in one direction
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NextTick {
    pub tick: i32,
    /// False when `tick` is the MIN_TICK / MAX_TICK sentinel
    pub initialized: bool,
}
