// Staged Pool
//
// One pool's state and ticks loaded for a single operation. All changes stay
// in memory until `commit`; dropping a StagedPool discards them.

use belugaswap_math::{max_liquidity_per_tick, PoolError};
use belugaswap_swap::SwapState;
use belugaswap_tick::{LedgerLimits, TickLedger};
use soroban_sdk::{BytesN, Env};

use crate::convert::{to_host, to_native};
use crate::storage::{read_pool, write_pool, write_tick_changes, PoolTicks};
use crate::types::{ManagerConfig, PoolState};

/// The part of a pool's state the swap loop works on
pub fn swap_state(state: &PoolState) -> SwapState {
    SwapState {
        sqrt_price_x96: to_native(&state.sqrt_price_x96),
        tick: state.tick,
        liquidity: state.liquidity,
        fee_growth_global_0_x64: state.fee_growth_global_0_x64,
        fee_growth_global_1_x64: state.fee_growth_global_1_x64,
    }
}

pub struct StagedPool<'a> {
    env: Env,
    id: BytesN<32>,
    pub state: PoolState,
    pub ledger: TickLedger<'a, PoolTicks>,
}

impl<'a> StagedPool<'a> {
    /// # Errors
    /// * `PoolNotInitialized` - no pool stored under `ticks.id`
    pub fn load(env: &Env, ticks: &'a PoolTicks) -> Result<Self, PoolError> {
        let state = read_pool(env, &ticks.id)?;
        Ok(Self {
            env: env.clone(),
            id: ticks.id.clone(),
            state,
            ledger: TickLedger::load(env, ticks),
        })
    }

    /// Ledger limits for this pool under `config`
    pub fn limits(config: &ManagerConfig, tick_spacing: i32) -> Result<LedgerLimits, PoolError> {
        Ok(LedgerLimits {
            max_liquidity_per_tick: max_liquidity_per_tick(tick_spacing)?,
            min_tick_liquidity: config.min_tick_liquidity,
            max_ticks: config.max_ticks_per_pool,
        })
    }

    pub fn swap_state(&self) -> SwapState {
        swap_state(&self.state)
    }

    pub fn set_swap_state(&mut self, swap_state: &SwapState) {
        self.state.sqrt_price_x96 = to_host(&self.env, swap_state.sqrt_price_x96);
        self.state.tick = swap_state.tick;
        self.state.liquidity = swap_state.liquidity;
        self.state.fee_growth_global_0_x64 = swap_state.fee_growth_global_0_x64;
        self.state.fee_growth_global_1_x64 = swap_state.fee_growth_global_1_x64;
    }

    /// Write the pool state and every staged tick
    pub fn commit(self) {
        write_pool(&self.env, &self.id, &self.state);
        if self.ledger.is_dirty() {
            write_tick_changes(&self.env, &self.id, &self.ledger.into_changes());
        }
    }
}
