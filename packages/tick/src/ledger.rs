// Tick Ledger
//
// Copy-on-write view over one pool's ticks. Reads fall through to the
// backing storage; every write lands in a local map and a local copy of the
// initialized-tick index. Nothing reaches storage until the caller takes the
// staged changes and commits them.

use belugaswap_math::{
    add_delta,
    constants::{MAX_TICK, MIN_TICK},
    is_aligned, PoolError,
};
use soroban_sdk::{Env, Map, Vec};

use crate::index;
use crate::types::{LedgerLimits, NextTick, TickInfo};

// ============================================================
// STORAGE
// ============================================================

/// Storage trait for tick operations
/// This allows the ledger to work over any storage implementation
pub trait TickStorage {
    fn read_tick(&self, env: &Env, tick: i32) -> Option<TickInfo>;
    /// Sorted initialized ticks
    fn read_tick_index(&self, env: &Env) -> Vec<i32>;
}

/// An in-memory tick table, for exercising the ledger without contract storage
impl TickStorage for Map<i32, TickInfo> {
    fn read_tick(&self, _env: &Env, tick: i32) -> Option<TickInfo> {
        self.get(tick)
    }

    fn read_tick_index(&self, env: &Env) -> Vec<i32> {
        let mut index = Vec::new(env);
        for (tick, info) in self.iter() {
            if info.is_initialized() {
                index.push_back(tick);
            }
        }
        index
    }
}

/// Staged tick writes ready to be committed
pub struct TickChanges {
    /// Every touched tick; uninitialized entries are to be deleted
    pub ticks: Map<i32, TickInfo>,
    /// New index, if it changed
    pub index: Option<Vec<i32>>,
}

// ============================================================
// VALIDATION
// ============================================================

/// Validate a liquidity range against the global bounds and tick spacing
///
/// # Errors
/// * `TicksMisordered` - lower >= upper
/// * `TickOutOfBounds` - either bound outside [MIN_TICK, MAX_TICK]
/// * `TickMisaligned` - either bound not a multiple of `tick_spacing`
pub fn check_ticks(tick_lower: i32, tick_upper: i32, tick_spacing: i32) -> Result<(), PoolError> {
    if tick_lower >= tick_upper {
        return Err(PoolError::TicksMisordered);
    }
    if tick_lower < MIN_TICK || tick_upper > MAX_TICK {
        return Err(PoolError::TickOutOfBounds);
    }
    if !is_aligned(tick_lower, tick_spacing) || !is_aligned(tick_upper, tick_spacing) {
        return Err(PoolError::TickMisaligned);
    }
    Ok(())
}

// ============================================================
// LEDGER
// ============================================================

pub struct TickLedger<'a, S: TickStorage> {
    env: Env,
    storage: &'a S,
    writes: Map<i32, TickInfo>,
    index: Vec<i32>,
    index_dirty: bool,
}

impl<'a, S: TickStorage> TickLedger<'a, S> {
    pub fn load(env: &Env, storage: &'a S) -> Self {
        Self {
            env: env.clone(),
            storage,
            writes: Map::new(env),
            index: storage.read_tick_index(env),
            index_dirty: false,
        }
    }

    /// Current view of `tick`; uninitialized ticks read as zero
    pub fn get(&self, tick: i32) -> TickInfo {
        self.writes
            .get(tick)
            .or_else(|| self.storage.read_tick(&self.env, tick))
            .unwrap_or_default()
    }

    /// Sorted initialized ticks, including staged changes
    pub fn initialized_ticks(&self) -> Vec<i32> {
        self.index.clone()
    }

    pub fn is_initialized(&self, tick: i32) -> bool {
        index::contains(&self.index, tick)
    }

    /// Update both bounds of a range for a liquidity delta
    ///
    /// Lower gets `+delta` net and upper `-delta`; both get `|delta|` applied to
    /// gross. Either both ticks are updated or neither is. Returns whether
    /// each bound flipped between initialized and uninitialized.
    ///
    /// # Errors
    /// * `InsufficientLiquidity` - a gross value would go negative
    /// * `TickLiquidityOverflow` - a gross value would exceed the per-tick cap
    /// * `TickLiquidityTooLow` - a new tick would start below the threshold
    /// * `TickIndexFull` - new ticks would exceed the index cap
    /// * `LiquidityOverflow` - a net value would overflow i128
    #[allow(clippy::too_many_arguments)]
    pub fn apply_liquidity_delta(
        &mut self,
        tick_lower: i32,
        tick_upper: i32,
        liquidity_delta: i128,
        current_tick: i32,
        fee_growth_global_0: u128,
        fee_growth_global_1: u128,
        limits: &LedgerLimits,
    ) -> Result<(bool, bool), PoolError> {
        if liquidity_delta == 0 {
            return Ok((false, false));
        }

        let (lower_info, flipped_lower) = self.next_state(
            tick_lower,
            current_tick,
            liquidity_delta,
            false,
            fee_growth_global_0,
            fee_growth_global_1,
            limits,
        )?;
        let (upper_info, flipped_upper) = self.next_state(
            tick_upper,
            current_tick,
            liquidity_delta,
            true,
            fee_growth_global_0,
            fee_growth_global_1,
            limits,
        )?;

        if liquidity_delta > 0 {
            let new_ticks = flipped_lower as u32 + flipped_upper as u32;
            if new_ticks > 0 && self.index.len() + new_ticks > limits.max_ticks {
                return Err(PoolError::TickIndexFull);
            }
        }

        self.stage(tick_lower, lower_info, flipped_lower, limits.max_ticks)?;
        self.stage(tick_upper, upper_info, flipped_upper, limits.max_ticks)?;

        Ok((flipped_lower, flipped_upper))
    }

    /// Nearest initialized tick strictly beyond `from_tick`
    ///
    /// Searches downward when `lte` is set, upward otherwise. Falls back to
    /// the MIN_TICK / MAX_TICK sentinel when nothing is initialized that way.
    pub fn next_initialized_tick(&self, from_tick: i32, lte: bool) -> NextTick {
        let found = if lte {
            index::next_below(&self.index, from_tick)
        } else {
            index::next_above(&self.index, from_tick)
        };

        match found {
            Some(tick) => NextTick {
                tick,
                initialized: true,
            },
            None => NextTick {
                tick: if lte { MIN_TICK } else { MAX_TICK },
                initialized: false,
            },
        }
    }

    /// Cross `tick` during a swap
    ///
    /// Flips the tick's outside fee growth and returns its liquidity_net.
    pub fn cross(&mut self, tick: i32, fee_growth_global_0: u128, fee_growth_global_1: u128) -> i128 {
        let mut info = self.get(tick);

        info.fee_growth_outside_0_x64 = fee_growth_global_0.wrapping_sub(info.fee_growth_outside_0_x64);
        info.fee_growth_outside_1_x64 = fee_growth_global_1.wrapping_sub(info.fee_growth_outside_1_x64);

        let liquidity_net = info.liquidity_net;
        self.writes.set(tick, info);
        liquidity_net
    }

    /// True if anything was staged
    pub fn is_dirty(&self) -> bool {
        self.index_dirty || !self.writes.is_empty()
    }

    /// Hand the staged writes to the caller for commit
    pub fn into_changes(self) -> TickChanges {
        TickChanges {
            ticks: self.writes,
            index: if self.index_dirty { Some(self.index) } else { None },
        }
    }

    // --------------------------------------------------------
    // internal
    // --------------------------------------------------------

    #[allow(clippy::too_many_arguments)]
    fn next_state(
        &self,
        tick: i32,
        current_tick: i32,
        liquidity_delta: i128,
        upper: bool,
        fee_growth_global_0: u128,
        fee_growth_global_1: u128,
        limits: &LedgerLimits,
    ) -> Result<(TickInfo, bool), PoolError> {
        let mut info = self.get(tick);

        let liquidity_gross_before = info.liquidity_gross;
        let liquidity_gross_after = add_delta(liquidity_gross_before, liquidity_delta)?;

        if liquidity_gross_after > limits.max_liquidity_per_tick {
            return Err(PoolError::TickLiquidityOverflow);
        }

        let flipped = (liquidity_gross_after == 0) != (liquidity_gross_before == 0);

        if liquidity_gross_before == 0 {
            if liquidity_gross_after < limits.min_tick_liquidity {
                return Err(PoolError::TickLiquidityTooLow);
            }
            // All growth so far is assumed to have happened below the tick
            if tick <= current_tick {
                info.fee_growth_outside_0_x64 = fee_growth_global_0;
                info.fee_growth_outside_1_x64 = fee_growth_global_1;
            }
        }

        info.liquidity_gross = liquidity_gross_after;

        info.liquidity_net = if upper {
            info.liquidity_net.checked_sub(liquidity_delta)
        } else {
            info.liquidity_net.checked_add(liquidity_delta)
        }
        .ok_or(PoolError::LiquidityOverflow)?;

        if liquidity_gross_after == 0 {
            info = TickInfo::default();
        }

        Ok((info, flipped))
    }

    fn stage(&mut self, tick: i32, info: TickInfo, flipped: bool, max_ticks: u32) -> Result<(), PoolError> {
        if flipped {
            if info.is_initialized() {
                index::insert(&mut self.index, tick, max_ticks)?;
            } else {
                index::remove(&mut self.index, tick);
            }
            self.index_dirty = true;
        }
        self.writes.set(tick, info);
        Ok(())
    }
}
