// Initialized-Tick Index
//
// A sorted soroban Vec<i32> of every initialized tick in a pool. The vector
// is capped in length, so binary search and in-place insert/remove are cheap.

use belugaswap_math::PoolError;
use soroban_sdk::Vec;

/// Insert `tick`, keeping the index sorted
///
/// Returns false if the tick was already present.
///
/// # Errors
/// * `TickIndexFull` - the index already holds `max_ticks` entries
pub fn insert(index: &mut Vec<i32>, tick: i32, max_ticks: u32) -> Result<bool, PoolError> {
    match index.binary_search(tick) {
        Ok(_) => Ok(false),
        Err(pos) => {
            if index.len() >= max_ticks {
                return Err(PoolError::TickIndexFull);
            }
            index.insert(pos, tick);
            Ok(true)
        }
    }
}

/// Remove `tick`; returns false if it was not present
pub fn remove(index: &mut Vec<i32>, tick: i32) -> bool {
    match index.binary_search(tick) {
        Ok(pos) => {
            index.remove(pos);
            true
        }
        Err(_) => false,
    }
}

#[inline]
pub fn contains(index: &Vec<i32>, tick: i32) -> bool {
    index.binary_search(tick).is_ok()
}

/// Greatest indexed tick strictly below `tick`
pub fn next_below(index: &Vec<i32>, tick: i32) -> Option<i32> {
    let pos = match index.binary_search(tick) {
        Ok(pos) | Err(pos) => pos,
    };
    if pos == 0 {
        None
    } else {
        index.get(pos - 1)
    }
}

/// Smallest indexed tick strictly above `tick`
pub fn next_above(index: &Vec<i32>, tick: i32) -> Option<i32> {
    let pos = match index.binary_search(tick) {
        Ok(pos) => pos + 1,
        Err(pos) => pos,
    };
    index.get(pos)
}
