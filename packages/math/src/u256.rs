// SPDX-License-Identifier: MIT
// 256/512-bit Unsigned Integers
//
// Sqrt prices are Q64.96 values that need up to 160 bits, and their products
// with liquidity need a 512-bit intermediate before division. The host U256
// requires an Env for every operation, so the math packages work on native
// integers and the contract converts at its storage boundary.

use uint::construct_uint;

use crate::error::PoolError;

construct_uint! {
    /// 256-bit unsigned integer.
    pub struct U256(4);
}

construct_uint! {
    /// 512-bit unsigned integer, used only for full-precision intermediates.
    pub struct U512(8);
}

/// Zero-extend a U256 into a U512
#[inline]
pub fn widen(x: U256) -> U512 {
    let mut words = [0u64; 8];
    words[..4].copy_from_slice(&x.0);
    U512(words)
}

/// Narrow a U512 back to U256, or None if the high half is non-zero
#[inline]
pub fn narrow(x: U512) -> Option<U256> {
    if x.0[4..].iter().any(|w| *w != 0) {
        return None;
    }
    let mut words = [0u64; 4];
    words.copy_from_slice(&x.0[..4]);
    Some(U256(words))
}

/// Checked conversion to u128
#[inline]
pub fn to_u128(x: U256) -> Result<u128, PoolError> {
    if x.bits() > 128 {
        return Err(PoolError::AmountOverflow);
    }
    Ok(x.low_u128())
}

/// Checked conversion to a non-negative i128
#[inline]
pub fn to_i128(x: U256) -> Result<i128, PoolError> {
    let v = to_u128(x)?;
    i128::try_from(v).map_err(|_| PoolError::AmountOverflow)
}

/// Big-endian bytes, the layout used by the host U256
pub fn to_be_bytes(x: U256) -> [u8; 32] {
    let mut buf = [0u8; 32];
    x.to_big_endian(&mut buf);
    buf
}

/// Inverse of `to_be_bytes`
pub fn from_be_bytes(bytes: &[u8; 32]) -> U256 {
    U256::from_big_endian(bytes)
}
