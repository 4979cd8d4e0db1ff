// Host <-> native U256
//
// Stored prices use the host U256 so they serialize as contract values; the
// engine works on the native type. Both share the big-endian 32-byte layout.

use belugaswap_math::u256::{from_be_bytes, to_be_bytes};
use soroban_sdk::{Bytes, Env, U256};

pub type NativeU256 = belugaswap_math::U256;

pub fn to_native(value: &U256) -> NativeU256 {
    let mut buf = [0u8; 32];
    value.to_be_bytes().copy_into_slice(&mut buf);
    from_be_bytes(&buf)
}

pub fn to_host(env: &Env, value: NativeU256) -> U256 {
    U256::from_be_bytes(env, &Bytes::from_array(env, &to_be_bytes(value)))
}
