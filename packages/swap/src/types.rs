use belugaswap_math::U256;

// ============================================================
// SWAP STATE
// ============================================================

/// Pool state the swap loop reads at the start and writes back at the end
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapState {
    pub sqrt_price_x96: U256,
    pub tick: i32,
    /// Active liquidity at `tick`
    pub liquidity: u128,
    pub fee_growth_global_0_x64: u128,
    pub fee_growth_global_1_x64: u128,
}

/// Direction, size and price bound of a swap
///
/// `amount_specified > 0` is exact input, `< 0` is exact output.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SwapRequest {
    pub zero_for_one: bool,
    pub amount_specified: i128,
    pub sqrt_price_limit_x96: U256,
}

/// Fee rates in pips
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SwapFees {
    pub lp_fee: u32,
    pub protocol_fee: u32,
}

/// Token deltas and fee totals of a completed swap
///
/// Positive amounts are owed to the pool, negative amounts to the swapper.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SwapOutcome {
    pub amount0: i128,
    pub amount1: i128,
    /// Fees credited to liquidity providers, in the input currency
    pub lp_fee_amount: u128,
    /// Fees set aside for the protocol, in the input currency
    pub protocol_fee_amount: u128,
    pub ticks_crossed: u32,
}
