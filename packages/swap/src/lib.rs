#![no_std]

pub mod engine;
pub mod types;

pub use types::{SwapFees, SwapOutcome, SwapRequest, SwapState};

pub use engine::{compute_swap_fee, execute_swap, quote_swap, validate_swap};
