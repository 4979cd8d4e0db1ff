#![no_std]

pub mod fee_growth;
pub mod index;
pub mod ledger;
pub mod types;

pub use fee_growth::{fee_growth_delta, get_fee_growth_inside};
pub use ledger::{check_ticks, TickChanges, TickLedger, TickStorage};
pub use types::{LedgerLimits, NextTick, TickInfo};
