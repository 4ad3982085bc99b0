//! Main Staking v2 (MasterChef): farm deposit/withdraw calls and events.

pub mod constants;
pub mod decoder;
