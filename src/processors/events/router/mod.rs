//! PancakeSwap Router v2: liquidity management calls.

pub mod constants;
pub mod decoder;
