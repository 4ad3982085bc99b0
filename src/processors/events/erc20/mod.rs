//! ERC-20 Transfer logs, decoded as children of classified transactions.

pub mod constants;
pub mod decoder;
