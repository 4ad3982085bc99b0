//! Cake Pool: flexible/locked CAKE staking withdrawals and harvests.

pub mod constants;
pub mod decoder;
