use alloy::primitives::{address, Address};

// Main Staking v2 constants
pub const MAIN_STAKING_V2_ADDRESS: Address = address!("a5f8C5Dbd5F286960b9d90548680aE5ebFf07652");

// Canonical function signatures
pub const DEPOSIT_SIGNATURE: &str = "deposit(uint256,uint256)";
pub const WITHDRAW_SIGNATURE: &str = "withdraw(uint256,uint256)";

// Canonical event signatures. The Withdraw topic hash is shared with the
// Cake Pool's Withdraw event; bindings disambiguate by emitting address.
pub const DEPOSIT_EVENT_SIGNATURE: &str = "Deposit(address,uint256,uint256)";
pub const WITHDRAW_EVENT_SIGNATURE: &str = "Withdraw(address,uint256,uint256)";
