use alloy::primitives::{address, Address};

// Cake Pool constants
pub const CAKE_POOL_ADDRESS: Address = address!("45c54210128a065de780C4B0Df3d16664f7f859e");

// Canonical function signatures
pub const WITHDRAW_ALL_SIGNATURE: &str = "withdrawAll()";
pub const WITHDRAW_BY_AMOUNT_SIGNATURE: &str = "withdrawByAmount(uint256)";

// Canonical event signatures. Withdraw hashes identically to the farm's
// Withdraw(address,uint256,uint256) despite the different field meanings.
pub const WITHDRAW_EVENT_SIGNATURE: &str = "Withdraw(address,uint256,uint256)";
pub const HARVEST_EVENT_SIGNATURE: &str = "Harvest(address,uint256)";
