use alloy::primitives::{address, Address};

// Router v2 constants
pub const ROUTER_V2_ADDRESS: Address = address!("10ED43C718714eb63d5aA57B78B54704E256024E");

// Canonical function signatures
pub const ADD_LIQUIDITY_SIGNATURE: &str =
    "addLiquidity(address,address,uint256,uint256,uint256,uint256,address,uint256)";
pub const REMOVE_LIQUIDITY_WITH_PERMIT_SIGNATURE: &str =
    "removeLiquidityWithPermit(address,address,uint256,uint256,uint256,address,uint256,bool,uint8,bytes32,bytes32)";
